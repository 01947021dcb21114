//! # till-store: In-Memory Stores for Till POS
//!
//! This crate owns the state of the system: the immutable product catalog,
//! the mutable inventory ledger, and the checkout flow that ties them to
//! the validation rules in `till-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Till POS Data Flow                               │
//! │                                                                         │
//! │  HTTP Handler (POST /api/orders)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CheckoutService│   │ InventoryStore│    │ CatalogStore │  │   │
//! │  │   │ (checkout.rs) │───►│ (inventory.rs)│    │ (catalog.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ validate,     │    │ snapshot()    │    │ get()        │  │   │
//! │  │   │ price, retry  │───►│ try_commit()  │    │ list()       │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │                                                     │   │
//! │  │           ▼                                                     │   │
//! │  │   ┌───────────────┐    ┌───────────────┐                       │   │
//! │  │   │OrderIdGenerator│   │     seed      │                       │   │
//! │  │   │ (order_id.rs) │    │  (seed.rs)    │                       │   │
//! │  │   └───────────────┘    └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  till-core (validate_order, Receipt)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Read-only product lookup, ordered listing
//! - [`inventory`] - Stock levels behind one mutex, atomic commits
//! - [`checkout`] - Validate → price → commit orchestration
//! - [`order_id`] - Process-unique order identifiers
//! - [`seed`] - Deterministic startup data
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use till_core::OrderLine;
//! use till_store::{seed, CatalogStore, CheckoutService, InventoryStore};
//!
//! let products = seed::catalog(50);
//! let inventory = Arc::new(InventoryStore::new(seed::inventory(&products)));
//! let catalog = Arc::new(CatalogStore::new(products));
//! let checkout = CheckoutService::new(catalog, inventory);
//!
//! let receipt = checkout.place_order(&[OrderLine::new(1, 2)]).unwrap();
//! assert_eq!(receipt.lines[0].quantity, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod inventory;
pub mod order_id;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::CatalogStore;
pub use checkout::{CheckoutError, CheckoutService};
pub use inventory::{CommitOutcome, InventoryStore};
pub use order_id::OrderIdGenerator;
