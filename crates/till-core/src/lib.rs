//! # till-core: Pure Business Logic for Till POS
//!
//! This crate is the **heart** of Till POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Till POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/server)                       │   │
//! │  │    GET /api/products ─ GET /api/inventory ─ POST /api/orders    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    till-store (Live State)                      │   │
//! │  │    CatalogStore ── InventoryStore ── CheckoutService            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  receipt  │  │   │
//! │  │   │  Product  │  │   Money   │  │   order   │  │  Receipt  │  │   │
//! │  │   │ OrderLine │  │  (cents)  │  │   rules   │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO SHARED STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, OrderLine, CommittedLine)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Line-level validation problems
//! - [`validation`] - Order admission rules
//! - [`receipt`] - Receipt totals over committed lines
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and shared state access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{CommittedLine, Money, Product, Receipt};
//!
//! let product = Product {
//!     id: 1,
//!     name: "Bakery Item 1".to_string(),
//!     price_cents: 110, // $1.10 - never a float!
//!     category: "Bakery".to_string(),
//!     sku: "BAK-0001".to_string(),
//! };
//!
//! // Unit price is copied from the catalog, never from client input
//! let line = CommittedLine::from_product(&product, 3);
//! assert_eq!(line.line_total_cents, 330);
//!
//! let receipt = Receipt::new("ord_1f2e3d4c_000001".to_string(), vec![line]);
//! assert_eq!(receipt.total(), Money::from_cents(330));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Money` instead of
// `use till_core::money::Money`

pub use error::{ProblemKind, ValidationProblem};
pub use money::Money;
pub use receipt::Receipt;
pub use types::*;
pub use validation::validate_order;
