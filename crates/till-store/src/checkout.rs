//! # Checkout
//!
//! Drives an order from raw lines to a committed receipt.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      place_order (per attempt)                          │
//! │                                                                         │
//! │  1. snapshot()        point-in-time stock copy                         │
//! │  2. validate_order()  against catalog + snapshot                       │
//! │       │                                                                 │
//! │       ├── problems ──► Err(Rejected(all problems))                     │
//! │       ▼ clean                                                           │
//! │  3. price lines       unit prices re-read from the catalog             │
//! │  4. try_commit()      atomic check-and-subtract                        │
//! │       │                                                                 │
//! │       ├── Conflict ──► a concurrent order took the stock first;        │
//! │       │                go back to 1 (bounded retries)                  │
//! │       ▼ Committed                                                       │
//! │  5. mint order id ──► Ok(Receipt)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Rule
//! Amounts on the receipt come from the catalog at commit time, never
//! from the request. A client claiming a different price changes nothing.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use till_core::{
    validate_order, CommittedLine, OrderLine, Receipt, ValidationProblem,
};

use crate::catalog::CatalogStore;
use crate::inventory::{CommitOutcome, InventoryStore};
use crate::order_id::OrderIdGenerator;

/// Upper bound on commit attempts for one order.
///
/// A conflict means another order changed stock between our snapshot and
/// our commit; re-validating against fresh stock either rejects the order
/// outright or succeeds quickly. More than a couple of loops only happens
/// under pathological contention, and giving up beats spinning.
pub const MAX_COMMIT_ATTEMPTS: u32 = 3;

/// Why an order did not commit.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Validation found problems; every failing line is reported.
    #[error("order rejected: {} line problem(s)", .0.len())]
    Rejected(Vec<ValidationProblem>),

    /// Commit kept losing races against concurrent orders.
    #[error("order abandoned after {attempts} contended commit attempts")]
    Contention { attempts: u32 },
}

/// Orchestrates validation, pricing and the atomic inventory commit.
///
/// Stateless apart from the shared stores, so one instance serves every
/// request concurrently.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use till_core::OrderLine;
/// use till_store::{seed, CatalogStore, CheckoutService, InventoryStore};
///
/// let products = seed::catalog(10);
/// let inventory = Arc::new(InventoryStore::new(seed::inventory(&products)));
/// let checkout = CheckoutService::new(Arc::new(CatalogStore::new(products)), inventory);
///
/// let receipt = checkout.place_order(&[OrderLine::new(3, 2)]).unwrap();
/// assert!(receipt.order_id.starts_with("ord_"));
/// ```
#[derive(Debug)]
pub struct CheckoutService {
    catalog: Arc<CatalogStore>,
    inventory: Arc<InventoryStore>,
    order_ids: OrderIdGenerator,
}

impl CheckoutService {
    /// Creates the service over shared catalog and inventory stores.
    pub fn new(catalog: Arc<CatalogStore>, inventory: Arc<InventoryStore>) -> Self {
        CheckoutService {
            catalog,
            inventory,
            order_ids: OrderIdGenerator::new(),
        }
    }

    /// Validates, prices and commits an order.
    ///
    /// On success the inventory has been decremented and the receipt
    /// carries catalog prices and a fresh order id. On
    /// [`CheckoutError::Rejected`] nothing was decremented and the
    /// problems list covers every failing line, not just the first.
    ///
    /// Callers are expected to reject empty orders at the boundary; an
    /// empty slice here commits trivially and yields an empty receipt.
    pub fn place_order(&self, lines: &[OrderLine]) -> Result<Receipt, CheckoutError> {
        for attempt in 1..=MAX_COMMIT_ATTEMPTS {
            let snapshot = self.inventory.snapshot();

            let problems = validate_order(self.catalog.products(), &snapshot, lines);
            if !problems.is_empty() {
                debug!(
                    problems = problems.len(),
                    lines = lines.len(),
                    "Order rejected by validation"
                );
                return Err(CheckoutError::Rejected(problems));
            }

            let priced = self.price_lines(lines)?;
            let demands: Vec<(i64, i64)> = priced
                .iter()
                .map(|line| (line.product_id, line.quantity))
                .collect();

            match self.inventory.try_commit(&demands) {
                CommitOutcome::Committed => {
                    let receipt = Receipt::new(self.order_ids.next_id(), priced);
                    info!(
                        order_id = %receipt.order_id,
                        lines = receipt.lines.len(),
                        total_cents = receipt.total_cents,
                        "Order committed"
                    );
                    return Ok(receipt);
                }
                CommitOutcome::Conflict => {
                    // Stock moved between snapshot and commit. Loop and
                    // re-validate against what is actually left.
                    warn!(attempt, "Commit lost a race with a concurrent order");
                }
            }
        }

        warn!(
            attempts = MAX_COMMIT_ATTEMPTS,
            "Giving up on contended order"
        );
        Err(CheckoutError::Contention {
            attempts: MAX_COMMIT_ATTEMPTS,
        })
    }

    /// Builds priced lines from the catalog.
    ///
    /// Runs only after validation passed, so the error paths guard
    /// against bugs rather than expected input.
    fn price_lines(&self, lines: &[OrderLine]) -> Result<Vec<CommittedLine>, CheckoutError> {
        lines
            .iter()
            .map(|line| {
                let product = self.catalog.get(line.product_id).ok_or_else(|| {
                    CheckoutError::Rejected(vec![ValidationProblem::not_found(line.product_id)])
                })?;
                let quantity = line.quantity.filter(|q| *q > 0).ok_or_else(|| {
                    CheckoutError::Rejected(vec![ValidationProblem::invalid_quantity(
                        line.product_id,
                    )])
                })?;
                Ok(CommittedLine::from_product(product, quantity))
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
