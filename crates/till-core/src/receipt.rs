//! # Receipt
//!
//! The committed-order record handed back to the caller.
//!
//! ## Construction Rules
//! A receipt is only ever built from lines that already passed validation
//! and whose prices were re-derived from the catalog. The total is computed
//! here, from those lines, in integer cents - it is never accepted from
//! outside, so the receipt always equals the sum of its parts.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::CommittedLine;

/// Record of a successfully committed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    /// Opaque unique identifier, e.g. `ord_3f2a9c1d_000042`.
    pub order_id: String,
    /// Priced lines, in request order.
    pub lines: Vec<CommittedLine>,
    /// Grand total in cents; always the sum of the line totals.
    pub total_cents: i64,
}

impl Receipt {
    /// Builds a receipt, deriving the total from the lines.
    pub fn new(order_id: String, lines: Vec<CommittedLine>) -> Self {
        let total = lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total());
        Self {
            order_id,
            lines,
            total_cents: total.cents(),
        }
    }

    /// Grand total as typed money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Dairy Item {}", id),
            price_cents,
            category: "Dairy".to_string(),
            sku: format!("DAI-{:04}", id),
        }
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let lines = vec![
            CommittedLine::from_product(&product(1, 110), 2), // 220
            CommittedLine::from_product(&product(2, 250), 3), // 750
        ];

        let receipt = Receipt::new("ord_test_000001".to_string(), lines);

        assert_eq!(receipt.total_cents, 970);
        assert_eq!(receipt.total(), Money::from_cents(970));
    }

    #[test]
    fn test_empty_receipt_totals_zero() {
        let receipt = Receipt::new("ord_test_000002".to_string(), Vec::new());
        assert_eq!(receipt.total_cents, 0);
        assert!(receipt.total().is_zero());
    }

    #[test]
    fn test_lines_keep_request_order() {
        let lines = vec![
            CommittedLine::from_product(&product(9, 100), 1),
            CommittedLine::from_product(&product(3, 100), 1),
        ];

        let receipt = Receipt::new("ord_test_000003".to_string(), lines);

        let ids: Vec<i64> = receipt.lines.iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![9, 3]);
    }
}
