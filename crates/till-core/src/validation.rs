//! # Order Validation
//!
//! Admission rules for incoming orders.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Per-Line Checks (in order)                         │
//! │                                                                         │
//! │  For each requested line:                                              │
//! │                                                                         │
//! │  1. Product in catalog? ──── no ──► NotFound                           │
//! │           │ yes                                                         │
//! │           ▼                                                             │
//! │  2. Quantity a positive ──── no ──► InvalidQuantity                    │
//! │     integer?                                                            │
//! │           │ yes                                                         │
//! │           ▼                                                             │
//! │  3. Enough stock left? ───── no ──► InsufficientStock {have, need}     │
//! │           │ yes                                                         │
//! │           ▼                                                             │
//! │     line is admissible (claims its quantity for later lines)           │
//! │                                                                         │
//! │  Problems ACCUMULATE across lines - the caller gets every failing      │
//! │  line in one pass, never just the first.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## All-or-Nothing Admission
//! One invalid line invalidates the entire order, matching the atomicity
//! of the inventory commit. An empty problem list is the only admission
//! ticket to the commit path.

use std::collections::{BTreeMap, HashMap};

use crate::error::ValidationProblem;
use crate::types::{OrderLine, Product};

/// Validates requested lines against the catalog and an inventory snapshot.
///
/// Pure function: reads its inputs, mutates nothing, and returns every
/// problem found. The overall request is admissible only when the
/// returned list is empty.
///
/// ## Duplicate Lines
/// "Enough stock" is judged against the snapshot minus quantities already
/// claimed by earlier valid lines of the same request. Two lines asking
/// for 3 of a product with 5 in stock therefore fail on the second line
/// with `have 2, need 3` - the same verdict the commit would reach - so a
/// request can never pass validation and then oversell against itself.
///
/// ## Example
/// ```rust
/// use std::collections::{BTreeMap, HashMap};
/// use till_core::{validate_order, OrderLine, Product};
///
/// let catalog: BTreeMap<i64, Product> = [(1, Product {
///     id: 1,
///     name: "Bakery Item 1".to_string(),
///     price_cents: 110,
///     category: "Bakery".to_string(),
///     sku: "BAK-0001".to_string(),
/// })]
/// .into_iter()
/// .collect();
/// let snapshot: HashMap<i64, i64> = [(1, 5)].into_iter().collect();
///
/// let ok = validate_order(&catalog, &snapshot, &[OrderLine::new(1, 3)]);
/// assert!(ok.is_empty());
///
/// let short = validate_order(&catalog, &snapshot, &[OrderLine::new(1, 9)]);
/// assert_eq!(short[0].message(), "Insufficient stock: have 5, need 9");
/// ```
pub fn validate_order(
    catalog: &BTreeMap<i64, Product>,
    snapshot: &HashMap<i64, i64>,
    lines: &[OrderLine],
) -> Vec<ValidationProblem> {
    let mut problems = Vec::new();
    // Quantities already claimed by earlier valid lines of this request.
    let mut claimed: HashMap<i64, i64> = HashMap::new();

    for line in lines {
        if !catalog.contains_key(&line.product_id) {
            problems.push(ValidationProblem::not_found(line.product_id));
            continue;
        }

        let quantity = match line.quantity {
            Some(q) if q > 0 => q,
            _ => {
                problems.push(ValidationProblem::invalid_quantity(line.product_id));
                continue;
            }
        };

        let available = snapshot.get(&line.product_id).copied().unwrap_or(0)
            - claimed.get(&line.product_id).copied().unwrap_or(0);
        if available < quantity {
            problems.push(ValidationProblem::insufficient_stock(
                line.product_id,
                available,
                quantity,
            ));
            continue;
        }

        *claimed.entry(line.product_id).or_insert(0) += quantity;
    }

    problems
}

// =============================================================================
// Unit Tests
// =============================================================================
