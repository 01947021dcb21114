//! # Inventory Store
//!
//! Stock levels behind a single mutex.
//!
//! ## Commit Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     try_commit (one lock scope)                         │
//! │                                                                         │
//! │  1. Aggregate demands per product  (two lines of id 7 become one)      │
//! │  2. Check EVERY demand against current stock                           │
//! │       │                                                                 │
//! │       ├── any short ──► Conflict, NOTHING written                      │
//! │       │                                                                 │
//! │       ▼ all covered                                                     │
//! │  3. Subtract EVERY demand ──► Committed                                │
//! │                                                                         │
//! │  Check and apply happen under the same lock acquisition, so two        │
//! │  concurrent orders can never both pass the check for the same units.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Never Negative
//! Stock only changes inside `try_commit`, every subtraction was checked
//! moments earlier under the same lock, and a failed check writes nothing.
//! No code path can take a level below zero.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

/// Result of an atomic commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Every demand was covered; stock has been decremented.
    Committed,
    /// At least one demand exceeded current stock; stock is untouched.
    Conflict,
}

/// Mutable stock ledger, shared across request handlers.
///
/// Readers take a point-in-time copy via [`snapshot`](Self::snapshot);
/// the only writer is [`try_commit`](Self::try_commit).
///
/// ## Usage
/// ```rust
/// use std::collections::HashMap;
/// use till_store::{CommitOutcome, InventoryStore};
///
/// let store = InventoryStore::new(HashMap::from([(1, 5)]));
///
/// assert_eq!(store.try_commit(&[(1, 3)]), CommitOutcome::Committed);
/// assert_eq!(store.try_commit(&[(1, 3)]), CommitOutcome::Conflict);
/// assert_eq!(store.snapshot().get(&1), Some(&2));
/// ```
#[derive(Debug)]
pub struct InventoryStore {
    levels: Mutex<HashMap<i64, i64>>,
}

impl InventoryStore {
    /// Creates the store with initial stock levels.
    pub fn new(initial: HashMap<i64, i64>) -> Self {
        InventoryStore {
            levels: Mutex::new(initial),
        }
    }

    /// Copies the current stock levels.
    ///
    /// The copy is consistent (taken under the lock) but immediately
    /// stale: a commit may land right after it is taken. Callers that
    /// need to reserve stock must go through [`try_commit`](Self::try_commit).
    pub fn snapshot(&self) -> HashMap<i64, i64> {
        self.levels.lock().expect("inventory mutex poisoned").clone()
    }

    /// Atomically decrements stock for a whole order, or not at all.
    ///
    /// `demands` is a list of `(product_id, quantity)` pairs. Duplicate
    /// ids are summed before checking, so a request cannot sneak past
    /// the check by splitting one product across lines. A product with
    /// no ledger entry has zero stock.
    ///
    /// ## Returns
    /// * [`CommitOutcome::Committed`] - all demands covered and applied
    /// * [`CommitOutcome::Conflict`] - some demand short; nothing applied
    pub fn try_commit(&self, demands: &[(i64, i64)]) -> CommitOutcome {
        let mut needed: HashMap<i64, i64> = HashMap::new();
        for &(product_id, quantity) in demands {
            *needed.entry(product_id).or_insert(0) += quantity;
        }

        let mut levels = self.levels.lock().expect("inventory mutex poisoned");

        for (&product_id, &quantity) in &needed {
            let available = levels.get(&product_id).copied().unwrap_or(0);
            if available < quantity {
                debug!(
                    product_id,
                    available,
                    requested = quantity,
                    "Commit blocked by stock check"
                );
                return CommitOutcome::Conflict;
            }
        }

        for (&product_id, &quantity) in &needed {
            *levels.entry(product_id).or_insert(0) -= quantity;
        }

        CommitOutcome::Committed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn store(levels: &[(i64, i64)]) -> InventoryStore {
        InventoryStore::new(levels.iter().copied().collect())
    }

    #[test]
    fn test_snapshot_reflects_initial_levels() {
        let inventory = store(&[(1, 5), (2, 0)]);

        let snapshot = inventory.snapshot();
        assert_eq!(snapshot.get(&1), Some(&5));
        assert_eq!(snapshot.get(&2), Some(&0));
        assert_eq!(snapshot.get(&3), None);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let inventory = store(&[(1, 5)]);

        let mut snapshot = inventory.snapshot();
        snapshot.insert(1, 0);

        assert_eq!(inventory.snapshot().get(&1), Some(&5));
    }

    #[test]
    fn test_commit_decrements_every_line() {
        let inventory = store(&[(1, 5), (2, 8)]);

        let outcome = inventory.try_commit(&[(1, 2), (2, 8)]);

        assert_eq!(outcome, CommitOutcome::Committed);
        let snapshot = inventory.snapshot();
        assert_eq!(snapshot.get(&1), Some(&3));
        assert_eq!(snapshot.get(&2), Some(&0));
    }

    #[test]
    fn test_short_line_blocks_whole_commit() {
        let inventory = store(&[(1, 5), (2, 1)]);

        let outcome = inventory.try_commit(&[(1, 2), (2, 2)]);

        // Product 1 had plenty, but product 2 was short - nothing moves.
        assert_eq!(outcome, CommitOutcome::Conflict);
        let snapshot = inventory.snapshot();
        assert_eq!(snapshot.get(&1), Some(&5));
        assert_eq!(snapshot.get(&2), Some(&1));
    }

    #[test]
    fn test_duplicate_ids_are_summed_before_checking() {
        let inventory = store(&[(1, 5)]);

        assert_eq!(
            inventory.try_commit(&[(1, 3), (1, 3)]),
            CommitOutcome::Conflict
        );
        assert_eq!(inventory.snapshot().get(&1), Some(&5));

        assert_eq!(
            inventory.try_commit(&[(1, 2), (1, 3)]),
            CommitOutcome::Committed
        );
        assert_eq!(inventory.snapshot().get(&1), Some(&0));
    }

    #[test]
    fn test_unknown_product_has_zero_stock() {
        let inventory = store(&[(1, 5)]);

        assert_eq!(inventory.try_commit(&[(42, 1)]), CommitOutcome::Conflict);
    }

    #[test]
    fn test_commit_to_exactly_zero_is_allowed() {
        let inventory = store(&[(1, 5)]);

        assert_eq!(inventory.try_commit(&[(1, 5)]), CommitOutcome::Committed);
        assert_eq!(inventory.snapshot().get(&1), Some(&0));

        // And one more unit is now a conflict.
        assert_eq!(inventory.try_commit(&[(1, 1)]), CommitOutcome::Conflict);
    }

    #[test]
    fn test_concurrent_commits_cannot_oversell() {
        // Two orders race for 3 of the 5 units of product 1. Exactly one
        // may win; stock must end at 2, never -1.
        let inventory = Arc::new(store(&[(1, 5)]));
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let inventory = Arc::clone(&inventory);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    inventory.try_commit(&[(1, 3)])
                })
            })
            .collect();

        let outcomes: Vec<CommitOutcome> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        let committed = outcomes
            .iter()
            .filter(|o| **o == CommitOutcome::Committed)
            .count();
        assert_eq!(committed, 1);
        assert_eq!(inventory.snapshot().get(&1), Some(&2));
    }

    #[test]
    fn test_many_racing_commits_never_go_negative() {
        let inventory = Arc::new(store(&[(1, 10)]));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let inventory = Arc::clone(&inventory);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    inventory.try_commit(&[(1, 3)])
                })
            })
            .collect();

        let committed = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|o| *o == CommitOutcome::Committed)
            .count();

        // 10 units fit exactly three commits of 3.
        assert_eq!(committed, 3);
        assert_eq!(inventory.snapshot().get(&1), Some(&1));
    }
}
