//! # Catalog Store
//!
//! Read-only product lookup.
//!
//! ## Immutability Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog vs Inventory Split                          │
//! │                                                                         │
//! │   CatalogStore (this module)          InventoryStore                   │
//! │   ─────────────────────────           ──────────────                   │
//! │   WHAT products exist                 HOW MANY are left                │
//! │   id, name, price, category, sku      id → units on hand               │
//! │   frozen after startup                changes on every commit          │
//! │   no locking needed                   single mutex                     │
//! │                                                                         │
//! │   Orders read prices from HERE - never from the request payload.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The backing map is a `BTreeMap` keyed by product id, so listing is
//! ascending-id order for free and lookups stay O(log n).

use std::collections::BTreeMap;

use till_core::Product;

/// Immutable product catalog.
///
/// Built once at startup and shared behind an `Arc`; no interior
/// mutability because nothing ever changes after construction.
///
/// ## Usage
/// ```rust
/// use till_core::Product;
/// use till_store::CatalogStore;
///
/// let catalog = CatalogStore::new(vec![Product {
///     id: 1,
///     name: "Bakery Item 1".to_string(),
///     price_cents: 110,
///     category: "Bakery".to_string(),
///     sku: "BAK-0001".to_string(),
/// }]);
///
/// assert!(catalog.get(1).is_some());
/// assert!(catalog.get(999).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: BTreeMap<i64, Product>,
}

impl CatalogStore {
    /// Builds the catalog from seed products.
    ///
    /// Later duplicates of an id replace earlier ones; seed data never
    /// contains duplicates, so in practice this is a straight load.
    pub fn new(products: Vec<Product>) -> Self {
        CatalogStore {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Looks up a single product by id.
    #[inline]
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Lists every product in ascending id order.
    pub fn list(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// The full id → product map, for validation passes.
    #[inline]
    pub fn products(&self) -> &BTreeMap<i64, Product> {
        &self.products
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
