//! # Seed Data
//!
//! Deterministic startup catalog and stock levels.
//!
//! ## Determinism
//! Every field is a pure function of the product id, so every boot of
//! every instance produces byte-identical data. That keeps demo clients,
//! integration tests and load tests in agreement about what product 7
//! costs without sharing any state.
//!
//! ## Shape
//! ```text
//! id 1    Bakery Item 1     BAK-0001   110 cents   11 in stock
//! id 7    Beverages Item 7  BEV-0007   170 cents   17 in stock
//! id 205  Snacks Item 205   SNA-0205   150 cents   35 in stock
//!         └── category cycles through 7, price wraps at 200, stock at 90
//! ```

use std::collections::HashMap;

use till_core::Product;

/// Product categories, cycled by id.
pub const CATEGORIES: [&str; 7] = [
    "Beverages",
    "Bakery",
    "Snacks",
    "Dairy",
    "Produce",
    "Household",
    "Personal Care",
];

/// Catalog size when no override is configured.
pub const DEFAULT_CATALOG_SIZE: usize = 1500;

/// Generates `count` products with ids `1..=count`.
pub fn catalog(count: usize) -> Vec<Product> {
    (1..=count as i64)
        .map(|id| {
            let category = category_for(id);
            Product {
                id,
                name: format!("{} Item {}", category, id),
                price_cents: 100 + (id % 200) * 10,
                category: category.to_string(),
                sku: format!("{}-{:04}", &category[..3].to_uppercase(), id),
            }
        })
        .collect()
}

/// Generates starting stock levels for the given products.
pub fn inventory(products: &[Product]) -> HashMap<i64, i64> {
    products.iter().map(|p| (p.id, initial_stock(p.id))).collect()
}

/// Starting stock for a product id: between 10 and 99 units.
#[inline]
pub fn initial_stock(id: i64) -> i64 {
    10 + (id % 90)
}

#[inline]
fn category_for(id: i64) -> &'static str {
    CATEGORIES[(id % 7) as usize]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_have_expected_fields() {
        let products = catalog(10);

        let first = &products[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Bakery Item 1");
        assert_eq!(first.category, "Bakery");
        assert_eq!(first.sku, "BAK-0001");
        assert_eq!(first.price_cents, 110);

        let seventh = &products[6];
        assert_eq!(seventh.id, 7);
        assert_eq!(seventh.name, "Beverages Item 7");
        assert_eq!(seventh.category, "Beverages");
        assert_eq!(seventh.sku, "BEV-0007");
        assert_eq!(seventh.price_cents, 170);
    }

    #[test]
    fn test_price_wraps_after_two_hundred_ids() {
        let products = catalog(205);
        assert_eq!(products[204].price_cents, 150); // same as id 5
        assert_eq!(products[4].price_cents, 150);
    }

    #[test]
    fn test_catalog_is_deterministic() {
        assert_eq!(catalog(100), catalog(100));
    }

    #[test]
    fn test_catalog_count_and_id_range() {
        let products = catalog(50);

        assert_eq!(products.len(), 50);
        assert_eq!(products.first().map(|p| p.id), Some(1));
        assert_eq!(products.last().map(|p| p.id), Some(50));
    }

    #[test]
    fn test_inventory_covers_every_product() {
        let products = catalog(120);
        let stock = inventory(&products);

        assert_eq!(stock.len(), products.len());
        assert_eq!(stock.get(&1), Some(&11));
        assert_eq!(stock.get(&7), Some(&17));
        // id 90 wraps the stock formula back to 10.
        assert_eq!(stock.get(&90), Some(&10));
    }

    #[test]
    fn test_stock_stays_in_band() {
        for id in 1..=1000 {
            let level = initial_stock(id);
            assert!((10..=99).contains(&level));
        }
    }
}
