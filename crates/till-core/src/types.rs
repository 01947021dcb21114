//! # Domain Types
//!
//! Core domain types used throughout Till POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   OrderLine     │   │  CommittedLine  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  product_id     │   │  product_id     │       │
//! │  │  name           │   │  quantity       │   │  name (frozen)  │       │
//! │  │  price_cents    │   │  (as requested, │   │  unit_price     │       │
//! │  │  category       │   │   may be junk)  │   │  quantity       │       │
//! │  │  sku            │   │                 │   │  line_total     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Catalog (immutable)    Request (untrusted)   Receipt line (trusted)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trust Boundary
//! An `OrderLine` carries whatever the client sent; nothing about it is
//! trusted until the validator has passed it. A `CommittedLine` is built
//! exclusively from catalog data plus a validated quantity, so its prices
//! cannot be tampered with by the request payload.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Products are created once at catalog load and never mutated or deleted,
/// so shared references to them are safe anywhere in the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (positive integer).
    pub id: i64,

    /// Display name shown on receipts.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Category name, e.g. "Beverages".
    pub category: String,

    /// Stock Keeping Unit - derived business identifier, unique per id.
    pub sku: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order Line (request)
// =============================================================================

/// One requested (product, quantity) pair of an incoming order.
///
/// ## Quantity Representation
/// `quantity` is `None` when the request carried anything but an integer
/// in that slot: a fractional number (`1.5`), a number beyond i64 range,
/// a string (`"2"`), `null`, or no `quantity` field at all. The
/// conversion is deliberately kept out of serde so the validator can
/// report the line as `InvalidQuantity` alongside every other problem in
/// the order, instead of the transport layer rejecting the whole payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Product id the client asked for (its existence is not yet checked).
    pub product_id: i64,

    /// Requested quantity, if it was an integer at all.
    pub quantity: Option<i64>,
}

impl OrderLine {
    /// Creates a line with an integer quantity.
    pub fn new(product_id: i64, quantity: i64) -> Self {
        OrderLine {
            product_id,
            quantity: Some(quantity),
        }
    }

    /// Creates a line from the raw JSON `quantity` field as received on
    /// the wire, `None` when the field was absent.
    ///
    /// Accepts integer-typed numbers and float-typed numbers that are
    /// mathematically integral (`3.0` means 3). Everything else - `1.5`,
    /// values beyond i64 range, strings, `null`, a missing field -
    /// becomes `quantity: None`, which the validator reports as
    /// `InvalidQuantity`.
    pub fn from_json(product_id: i64, quantity: Option<&serde_json::Value>) -> Self {
        let quantity = match quantity {
            Some(serde_json::Value::Number(n)) => integral(n),
            _ => None,
        };
        OrderLine {
            product_id,
            quantity,
        }
    }
}

/// Converts a JSON number to an integer quantity if it is one.
fn integral(quantity: &serde_json::Number) -> Option<i64> {
    if let Some(q) = quantity.as_i64() {
        return Some(q);
    }

    let f = quantity.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, so `<` keeps the cast in range.
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

// =============================================================================
// Committed Line
// =============================================================================

/// A line of a committed order.
/// Uses the snapshot pattern to freeze product data at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedLine {
    /// Product this line sold.
    pub product_id: i64,

    /// Product name at commit time (frozen).
    pub name: String,

    /// Unit price in cents at commit time (frozen, from the catalog).
    pub unit_price_cents: i64,

    /// Quantity sold.
    pub quantity: i64,

    /// Line total (unit_price × quantity).
    pub line_total_cents: i64,
}

impl CommittedLine {
    /// Creates a committed line from a catalog product and a validated quantity.
    ///
    /// ## Price Freezing
    /// The unit price is copied from the catalog at this moment. Client
    /// payloads never influence it, so a request that smuggles its own
    /// `price` field changes nothing.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CommittedLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            line_total_cents: product.price().multiply_quantity(quantity).cents(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price_cents,
            category: "Snacks".to_string(),
            sku: format!("SNA-{:04}", id),
        }
    }

    #[test]
    fn test_committed_line_freezes_catalog_price() {
        let p = product(1, 299);
        let line = CommittedLine::from_product(&p, 3);

        assert_eq!(line.product_id, 1);
        assert_eq!(line.name, "Product 1");
        assert_eq!(line.unit_price_cents, 299);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.line_total_cents, 897);
        assert_eq!(line.line_total(), Money::from_cents(897));
    }

    #[test]
    fn test_order_line_from_integer_json() {
        let line = OrderLine::from_json(1, Some(&json!(3)));
        assert_eq!(line.quantity, Some(3));

        let negative = OrderLine::from_json(1, Some(&json!(-2)));
        assert_eq!(negative.quantity, Some(-2)); // validator rejects it, not us
    }

    #[test]
    fn test_order_line_from_integral_float_json() {
        let line = OrderLine::from_json(1, Some(&json!(3.0)));
        assert_eq!(line.quantity, Some(3));
    }

    #[test]
    fn test_order_line_from_fractional_json_is_invalid() {
        let line = OrderLine::from_json(1, Some(&json!(1.5)));
        assert_eq!(line.quantity, None);
    }

    #[test]
    fn test_order_line_out_of_range_is_invalid() {
        assert_eq!(OrderLine::from_json(1, Some(&json!(1e300))).quantity, None);
        assert_eq!(OrderLine::from_json(1, Some(&json!(u64::MAX))).quantity, None);
    }

    #[test]
    fn test_order_line_from_non_number_json_is_invalid() {
        assert_eq!(OrderLine::from_json(1, None).quantity, None);
        assert_eq!(OrderLine::from_json(1, Some(&json!("2"))).quantity, None);
        assert_eq!(OrderLine::from_json(1, Some(&json!(null))).quantity, None);
        assert_eq!(OrderLine::from_json(1, Some(&json!([2]))).quantity, None);
        assert_eq!(OrderLine::from_json(1, Some(&json!(true))).quantity, None);
    }
}
