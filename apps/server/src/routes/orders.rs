//! Order placement endpoint.
//!
//! ## Request Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       POST /api/orders                                  │
//! │                                                                         │
//! │  body ──► JSON? ──► { items: [ {id, quantity}, ... ] } non-empty?      │
//! │              │                    │                                     │
//! │              └── no ──────────────┴── no ──► 400 Invalid items payload │
//! │                                   │ yes                                 │
//! │                                   ▼                                     │
//! │                        CheckoutService::place_order                     │
//! │                           │                 │                           │
//! │                           ▼                 ▼                           │
//! │                    201 + receipt     400 Stock validation failed       │
//! │                                          + per-line details            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shape problems (no body, bad JSON, missing/empty `items`, rows without
//! an integer `id`) are payload errors. A row with an integer `id` but a
//! bad quantity (fractional, wrong type, missing) or an unknown id is a
//! *validation* problem, reported per line, so one typo does not hide
//! the other diagnostics.

use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use till_core::{CommittedLine, OrderLine, Receipt};

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router {
    Router::new().route("/orders", post(create_order))
}

// ===== Request DTOs =====

/// Raw order payload: `{ "items": [ { "id": 1, "quantity": 2 }, ... ] }`.
///
/// Unknown fields (a client-side `price`, say) are ignored; pricing is
/// the server's job.
#[derive(Debug, Deserialize)]
struct OrderRequest {
    items: Vec<OrderItemRequest>,
}

/// One requested line.
///
/// `quantity` stays a raw JSON value here, optional: `2.5`, `"2"`, or a
/// missing field must all reach the validator as "invalid quantity"
/// rather than bounce as a payload error, because quantity problems are
/// per-line diagnostics on the wire. Only `id` is strict.
#[derive(Debug, Deserialize)]
struct OrderItemRequest {
    id: i64,
    quantity: Option<Value>,
}

// ===== Response DTOs =====

/// Committed order, `201 Created` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderResponse {
    order_id: String,
    items: Vec<CommittedLineDto>,
    total: i64,
}

/// One priced line. `price` and `lineTotal` are in cents.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommittedLineDto {
    id: i64,
    name: String,
    price: i64,
    quantity: i64,
    line_total: i64,
}

impl From<&CommittedLine> for CommittedLineDto {
    fn from(line: &CommittedLine) -> Self {
        CommittedLineDto {
            id: line.product_id,
            name: line.name.clone(),
            price: line.unit_price_cents,
            quantity: line.quantity,
            line_total: line.line_total_cents,
        }
    }
}

impl From<Receipt> for OrderResponse {
    fn from(receipt: Receipt) -> Self {
        OrderResponse {
            order_id: receipt.order_id,
            items: receipt.lines.iter().map(CommittedLineDto::from).collect(),
            total: receipt.total_cents,
        }
    }
}

// ===== Handler =====

/// `POST /api/orders` - place an order.
///
/// The body is taken as `Option<Json<Value>>` so that a missing or
/// unparseable body becomes `None` instead of axum's stock rejection;
/// every shape failure must surface as the API's own payload error.
async fn create_order(
    Extension(state): Extension<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let raw = match body {
        Some(Json(raw)) => raw,
        None => return Err(ApiError::InvalidPayload),
    };

    let lines = parse_lines(raw).ok_or(ApiError::InvalidPayload)?;
    debug!(lines = lines.len(), "Order received");

    let receipt = state.checkout.place_order(&lines)?;
    Ok((StatusCode::CREATED, Json(receipt.into())))
}

/// Extracts order lines, or `None` when the payload shape is wrong.
fn parse_lines(raw: Value) -> Option<Vec<OrderLine>> {
    let request: OrderRequest = serde_json::from_value(raw).ok()?;
    if request.items.is_empty() {
        return None;
    }

    Some(
        request
            .items
            .iter()
            .map(|item| OrderLine::from_json(item.id, item.quantity.as_ref()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_accepts_wellformed_items() {
        let lines = parse_lines(json!({
            "items": [ { "id": 1, "quantity": 2 }, { "id": 7, "quantity": 1 } ]
        }))
        .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_id, 1);
        assert_eq!(lines[0].quantity, Some(2));
    }

    #[test]
    fn test_parse_keeps_fractional_quantity_for_the_validator() {
        let lines = parse_lines(json!({
            "items": [ { "id": 1, "quantity": 2.5 } ]
        }))
        .unwrap();

        assert_eq!(lines[0].quantity, None);
    }

    #[test]
    fn test_parse_keeps_non_numeric_quantity_for_the_validator() {
        let lines = parse_lines(json!({
            "items": [
                { "id": 1, "quantity": "2" },
                { "id": 2 },
                { "id": 3, "quantity": null }
            ]
        }))
        .unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].quantity, None);
        assert_eq!(lines[1].quantity, None);
        assert_eq!(lines[2].quantity, None);
        assert_eq!(lines[1].product_id, 2);
    }

    #[test]
    fn test_parse_ignores_client_prices() {
        let lines = parse_lines(json!({
            "items": [ { "id": 1, "quantity": 2, "price": 1 } ]
        }))
        .unwrap();

        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        for raw in [
            json!({}),
            json!({ "items": [] }),
            json!({ "items": "not-an-array" }),
            json!({ "items": [ { "quantity": 2 } ] }),      // id missing
            json!({ "items": [ { "id": "1", "quantity": 2 } ] }), // id not a number
            json!({ "items": [ { "id": 1.5, "quantity": 2 } ] }), // id not an integer
            json!([1, 2, 3]),
            json!("items"),
        ] {
            assert!(parse_lines(raw).is_none());
        }
    }

    #[test]
    fn test_response_wire_shape() {
        let receipt = Receipt::new(
            "ord_feedbeef_000001".to_string(),
            vec![CommittedLine {
                product_id: 3,
                name: "Dairy Item 3".to_string(),
                unit_price_cents: 130,
                quantity: 2,
                line_total_cents: 260,
            }],
        );

        let value = serde_json::to_value(OrderResponse::from(receipt)).unwrap();
        assert_eq!(
            value,
            json!({
                "orderId": "ord_feedbeef_000001",
                "items": [ {
                    "id": 3,
                    "name": "Dairy Item 3",
                    "price": 130,
                    "quantity": 2,
                    "lineTotal": 260
                } ],
                "total": 260
            })
        );
    }
}
