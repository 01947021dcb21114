//! HTTP error responses.
//!
//! ## Wire Contract
//! Order rejections are part of the API, not incidental:
//! ```text
//! 400  { "error": "Invalid items payload" }
//! 400  { "error": "Stock validation failed",
//!        "details": [ { "id": 999, "message": "Product not found" }, ... ] }
//! ```
//! The `details` list carries one entry per failing line so a client can
//! mark every bad row in one round trip.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use till_store::CheckoutError;

/// One rejected line of an order, as reported to the client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProblemDetail {
    pub id: i64,
    pub message: String,
}

/// Client-visible request failures.
///
/// The `#[error]` strings double as the `error` field on the wire, so
/// they must not drift.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body was not an object with a non-empty `items` array of
    /// `{id, quantity}` rows.
    #[error("Invalid items payload")]
    InvalidPayload,

    /// Order validation failed; one detail per failing line.
    #[error("Stock validation failed")]
    StockValidation(Vec<ProblemDetail>),
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Rejected(problems) => ApiError::StockValidation(
                problems
                    .into_iter()
                    .map(|p| ProblemDetail {
                        id: p.product_id,
                        message: p.message(),
                    })
                    .collect(),
            ),
            // Retries exhausted under contention: no single line is to
            // blame, so the details list is empty.
            CheckoutError::Contention { .. } => ApiError::StockValidation(Vec::new()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        let body = match self {
            ApiError::InvalidPayload => json!({ "error": error }),
            ApiError::StockValidation(details) => {
                json!({ "error": error, "details": details })
            }
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
