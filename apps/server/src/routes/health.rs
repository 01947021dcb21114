//! Liveness endpoint.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

/// `GET /api/health` - always `{"status":"ok"}` while the process runs.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
