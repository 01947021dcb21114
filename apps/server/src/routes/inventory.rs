//! Inventory endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn router() -> Router {
    Router::new().route("/inventory", get(get_inventory))
}

/// `GET /api/inventory` - current stock as a `{"<id>": units}` map.
///
/// The snapshot is re-sorted into a `BTreeMap` so the serialized object
/// always lists ids in ascending order; clients diffing two responses
/// see real changes, not map-iteration noise.
async fn get_inventory(Extension(state): Extension<Arc<AppState>>) -> Json<BTreeMap<i64, i64>> {
    let levels: BTreeMap<i64, i64> = state.inventory.snapshot().into_iter().collect();
    Json(levels)
}
