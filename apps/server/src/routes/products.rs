//! Product catalog endpoints.

use std::sync::Arc;

use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use till_core::Product;

use crate::state::AppState;

pub fn router() -> Router {
    Router::new().route("/products", get(list_products))
}

/// Catalog row as served to clients. `price` is in cents.
#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub category: String,
    pub sku: String,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        ProductDto {
            id: product.id,
            name: product.name.clone(),
            price: product.price_cents,
            category: product.category.clone(),
            sku: product.sku.clone(),
        }
    }
}

/// `GET /api/products` - the whole catalog, ascending by id.
async fn list_products(Extension(state): Extension<Arc<AppState>>) -> Json<Vec<ProductDto>> {
    let products: Vec<ProductDto> = state
        .catalog
        .list()
        .into_iter()
        .map(ProductDto::from)
        .collect();

    Json(products)
}
