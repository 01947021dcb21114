//! HTTP routes, one module per resource.

use axum::Router;

pub mod health;
pub mod inventory;
pub mod orders;
pub mod products;

/// Full route tree, everything under `/api`.
pub fn router() -> Router {
    Router::new().nest(
        "/api",
        Router::new()
            .merge(health::router())
            .merge(products::router())
            .merge(inventory::router())
            .merge(orders::router()),
    )
}
