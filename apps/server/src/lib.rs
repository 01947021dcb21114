//! # till-server: HTTP API for Till POS
//!
//! Serves the catalog, live inventory and order placement over JSON.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Request Path                                    │
//! │                                                                         │
//! │  POS client ──► axum Router ──► routes/* handler ──► AppState          │
//! │                     │                                    │              │
//! │                     │                                    ▼              │
//! │                     │                     till-store (checkout, stores) │
//! │                     │                                    │              │
//! │                     ▼                                    ▼              │
//! │              error::ApiError ◄─────────── till-core (validation)        │
//! │              (400 JSON bodies)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path             | Success                              |
//! |--------|------------------|--------------------------------------|
//! | GET    | `/api/health`    | `{"status":"ok"}`                    |
//! | GET    | `/api/products`  | catalog array, ascending id          |
//! | GET    | `/api/inventory` | `{"<id>": units}` map                |
//! | POST   | `/api/orders`    | `201` receipt with server prices     |
//!
//! The library exposes [`build_app`] so integration tests can run the
//! exact production router on an ephemeral port.

use std::sync::Arc;

use axum::{Extension, Router};
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Builds the full HTTP application over shared state.
pub fn build_app(state: Arc<AppState>) -> Router {
    routes::router().layer(Extension(state))
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; the default keeps our crates chatty and
/// everything else at `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,till_server=debug,till_store=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
