//! Shared application state.
//!
//! One `AppState` is built at startup and handed to every request via
//! `Extension<Arc<AppState>>`. The catalog and inventory are also held
//! individually so read-only routes can skip the checkout service.

use std::collections::HashMap;
use std::sync::Arc;

use till_core::Product;
use till_store::{seed, CatalogStore, CheckoutService, InventoryStore};

/// Everything a request handler can reach.
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub inventory: Arc<InventoryStore>,
    pub checkout: CheckoutService,
}

impl AppState {
    /// Wires the stores and checkout service over the given data.
    ///
    /// Tests use this directly to start from hand-picked products and
    /// stock levels.
    pub fn new(products: Vec<Product>, stock: HashMap<i64, i64>) -> Arc<Self> {
        let catalog = Arc::new(CatalogStore::new(products));
        let inventory = Arc::new(InventoryStore::new(stock));
        let checkout = CheckoutService::new(Arc::clone(&catalog), Arc::clone(&inventory));

        Arc::new(AppState {
            catalog,
            inventory,
            checkout,
        })
    }

    /// Production wiring: deterministic seed data of the given size.
    pub fn from_seed(catalog_size: usize) -> Arc<Self> {
        let products = seed::catalog(catalog_size);
        let stock = seed::inventory(&products);
        Self::new(products, stock)
    }
}
