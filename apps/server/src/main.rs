//! # Till Server
//!
//! Binary entrypoint: load config, seed the stores, serve until a
//! shutdown signal arrives.

use tracing::info;

use till_server::config::ServerConfig;
use till_server::{build_app, init_tracing, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Till POS server...");

    let config = ServerConfig::load()?;
    info!(
        host = %config.host,
        port = config.port,
        catalog_size = config.catalog_size,
        "Configuration loaded"
    );

    let state = AppState::from_seed(config.catalog_size);
    info!(
        products = state.catalog.len(),
        "Seed catalog and inventory ready"
    );

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
