//! HTTP server initialization and runtime setup.
//!
//! Builds the store and shared state, wires the router, and drives the
//! Axum server lifecycle including graceful shutdown.

use crate::config::Config;
use crate::domain::store::UrlStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory URL store (one instance, living until process exit)
/// - The Axum router with trailing-slash normalization
/// - Graceful shutdown on ctrl-c
///
/// All mappings are discarded when the process exits; there is no
/// persistence layer.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(UrlStore::new());
    let state = AppState::new(store, config.base_url.clone());

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
