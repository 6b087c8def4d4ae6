//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Service descriptor
//! - `POST /shorten`        - Create a short link
//! - `GET  /stats/{code}`   - Statistics for a short link
//! - `GET  /{code}`         - Short link redirect
//!
//! Unmatched paths yield a JSON 404; a known path hit with the wrong HTTP
//! method yields a JSON 405. Trailing slashes are trimmed in
//! [`crate::server`] before requests reach this router.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{index_handler, redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware;
use crate::error::AppError;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(middleware::tracing::layer())
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}

async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("Method not allowed")
}
