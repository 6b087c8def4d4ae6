//! # Tinylink
//!
//! A fast in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate splits into a small core and a thin transport layer:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::store::UrlStore`]
//!   (concurrent short-code map with atomic click counters) and the
//!   [`domain::entities::UrlEntry`] entity
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and tracing middleware
//! - **Ambient** - [`config`], [`error`], [`state`], [`server`]
//!
//! ## Features
//!
//! - Cryptographically random, URL-safe 8-character short codes with
//!   bounded collision retry
//! - Lock-scoped atomic click counting (no lost updates under concurrency)
//! - Structured logging with text or JSON output
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: where generated short links should point
//! export BASE_URL="http://localhost:8080"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! Mappings live in process memory only and are discarded on exit.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::entities::UrlEntry;
    pub use crate::domain::store::{StoreError, UrlStore};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
