//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::domain::store::UrlStore;

/// State shared by all request handlers.
///
/// Holds the single long-lived store instance and the base URL used to
/// build full short links in responses. Cloning is cheap; the store is
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UrlStore>,
    pub base_url: String,
}

impl AppState {
    /// Creates state around a store, trimming any trailing slash off the
    /// base URL so short links always join with exactly one `/`.
    pub fn new(store: Arc<UrlStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { store, base_url }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
