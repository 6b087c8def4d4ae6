//! Handler for the service descriptor endpoint.

use axum::Json;

use crate::api::dto::service::ServiceDescriptor;

/// Returns a short machine-readable description of the service.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// {
///   "service": "URL Shortener API",
///   "version": "0.1.0",
///   "endpoints": "POST /shorten, GET /{shortCode}, GET /stats/{shortCode}"
/// }
/// ```
pub async fn index_handler() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: "URL Shortener API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: "POST /shorten, GET /{shortCode}, GET /stats/{shortCode}".to_string(),
    })
}
