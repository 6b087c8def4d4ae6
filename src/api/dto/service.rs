//! DTO for the service descriptor endpoint.

use serde::Serialize;

/// Service descriptor returned from `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub service: String,
    pub version: String,
    pub endpoints: String,
}
