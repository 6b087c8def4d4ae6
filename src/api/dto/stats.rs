//! DTOs for the link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlEntry;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlEntry> for StatsResponse {
    fn from(entry: UrlEntry) -> Self {
        Self {
            short_code: entry.short_code,
            original_url: entry.original_url,
            clicks: entry.clicks,
            created_at: entry.created_at,
        }
    }
}
