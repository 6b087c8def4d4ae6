//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "abc123xy",
///   "original_url": "https://example.com",
///   "clicks": 42,
///   "created_at": "2026-08-07T12:00:00Z"
/// }
/// ```
///
/// Reading statistics does not count as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let entry = state
        .store
        .stats(&code)
        .ok_or_else(|| AppError::not_found("Short URL not found"))?;

    Ok(Json(entry.into()))
}
