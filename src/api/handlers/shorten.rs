//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with the full short link:
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/abc123xy",
///   "short_code": "abc123xy",
///   "original_url": "https://example.com"
/// }
/// ```
///
/// Every call creates a fresh entry: shortening the same URL twice yields
/// two distinct codes.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or `url` is empty.
/// Returns 500 Internal Server Error if no unique code could be generated
/// within the retry limit.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|_| AppError::bad_request("Invalid JSON"))?;
    payload.validate()?;

    let entry = state.store.create(payload.url)?;

    tracing::debug!(code = %entry.short_code, "short link created");

    let response = ShortenResponse {
        short_url: state.short_url(&entry.short_code),
        short_code: entry.short_code,
        original_url: entry.original_url,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
