//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the entry for the code
/// 2. Increment its click counter
/// 3. Return `302 Found` with a `Location` header
///
/// The lookup and the increment are separate store operations; the
/// increment itself is atomic, so concurrent redirects on the same code
/// never lose a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist. No entry is
/// created as a side effect.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let entry = state
        .store
        .get(&code)
        .ok_or_else(|| AppError::not_found("Short URL not found"))?;

    state.store.increment_clicks(&code);

    tracing::debug!(code = %code, target = %entry.original_url, "redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, entry.original_url)],
    )
        .into_response())
}
