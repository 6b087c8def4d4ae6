//! Application error type and its HTTP representation.
//!
//! Every error a handler can produce is recovered at the boundary and
//! turned into a structured JSON body of the form `{"error": "..."}` with
//! a matching status code. Nothing in this module terminates the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::store::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    MethodNotAllowed { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::Internal { message } => write!(f, "{message}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::MethodNotAllowed { message } => (StatusCode::METHOD_NOT_ALLOWED, message),
            AppError::Internal { message } => {
                tracing::error!(error = %message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmptyUrl => AppError::bad_request(e.to_string()),
            // Exhausting the retry limit is an internal condition: the
            // caller's input was fine, the code space wasn't.
            StoreError::CodeSpaceExhausted { .. } => AppError::internal(e.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let message = e
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::bad_request(message)
    }
}
