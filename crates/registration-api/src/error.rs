//! Error types for the registration service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error types.
///
/// Delivery failures are intentionally absent: a failed outbound email is
/// recovered at the call site and never changes the response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            ApiError::InvalidEmailFormat => (StatusCode::BAD_REQUEST, "Invalid email format"),
            ApiError::Internal(detail) => {
                // Log the detail, answer with a generic body
                error!(detail = %detail, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
