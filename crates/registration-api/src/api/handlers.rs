//! HTTP request handlers.

use super::types::{HealthResponse, RegisterResponse};
use super::AppState;
use crate::backup::log_backup_record;
use crate::email::compose_registration_email;
use crate::error::ApiError;
use crate::submission::{is_valid_email, missing_fields, Submission};
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::{info, warn};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        email_delivery_enabled: state.mailer.is_some(),
    })
}

/// Accept one registration submission.
///
/// Parse, validate, attempt delivery (when enabled), always log a backup
/// record, respond. A failed delivery is logged and swallowed; once
/// validation passes the submission is accepted either way.
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RegisterResponse>, ApiError> {
    // Parsed by hand rather than with the Json extractor: the endpoint
    // contract answers 500, not 4xx, for an unreadable body.
    let submission: Submission = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(ApiError::Internal(format!(
                "Request body is not a JSON object: {}",
                other
            )))
        }
        Err(e) => return Err(ApiError::Internal(format!("Request body parse error: {}", e))),
    };

    let missing = missing_fields(&submission, &state.config.registration.required_fields);
    if !missing.is_empty() {
        info!(fields = ?missing, "Submission rejected, missing required fields");
        return Err(ApiError::MissingFields);
    }

    let email = submission
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if !is_valid_email(email) {
        info!("Submission rejected, invalid email format");
        return Err(ApiError::InvalidEmailFormat);
    }

    let delivered_by_email = match &state.mailer {
        Some(mailer) => {
            let request = compose_registration_email(&submission, &state.config.email);
            match mailer.send(&request).await {
                Ok(()) => Some(true),
                Err(e) => {
                    warn!(error = %e, "Mail delivery failed, submission retained in backup log");
                    Some(false)
                }
            }
        }
        None => None,
    };

    log_backup_record(&submission, delivered_by_email.unwrap_or(false));

    info!(
        delivered_by_email = ?delivered_by_email,
        "Registration received"
    );

    Ok(Json(RegisterResponse {
        success: true,
        delivered_by_email,
        message: "Registration received".to_string(),
    }))
}
