//! API response types.

use serde::Serialize;

/// Response for an accepted registration.
///
/// `delivered_by_email` is only present when email delivery is enabled;
/// with delivery disabled the response is just success plus message.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,

    #[serde(rename = "deliveredByEmail", skip_serializing_if = "Option::is_none")]
    pub delivered_by_email: Option<bool>,

    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,

    #[serde(rename = "emailDeliveryEnabled")]
    pub email_delivery_enabled: bool,
}
