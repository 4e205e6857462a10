//! HTTP client for the MailChannels transactional send API.

use crate::error::MailChannelsError;
use crate::types::SendRequest;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Production API base URL.
pub const DEFAULT_API_URL: &str = "https://api.mailchannels.net";

/// MailChannels send client.
///
/// Holds one connection pool; clone freely.
#[derive(Clone)]
pub struct MailChannelsClient {
    client: Client,
    base_url: String,
}

impl MailChannelsClient {
    /// Create a client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, MailChannelsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                MailChannelsError::Internal(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one send request.
    ///
    /// Any non-success status is surfaced as [`MailChannelsError::Api`] with
    /// the response body captured for logging.
    #[instrument(skip(self, request), fields(subject = %request.subject))]
    pub async fn send(&self, request: &SendRequest) -> Result<(), MailChannelsError> {
        let url = format!("{}/tx/v1/send", self.base_url);

        debug!(url = %url, "Submitting send request");

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "MailChannels send failed");

            return Err(MailChannelsError::Api { status, body });
        }

        debug!("Send request accepted");
        Ok(())
    }
}
