//! Configuration for the registration service.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Outbound email configuration
    #[serde(default)]
    pub email: EmailConfig,

    /// Registration form configuration
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Forward submissions by email (if false, submissions are only logged)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// MailChannels API base URL
    #[serde(default = "default_email_api_url")]
    pub api_url: String,

    /// Recipient address for registration notifications
    #[serde(default = "default_to_addr")]
    pub to_addr: String,

    /// Sender address
    #[serde(default = "default_from_addr")]
    pub from_addr: String,

    /// Sender display name
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Field names that must be present and non-empty in a submission
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: default_email_api_url(),
            to_addr: default_to_addr(),
            from_addr: default_from_addr(),
            from_name: default_from_name(),
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            required_fields: default_required_fields(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_email_api_url() -> String {
    mailchannels_client::DEFAULT_API_URL.into()
}

fn default_to_addr() -> String {
    "registrations@hackthevalley.com".into()
}

fn default_from_addr() -> String {
    "noreply@hackthevalley.com".into()
}

fn default_from_name() -> String {
    "Hack the Valley Registrations".into()
}

fn default_required_fields() -> Vec<String> {
    ["name", "email", "university", "year", "experience", "tshirt", "coc"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("registration.required_fields"),
            )
            .build()
            .context("Failed to build configuration")?;

        let mut config: Config = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // Recognized overrides carried over from the original deployment
        if let Ok(addr) = std::env::var("REGISTRATION_TO_EMAIL") {
            if !addr.is_empty() {
                config.email.to_addr = addr;
            }
        }
        if let Ok(addr) = std::env::var("REGISTRATION_FROM_EMAIL") {
            if !addr.is_empty() {
                config.email.from_addr = addr;
            }
        }

        Ok(config)
    }
}
