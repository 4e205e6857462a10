//! MailChannels client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailChannelsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("MailChannels API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
