//! Payload types for the MailChannels transactional send API.

use serde::{Deserialize, Serialize};

/// An email address with an optional display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    /// Address without a display name.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    /// Address with a display name.
    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// A personalization block (recipient set) for one send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

/// One content part of the message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// MIME type, e.g. "text/html"
    #[serde(rename = "type")]
    pub content_type: String,

    pub value: String,
}

impl Content {
    /// An HTML content part.
    pub fn html(value: impl Into<String>) -> Self {
        Self {
            content_type: "text/html".to_string(),
            value: value.into(),
        }
    }
}

/// Request body for `POST /tx/v1/send`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRequest {
    pub personalizations: Vec<Personalization>,

    pub from: EmailAddress,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailAddress>,

    pub subject: String,

    pub content: Vec<Content>,
}
