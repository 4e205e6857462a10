//! Hackathon registration service.
//!
//! One substantive endpoint, `POST /api/register`, which:
//! - validates a submission's required fields and email format
//! - optionally forwards the submission via the MailChannels send API
//! - always logs a structured backup record so no submission is lost

pub mod api;
pub mod backup;
pub mod config;
pub mod email;
pub mod error;
pub mod submission;

pub use config::Config;
pub use error::ApiError;
