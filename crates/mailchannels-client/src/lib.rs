//! MailChannels transactional email client.

mod client;
mod error;
mod types;

pub use client::{MailChannelsClient, DEFAULT_API_URL};
pub use error::MailChannelsError;
pub use types::*;
