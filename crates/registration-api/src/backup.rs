//! Backup logging of submissions.
//!
//! Every accepted submission is written to the log regardless of delivery
//! outcome, so data is not lost when outbound email is unavailable.

use crate::submission::Submission;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// One backup record: the full raw submission plus delivery outcome.
#[derive(Debug, Serialize)]
pub struct BackupRecord<'a> {
    #[serde(flatten)]
    pub submission: &'a Submission,

    #[serde(rename = "deliveredByEmail")]
    pub delivered_by_email: bool,

    #[serde(rename = "receivedAt")]
    pub received_at: DateTime<Utc>,
}

impl<'a> BackupRecord<'a> {
    pub fn new(submission: &'a Submission, delivered_by_email: bool) -> Self {
        Self {
            submission,
            delivered_by_email,
            received_at: Utc::now(),
        }
    }
}

/// Emit the backup record as one structured log line.
pub fn log_backup_record(submission: &Submission, delivered_by_email: bool) {
    let record = BackupRecord::new(submission, delivered_by_email);
    match serde_json::to_string(&record) {
        Ok(json) => info!(record = %json, "registration_backup_record"),
        // Submission came from serde_json, so this should not happen
        Err(e) => warn!(error = %e, "Failed to serialize backup record"),
    }
}
