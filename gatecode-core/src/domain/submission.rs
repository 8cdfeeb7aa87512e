//! Submission history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::outcome::{OutcomeKind, Verdict};

/// A past judged submission for one problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub status: OutcomeKind,
    /// Display name when recognized, otherwise as reported
    pub language: String,
    pub runtime_ms: u64,
    pub memory_kb: Option<u64>,
    pub code: String,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Verdict for SubmissionRecord {
    fn outcome(&self) -> OutcomeKind {
        self.status
    }
}
