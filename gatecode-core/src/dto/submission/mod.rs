//! Submission history DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response of `GET /api/v1/problems/{slug}/submissions`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionList {
    #[serde(default)]
    pub submissions: Vec<SubmissionRecordDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRecordDto {
    pub id: String,
    pub status: String,
    pub language: String,
    #[serde(default)]
    pub runtime_ms: i64,
    #[serde(default)]
    pub memory_kb: Option<i64>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}
