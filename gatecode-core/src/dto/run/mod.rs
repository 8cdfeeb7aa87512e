//! Run DTOs

use serde::{Deserialize, Serialize};

use crate::domain::language::Language;
use crate::dto::RequestError;

/// Body of `POST /api/v1/problems/{slug}/run`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub language: Language,
    pub code: String,
}

impl RunRequest {
    pub fn new(language: Language, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.code.trim().is_empty() {
            return Err(RequestError::EmptyCode);
        }
        Ok(())
    }
}

/// Raw response of the run endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RunResponse {
    pub status: String,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    #[serde(default)]
    pub runtime_ms: i64,
}
