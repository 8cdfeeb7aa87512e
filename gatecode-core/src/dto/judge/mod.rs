//! Judge DTOs

use serde::{Deserialize, Serialize};

use crate::domain::language::Language;
use crate::dto::RequestError;

/// Body of `POST /api/v1/problems/{slug}/judge`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeRequest {
    pub language: Language,
    pub code: String,
    /// Evaluate every case instead of stopping at the first failure
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub run_all: bool,
}

impl JudgeRequest {
    pub fn new(language: Language, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
            run_all: false,
        }
    }

    pub fn with_run_all(mut self, run_all: bool) -> Self {
        self.run_all = run_all;
        self
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.code.trim().is_empty() {
            return Err(RequestError::EmptyCode);
        }
        Ok(())
    }
}

/// Raw response of the judge endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct JudgeResponse {
    pub status: String,
    #[serde(default)]
    pub passed: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub runtime_ms: i64,
    #[serde(default)]
    pub memory_kb: Option<i64>,
    #[serde(default)]
    pub failed_case: Option<FailedCaseDto>,
    #[serde(default)]
    pub all_cases: Option<Vec<CaseResultDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FailedCaseDto {
    pub index: i64,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub expected: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseResultDto {
    pub index: u32,
    pub status: String,
    #[serde(default)]
    pub actual: String,
}
