//! Run and judge results

use serde::{Deserialize, Serialize};

use crate::domain::outcome::{OutcomeKind, Verdict};

/// Where a result was produced
///
/// Server results come from the judge service; client results are synthesized
/// locally when the service could not be reached or answered garbage. Both
/// share `OutcomeKind::SystemError` for failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultOrigin {
    #[default]
    Server,
    Client,
}

/// Result of a quick single-case run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub status: OutcomeKind,
    pub stdout: String,
    pub stderr: String,
    pub runtime_ms: u64,
    #[serde(default)]
    pub origin: ResultOrigin,
}

impl RunResult {
    /// Synthesize a renderable failure for a run that produced no server answer
    pub fn client_error(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeKind::SystemError,
            stdout: String::new(),
            stderr: message.into(),
            runtime_ms: 0,
            origin: ResultOrigin::Client,
        }
    }
}

/// Result of a full test-suite evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeResult {
    pub status: OutcomeKind,
    pub passed_count: u32,
    pub total_count: u32,
    pub runtime_ms: u64,
    pub memory_kb: Option<u64>,
    pub failed_case: Option<FailedCase>,
    /// Per-case outcomes, only present for run-all judging
    #[serde(default)]
    pub all_cases: Option<Vec<CaseResult>>,
    /// Transport failure description for client-synthesized results
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub origin: ResultOrigin,
}

impl JudgeResult {
    /// Synthesize a renderable failure for a judge call that produced no server answer
    pub fn client_error(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeKind::SystemError,
            passed_count: 0,
            total_count: 0,
            runtime_ms: 0,
            memory_kb: None,
            failed_case: None,
            all_cases: None,
            error_message: Some(message.into()),
            origin: ResultOrigin::Client,
        }
    }
}

/// The first test case that caused a non-accepted verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedCase {
    /// 0-based case index, or [`FailedCase::COMPILE_FAILURE`]
    pub index: i64,
    pub input: Option<String>,
    pub expected: Option<String>,
    /// stdout for wrong answers, stderr for runtime and compile errors
    pub actual: Option<String>,
}

impl FailedCase {
    /// Sentinel index used when the code never compiled
    pub const COMPILE_FAILURE: i64 = -1;

    pub fn is_compile_sentinel(&self) -> bool {
        self.index == Self::COMPILE_FAILURE
    }
}

/// Outcome of a single case under run-all judging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    pub index: u32,
    pub status: OutcomeKind,
    pub actual: String,
}

impl Verdict for RunResult {
    fn outcome(&self) -> OutcomeKind {
        self.status
    }
}

impl Verdict for JudgeResult {
    fn outcome(&self) -> OutcomeKind {
        self.status
    }
}
