//! Judge service abstraction
//!
//! The session layer talks to the judge through [`JudgeApi`] so it can be
//! driven by the HTTP client in production and by scripted fakes in tests.

use async_trait::async_trait;
use gatecode_core::domain::result::{JudgeResult, RunResult};
use gatecode_core::domain::submission::SubmissionRecord;
use gatecode_core::dto::judge::JudgeRequest;
use gatecode_core::dto::run::RunRequest;

use crate::JudgeClient;
use crate::error::Result;

/// Bearer credential for authenticated endpoints
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Remote operations offered by the judge service
#[async_trait]
pub trait JudgeApi: Send + Sync {
    /// Quick single-case execution
    async fn run(&self, problem: &str, req: &RunRequest) -> Result<RunResult>;

    /// Full test-suite evaluation; fails with `AuthRequired` when `token` is `None`
    async fn judge(
        &self,
        problem: &str,
        req: &JudgeRequest,
        token: Option<&BearerToken>,
    ) -> Result<JudgeResult>;

    /// Most recent submissions for a problem, newest first
    async fn list_submissions(
        &self,
        problem: &str,
        limit: u32,
        token: Option<&BearerToken>,
    ) -> Result<Vec<SubmissionRecord>>;
}

#[async_trait]
impl JudgeApi for JudgeClient {
    async fn run(&self, problem: &str, req: &RunRequest) -> Result<RunResult> {
        JudgeClient::run(self, problem, req).await
    }

    async fn judge(
        &self,
        problem: &str,
        req: &JudgeRequest,
        token: Option<&BearerToken>,
    ) -> Result<JudgeResult> {
        JudgeClient::judge(self, problem, req, token).await
    }

    async fn list_submissions(
        &self,
        problem: &str,
        limit: u32,
        token: Option<&BearerToken>,
    ) -> Result<Vec<SubmissionRecord>> {
        JudgeClient::list_submissions(self, problem, limit, token).await
    }
}
