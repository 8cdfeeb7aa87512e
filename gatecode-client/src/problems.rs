//! Problem execution endpoints

use gatecode_core::domain::result::{JudgeResult, RunResult};
use gatecode_core::dto::judge::{JudgeRequest, JudgeResponse};
use gatecode_core::dto::run::{RunRequest, RunResponse};
use gatecode_core::interpret::{interpret_judge, interpret_run};
use tracing::debug;

use crate::JudgeClient;
use crate::api::BearerToken;
use crate::error::{ClientError, Result};

impl JudgeClient {
    // =============================================================================
    // Execution
    // =============================================================================

    /// Run code against the problem's first test case
    ///
    /// # Arguments
    /// * `slug` - The problem slug
    /// * `req` - Language and source code
    ///
    /// # Returns
    /// The canonicalized run result
    pub async fn run(&self, slug: &str, req: &RunRequest) -> Result<RunResult> {
        req.validate()?;
        let url = self.problem_url(slug, "run")?;

        debug!("POST {} ({}, {} bytes)", url, req.language, req.code.len());
        let response = self.client.post(&url).json(req).send().await?;

        let raw: RunResponse = self.handle_response(response).await?;
        Ok(interpret_run(raw))
    }

    /// Judge code against the full test suite
    ///
    /// Fails with [`ClientError::AuthRequired`] before touching the network
    /// when no token is supplied.
    ///
    /// # Arguments
    /// * `slug` - The problem slug
    /// * `req` - Language, source code and run-all flag
    /// * `token` - Bearer credential of the signed-in user
    ///
    /// # Returns
    /// The canonicalized judge result
    pub async fn judge(
        &self,
        slug: &str,
        req: &JudgeRequest,
        token: Option<&BearerToken>,
    ) -> Result<JudgeResult> {
        let token = token.ok_or(ClientError::AuthRequired)?;
        req.validate()?;
        let url = self.problem_url(slug, "judge")?;

        debug!(
            "POST {} ({}, {} bytes, run_all={})",
            url,
            req.language,
            req.code.len(),
            req.run_all
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(req)
            .send()
            .await?;

        let raw: JudgeResponse = self.handle_response(response).await?;
        Ok(interpret_judge(raw))
    }
}
