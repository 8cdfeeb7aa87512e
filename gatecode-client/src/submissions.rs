//! Submission history endpoints

use gatecode_core::domain::submission::SubmissionRecord;
use gatecode_core::dto::submission::SubmissionList;
use gatecode_core::interpret::interpret_submission;
use tracing::debug;

use crate::JudgeClient;
use crate::api::BearerToken;
use crate::error::{ClientError, Result};

impl JudgeClient {
    // =============================================================================
    // History
    // =============================================================================

    /// List the caller's most recent submissions for a problem
    ///
    /// # Arguments
    /// * `slug` - The problem slug
    /// * `limit` - Maximum number of records to return
    /// * `token` - Bearer credential of the signed-in user
    ///
    /// # Returns
    /// Canonicalized submission records
    pub async fn list_submissions(
        &self,
        slug: &str,
        limit: u32,
        token: Option<&BearerToken>,
    ) -> Result<Vec<SubmissionRecord>> {
        let token = token.ok_or(ClientError::AuthRequired)?;
        let url = self.problem_url(slug, "submissions")?;

        debug!("GET {}?limit={}", url, limit);
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let list: SubmissionList = self.handle_response(response).await?;
        Ok(list
            .submissions
            .into_iter()
            .map(interpret_submission)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatecode_core::domain::outcome::OutcomeKind;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_list_submissions() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/problems/two-sum/submissions")
            .match_query(Matcher::UrlEncoded("limit".into(), "5".into()))
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(
                r#"{"submissions":[
                    {"id":"a","status":"Wrong Answer","language":"cpp","runtime_ms":3,
                     "code":"int main(){}","created_at":"2026-05-01T08:30:00Z"},
                    {"id":"b","status":"Accepted","language":"Python3","runtime_ms":40,
                     "memory_kb":16384,"code":"print(1)","created_at":"2026-04-30T21:00:00Z"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = JudgeClient::new(server.url());
        let records = client
            .list_submissions("two-sum", 5, Some(&BearerToken::new("tok")))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, OutcomeKind::WrongAnswer);
        assert_eq!(records[0].language, "C++");
        assert_eq!(records[1].memory_kb, Some(16384));
    }

    #[tokio::test]
    async fn test_list_submissions_requires_token() {
        let client = JudgeClient::new("http://localhost:8081");
        let err = client
            .list_submissions("two-sum", 5, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::AuthRequired));
    }
}
