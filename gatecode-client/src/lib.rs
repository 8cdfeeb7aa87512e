//! GateCode HTTP Client
//!
//! A type-safe HTTP client for the GateCode judge service.
//!
//! Responses are canonicalized on arrival: callers only ever see
//! [`gatecode_core`] domain types, never raw status strings.
//!
//! # Example
//!
//! ```no_run
//! use gatecode_client::JudgeClient;
//! use gatecode_core::domain::language::Language;
//! use gatecode_core::dto::run::RunRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gatecode_client::ClientError> {
//!     let client = JudgeClient::new("http://localhost:8081");
//!
//!     let result = client
//!         .run("two-sum", &RunRequest::new(Language::Python3, "print(42)"))
//!         .await?;
//!
//!     println!("{}: {}", result.status, result.stdout);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
mod problems;
mod submissions;

// Re-export commonly used types
pub use api::{BearerToken, JudgeApi};
pub use error::{ClientError, Result};

use gatecode_core::dto::ErrorBody;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for the judge service API
///
/// Endpoints are grouped as:
/// - Problem execution (run, judge)
/// - Submission history
#[derive(Debug, Clone)]
pub struct JudgeClient {
    /// Base URL of the backend (e.g., "http://localhost:8081")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl JudgeClient {
    /// Create a new judge client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend (e.g., "http://localhost:8081")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new judge client with a custom HTTP client
    ///
    /// This allows you to configure connect timeouts, proxies, TLS settings, etc.
    /// The interactive run deadline is enforced by the session, not here.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL of a per-problem endpoint
    fn problem_url(&self, slug: &str, endpoint: &str) -> Result<String> {
        let slug = slug.trim();
        if slug.is_empty() || slug.contains('/') {
            return Err(ClientError::InvalidRequest(format!(
                "invalid problem slug '{}'",
                slug
            )));
        }
        Ok(format!(
            "{}/api/v1/problems/{}/{}",
            self.base_url, slug, endpoint
        ))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// 401 becomes `AuthRequired`, other non-2xx statuses become `ApiError`
    /// carrying the service's `{"error": ...}` message, and bodies that do not
    /// parse become `MalformedResponse`.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::AuthRequired);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api_error(status.as_u16(), error_message(&body)));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            ClientError::MalformedResponse(format!("Failed to parse JSON response: {}", e))
        })
    }
}

/// Extract the message from an error body, falling back to the raw text
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
