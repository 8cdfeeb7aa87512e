//! Error types for the judge client

use std::time::Duration;
use thiserror::Error;

use gatecode_core::dto::RequestError;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the judge service
///
/// Each variant is distinguishable so callers never mistake a transport
/// problem for an empty or stale result.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("Network request failed: {0}")]
    Network(String),

    /// No response within the client-side deadline
    #[error("Request timed out after {}ms", .after.as_millis())]
    Timeout {
        /// The deadline that elapsed
        after: Duration,
    },

    /// The operation needs a signed-in caller
    #[error("Authentication required")]
    AuthRequired,

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Response body was not the expected JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Request refused before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Failures that say nothing about the submitted code
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout { .. } | Self::MalformedResponse(_)
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<RequestError> for ClientError {
    fn from(err: RequestError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}
