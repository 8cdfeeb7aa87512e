//! Data Transfer Objects for the judge service
//!
//! Request bodies are sent as-is. Response payloads mirror the service's JSON
//! loosely (status as a raw string, lenient defaults) and only become domain
//! types after passing through [`crate::interpret`].

pub mod judge;
pub mod run;
pub mod submission;

use thiserror::Error;

/// Reasons a request is refused before it reaches the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("code must not be empty")]
    EmptyCode,
}

/// Error body returned by the judge service on non-2xx responses
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
