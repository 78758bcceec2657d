//! Error types for the Gemini client.

use common::RecordError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type for Gemini client operations.
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Gemini client errors.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection failed or timed out
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-2xx response from the API
    #[error("Gemini API error {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Response envelope was not the JSON we expect
    #[error("Parse error: {0}")]
    Parse(#[source] reqwest::Error),

    /// No candidate text in an otherwise valid response
    #[error("Failed to get structured job description: model returned no content")]
    EmptyResponse,

    /// Model output does not fit the job record shape
    #[error("Model output does not match the job record schema: {0}")]
    Schema(String),
}

impl From<RecordError> for GeminiError {
    fn from(err: RecordError) -> Self {
        GeminiError::Schema(err.to_string())
    }
}
