//! Internal error types for OpenAI operations.
//!
//! These errors are internal to `llmgate-openai` and are mapped to
//! `UpstreamError` at the port boundary.

use thiserror::Error;

/// Result type alias for OpenAI operations.
pub type OpenAiResult<T> = Result<T, OpenAiError>;

/// Errors related to OpenAI API operations.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// The client was built without an API key.
    #[error("OpenAI API key not configured")]
    MissingApiKey,

    /// API request failed with an HTTP error status.
    #[error("OpenAI API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Provider error message, if the body carried one
        message: String,
    },

    /// API returned a payload without the expected shape.
    #[error("Invalid response from OpenAI API: {message}")]
    InvalidResponse {
        /// Description of what was missing
        message: String,
    },

    /// A Responses API result had no text on either decode path.
    #[error("OpenAI response did not include text output")]
    NoTextOutput,

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl OpenAiError {
    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}
