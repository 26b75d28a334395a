//! Upstream provider port.
//!
//! The gateway service talks to the LLM provider exclusively through this
//! trait. The concrete implementation lives in `llmgate-openai`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ChatCompletionRequest, EmbeddingRequest, ModelResponse, ModelResponseRequest};

/// Errors reported by an upstream adapter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    /// The adapter is missing something it needs (credentials, client).
    /// Responses API calls surface it unchanged; other operations treat it
    /// as a gateway failure.
    #[error("Upstream not configured: {0}")]
    Configuration(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("Provider returned status {status}: {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Provider-supplied error description.
        message: String,
    },

    /// The provider answered but the payload did not have the expected shape.
    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),

    /// A Responses API result carried no text on any known path.
    #[error("Provider response did not include text output")]
    NoTextOutput,
}

/// Port for calling the upstream LLM provider.
///
/// Each method performs exactly one outbound call and returns a plain,
/// normalized value. Implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamPort: Send + Sync {
    /// Run a chat completion and return the first choice's text.
    async fn chat_completion(&self, request: ChatCompletionRequest)
    -> Result<String, UpstreamError>;

    /// Generate an embedding and return the first vector.
    async fn create_embedding(&self, request: EmbeddingRequest) -> Result<Vec<f64>, UpstreamError>;

    /// Create a generic model response.
    async fn create_response(
        &self,
        request: ModelResponseRequest,
    ) -> Result<ModelResponse, UpstreamError>;
}
