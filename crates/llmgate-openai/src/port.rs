//! Port trait implementation for `OpenAiClient`.
//!
//! Implements the core-owned `UpstreamPort` trait, converting internal
//! `OpenAiError`s into `UpstreamError`s.

use async_trait::async_trait;
use llmgate_core::ports::{UpstreamError, UpstreamPort};
use llmgate_core::{ChatCompletionRequest, EmbeddingRequest, ModelResponse, ModelResponseRequest};

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `OpenAiError` to core `UpstreamError`.
fn map_error(err: OpenAiError) -> UpstreamError {
    match err {
        OpenAiError::MissingApiKey => {
            UpstreamError::Configuration("OpenAI API key not configured".to_string())
        }
        OpenAiError::InvalidUrl(e) => UpstreamError::Configuration(format!("Invalid URL: {e}")),
        OpenAiError::ApiRequestFailed {
            status, message, ..
        } => UpstreamError::Api { status, message },
        OpenAiError::InvalidResponse { message } => UpstreamError::InvalidResponse(message),
        OpenAiError::JsonParse(e) => UpstreamError::InvalidResponse(e.to_string()),
        OpenAiError::NoTextOutput => UpstreamError::NoTextOutput,
        OpenAiError::Network(e) => UpstreamError::Network(e.to_string()),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + 'static> UpstreamPort for OpenAiClient<B> {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<String, UpstreamError> {
        Self::chat_completion(self, request).await.map_err(map_error)
    }

    async fn create_embedding(&self, request: EmbeddingRequest) -> Result<Vec<f64>, UpstreamError> {
        Self::create_embedding(self, request).await.map_err(map_error)
    }

    async fn create_response(
        &self,
        request: ModelResponseRequest,
    ) -> Result<ModelResponse, UpstreamError> {
        Self::create_response(self, request).await.map_err(map_error)
    }
}
