//! OpenAI client for the three upstream operations.

use llmgate_core::{ChatCompletionRequest, EmbeddingRequest, ModelResponse, ModelResponseRequest};
use tracing::debug;
use url::Url;

use crate::config::OpenAiClientConfig;
use crate::error::OpenAiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{
    ChatCompletionBody, ChatCompletionResponse, ChatMessage, EmbeddingBody, EmbeddingResponse,
    ResponsesBody, ResponsesResponse,
};
use crate::parsing;

/// Default OpenAI client using the reqwest HTTP backend.
pub type DefaultOpenAiClient = OpenAiClient<ReqwestBackend>;

/// Client for the OpenAI API.
///
/// Generic over an HTTP backend so tests can run without the network.
/// Use `DefaultOpenAiClient` in production code.
pub struct OpenAiClient<B: HttpBackend> {
    pub(crate) backend: B,
    base_url: String,
}

impl DefaultOpenAiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &OpenAiClientConfig) -> OpenAiResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Ok(Self::with_backend(config, backend))
    }
}

impl<B: HttpBackend> OpenAiClient<B> {
    /// Create a client over a custom backend.
    pub fn with_backend(config: &OpenAiClientConfig, backend: B) -> Self {
        Self {
            backend,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> OpenAiResult<Url> {
        Ok(Url::parse(&format!("{}/{path}", self.base_url))?)
    }

    /// `POST /chat/completions` with a single user message.
    pub async fn chat_completion(&self, request: ChatCompletionRequest) -> OpenAiResult<String> {
        let url = self.endpoint("chat/completions")?;
        let body = ChatCompletionBody {
            model: request.model,
            messages: vec![ChatMessage::user(request.prompt)],
            temperature: request.temperature,
        };
        debug!(model = %body.model, "Creating chat completion");

        let response: ChatCompletionResponse =
            self.backend.post_json(&url, &serde_json::to_value(&body)?).await?;
        parsing::chat_text(response)
    }

    /// `POST /embeddings`.
    pub async fn create_embedding(&self, request: EmbeddingRequest) -> OpenAiResult<Vec<f64>> {
        let url = self.endpoint("embeddings")?;
        let body = EmbeddingBody {
            input: request.text,
            model: request.model,
        };
        debug!(model = %body.model, "Creating embedding");

        let response: EmbeddingResponse =
            self.backend.post_json(&url, &serde_json::to_value(&body)?).await?;
        parsing::first_embedding(response)
    }

    /// `POST /responses`.
    pub async fn create_response(
        &self,
        request: ModelResponseRequest,
    ) -> OpenAiResult<ModelResponse> {
        let url = self.endpoint("responses")?;
        let body = ResponsesBody {
            model: request.model,
            input: request.input,
        };
        debug!(model = %body.model, "Creating model response");

        let response: ResponsesResponse =
            self.backend.post_json(&url, &serde_json::to_value(&body)?).await?;
        parsing::response_output(response)
    }
}
