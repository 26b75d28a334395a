//! Gateway service - the single entry point for the three upstream operations.
//!
//! Responsibilities, in order, for every call:
//! 1. reject blank input
//! 2. refuse to call upstream when no API key is configured
//! 3. fill in the default model
//! 4. run the upstream call on its own task
//! 5. map failures to configuration or gateway errors

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::{
    ChatCompletionRequest, EmbeddingRequest, ModelResponse, ModelResponseRequest, resolve_model,
};
use crate::ports::{CoreError, UpstreamError, UpstreamPort};
use crate::settings::Settings;

/// Client-facing message when no API key is configured.
pub const MISSING_API_KEY_MESSAGE: &str = "OpenAI API key not configured";
/// Client-facing message for a failed chat completion.
pub const CHAT_FAILED_MESSAGE: &str = "Failed to fetch completion from OpenAI";
/// Client-facing message for a failed embedding.
pub const EMBEDDING_FAILED_MESSAGE: &str = "Failed to fetch embedding from OpenAI";
/// Client-facing message for a failed Responses API call.
pub const RESPONSE_FAILED_MESSAGE: &str = "Failed to fetch response from OpenAI";
/// Client-facing message when a Responses API result carries no text.
pub const NO_TEXT_OUTPUT_MESSAGE: &str = "OpenAI response did not include text output";

/// Service forwarding requests to the upstream provider.
#[derive(Clone)]
pub struct GatewayService {
    settings: Arc<Settings>,
    upstream: Arc<dyn UpstreamPort>,
}

impl GatewayService {
    /// Create a new gateway service.
    pub fn new(settings: Arc<Settings>, upstream: Arc<dyn UpstreamPort>) -> Self {
        Self { settings, upstream }
    }

    /// Read-only view of the process settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Forward a prompt as a single user message and return the reply text.
    pub async fn complete_chat(
        &self,
        prompt: String,
        model: Option<String>,
    ) -> Result<String, CoreError> {
        require_non_blank("prompt", &prompt)?;
        self.ensure_configured()?;

        let model = resolve_model(model.as_deref(), &self.settings.chat_model);
        debug!(model = %model, "Requesting chat completion");

        let request = ChatCompletionRequest::new(prompt, model);
        let upstream = Arc::clone(&self.upstream);
        let text = run_detached(async move { upstream.chat_completion(request).await })
            .await
            .map_err(|e| upstream_failure(CHAT_FAILED_MESSAGE, e))?;

        Ok(text.trim().to_string())
    }

    /// Generate an embedding vector for `text`.
    pub async fn create_embedding(
        &self,
        text: String,
        model: Option<String>,
    ) -> Result<Vec<f64>, CoreError> {
        require_non_blank("text", &text)?;
        self.ensure_configured()?;

        let model = resolve_model(model.as_deref(), &self.settings.embedding_model);
        debug!(model = %model, "Requesting embedding");

        let request = EmbeddingRequest { text, model };
        let upstream = Arc::clone(&self.upstream);
        run_detached(async move { upstream.create_embedding(request).await })
            .await
            .map_err(|e| upstream_failure(EMBEDDING_FAILED_MESSAGE, e))
    }

    /// Create a generic model response and return its text and id.
    pub async fn create_response(
        &self,
        input: String,
        model: Option<String>,
    ) -> Result<ModelResponse, CoreError> {
        require_non_blank("input", &input)?;
        self.ensure_configured()?;

        let model = resolve_model(model.as_deref(), &self.settings.chat_model);
        debug!(model = %model, "Requesting model response");

        let request = ModelResponseRequest { input, model };
        let upstream = Arc::clone(&self.upstream);
        let response = run_detached(async move { upstream.create_response(request).await })
            .await
            .map_err(|e| match e {
                UpstreamError::Configuration(detail) => {
                    warn!(detail = %detail, "Upstream not configured");
                    CoreError::Configuration(detail)
                }
                UpstreamError::NoTextOutput => {
                    upstream_failure(NO_TEXT_OUTPUT_MESSAGE, UpstreamError::NoTextOutput)
                }
                other => upstream_failure(RESPONSE_FAILED_MESSAGE, other),
            })?;

        // Whitespace-only text was still extracted; it is returned as empty.
        Ok(ModelResponse {
            text: response.text.trim().to_string(),
            response_id: response.response_id,
        })
    }

    fn ensure_configured(&self) -> Result<(), CoreError> {
        if self.settings.has_api_key() {
            Ok(())
        } else {
            warn!("Rejecting request: {MISSING_API_KEY_MESSAGE}");
            Err(CoreError::Configuration(MISSING_API_KEY_MESSAGE.to_string()))
        }
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Run an upstream call on its own task.
///
/// The call keeps running if the caller goes away.
async fn run_detached<T, F>(call: F) -> Result<T, UpstreamError>
where
    F: Future<Output = Result<T, UpstreamError>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(call)
        .await
        .map_err(|e| UpstreamError::Network(format!("upstream task failed: {e}")))?
}

/// Wrap an upstream error in a gateway error whose cause is only logged.
fn upstream_failure(message: &str, cause: UpstreamError) -> CoreError {
    error!(error = %cause, "{message}");
    CoreError::gateway(message, cause)
}
