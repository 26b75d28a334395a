//! Domain value types.
//!
//! Every value here is scoped to a single request. Model identifiers are
//! always concrete by the time one of these reaches an upstream port.

/// Sampling temperature applied to every chat completion.
pub const CHAT_TEMPERATURE: f64 = 0.7;

/// A single-turn chat completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    /// User-role message content.
    pub prompt: String,
    /// Resolved model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
}

impl ChatCompletionRequest {
    /// Create a request with the fixed sampling temperature.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            temperature: CHAT_TEMPERATURE,
        }
    }
}

/// An embedding generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingRequest {
    pub text: String,
    pub model: String,
}

/// A generic model response call (provider "create a response" endpoint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponseRequest {
    pub input: String,
    pub model: String,
}

/// Normalized output of a generic model response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelResponse {
    /// Generated text, trimmed.
    pub text: String,
    /// Upstream response identifier, empty when the provider sent none.
    pub response_id: String,
}

/// Pick the caller's model, or the configured default when it is absent or blank.
pub fn resolve_model(requested: Option<&str>, default: &str) -> String {
    requested
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .unwrap_or(default)
        .to_string()
}
