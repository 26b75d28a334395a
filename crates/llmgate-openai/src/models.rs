//! OpenAI wire types.
//!
//! Only the fields this adapter sends or reads are modelled; everything
//! else in the provider payload is ignored.

use serde::{Deserialize, Serialize};

// =============================================================================
// Chat Completions
// =============================================================================

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionBody {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", "assistant" or "tool".
    pub role: String,
    /// Message content. Null when the assistant only made tool calls.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
        }
    }
}

/// Reply of `POST /chat/completions` (non-streaming).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// A single chat completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

// =============================================================================
// Embeddings
// =============================================================================

/// Body of `POST /embeddings`.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingBody {
    pub input: String,
    pub model: String,
}

/// Reply of `POST /embeddings`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingResponse {
    #[serde(default)]
    pub data: Vec<EmbeddingData>,
}

/// One embedding vector.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingData {
    pub embedding: Vec<f64>,
}

// =============================================================================
// Responses API
// =============================================================================

/// Body of `POST /responses`.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesBody {
    pub model: String,
    pub input: String,
}

/// Reply of `POST /responses`.
///
/// `output_text` is a convenience field some gateways and SDKs flatten onto
/// the top level; the canonical location is `output[].content[].text`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub output_text: Option<String>,
    /// `null` and absent are both accepted.
    #[serde(default)]
    pub output: Option<Vec<OutputItem>>,
}

/// One item of the `output` list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Option<Vec<ContentPart>>,
}

/// One content part of an output item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

// =============================================================================
// Errors
// =============================================================================

/// Error body returned by the provider on non-2xx replies.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorDetail,
}

/// Error detail within an error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
