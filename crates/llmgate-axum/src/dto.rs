//! Request and response bodies of the public HTTP API.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Field-level validation for request bodies.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

fn require_text(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

fn into_result(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Body of `POST /chat/complete`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// User prompt to send to the model.
    pub prompt: String,
    /// Model to use; the configured default when absent or blank.
    #[serde(default)]
    pub model: Option<String>,
}

impl Validate for ChatRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_text("prompt", &self.prompt, &mut errors);
        into_result(errors)
    }
}

/// Reply of `POST /chat/complete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Completion text returned by the model.
    pub response: String,
}

/// Body of `POST /embeddings`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingRequest {
    pub text: String,
    #[serde(default)]
    pub model: Option<String>,
}

impl Validate for EmbeddingRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_text("text", &self.text, &mut errors);
        into_result(errors)
    }
}

/// Reply of `POST /embeddings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    pub embedding: Vec<f64>,
}

/// Body of `POST /responses`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseRequest {
    pub input: String,
    #[serde(default)]
    pub model: Option<String>,
}

impl Validate for ResponseRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_text("input", &self.input, &mut errors);
        into_result(errors)
    }
}

/// Reply of `POST /responses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseOutput {
    pub response: String,
    pub response_id: String,
}
