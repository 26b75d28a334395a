#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CHAT_TEMPERATURE, ChatCompletionRequest, EmbeddingRequest, ModelResponse,
    ModelResponseRequest, resolve_model,
};
pub use ports::{CoreError, UpstreamError, UpstreamPort};
pub use services::GatewayService;
pub use settings::{
    DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL, DEFAULT_TIMEOUT_SECS, Settings,
    SettingsError, validate_settings,
};
