//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They carry no HTTP client or server types.

pub mod upstream;

use thiserror::Error;

pub use upstream::{UpstreamError, UpstreamPort};

#[cfg(test)]
pub use upstream::MockUpstreamPort;

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error (missing credentials or client).
    #[error("{0}")]
    Configuration(String),

    /// The upstream call failed or returned something uninterpretable.
    ///
    /// `message` is safe to show to clients; `cause` is for server logs only.
    #[error("{message}")]
    Gateway {
        message: String,
        #[source]
        cause: UpstreamError,
    },
}

impl CoreError {
    /// Build a gateway error with a client-facing message.
    pub fn gateway(message: impl Into<String>, cause: UpstreamError) -> Self {
        Self::Gateway {
            message: message.into(),
            cause,
        }
    }
}
