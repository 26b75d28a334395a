#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultOpenAiClient, OpenAiClient};

// Backend seam
pub use http::{HttpBackend, ReqwestBackend};

// Configuration
pub use config::OpenAiClientConfig;

// Errors
pub use error::{OpenAiError, OpenAiResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
