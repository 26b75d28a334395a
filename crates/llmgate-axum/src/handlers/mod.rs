//! HTTP request handlers.
//!
//! Handlers are thin wrappers that delegate to `GatewayService`.

pub mod chat;
pub mod embeddings;
pub mod health;
pub mod responses;
