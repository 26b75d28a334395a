//! HTTP backend abstraction for the OpenAI API.
//!
//! The client is generic over this trait so tests can swap in a backend
//! that returns canned JSON instead of touching the network.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::OpenAiClientConfig;
use crate::error::{OpenAiError, OpenAiResult};
use crate::parsing::api_error_message;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST JSON and decode a JSON reply.
///
/// This is an implementation detail - external code should use the
/// `UpstreamPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` to `url` and deserialize the success payload.
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> OpenAiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Exactly one request per call. No retries.
pub struct ReqwestBackend {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &OpenAiClientConfig) -> OpenAiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> OpenAiResult<T> {
        let api_key = self.api_key.as_ref().ok_or(OpenAiError::MissingApiKey)?;

        debug!(url = %url, "POST to OpenAI");
        let response = self
            .client
            .post(url.as_str())
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = api_error_message(&error_text);
            warn!(status = status.as_u16(), url = %url, message = %message, "OpenAI API error");
            return Err(OpenAiError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
