//! Public configuration for the OpenAI client.

use std::time::Duration;

use llmgate_core::Settings;

/// Configuration for the OpenAI client.
///
/// # Example
///
/// ```
/// use llmgate_openai::OpenAiClientConfig;
/// use std::time::Duration;
///
/// let config = OpenAiClientConfig::new()
///     .with_api_key("sk-test")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Clone)]
pub struct OpenAiClientConfig {
    /// API root, e.g. `https://api.openai.com/v1`
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Bearer token. Calls fail fast when absent.
    pub(crate) api_key: Option<String>,
}

impl std::fmt::Debug for OpenAiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClientConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: llmgate_core::DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("llmgate/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(llmgate_core::DEFAULT_TIMEOUT_SECS),
            api_key: None,
        }
    }
}

impl OpenAiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a configuration from process settings.
    ///
    /// A blank API key yields a client that refuses every call.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .with_base_url(settings.base_url.clone())
            .with_timeout(settings.timeout())
            .with_optional_api_key(settings.has_api_key().then(|| settings.api_key.clone()))
    }

    /// Set the API root.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }
}
