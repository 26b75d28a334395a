//! Settings domain types and validation.
//!
//! Settings are read from the environment exactly once at startup and
//! shared read-only (`Arc<Settings>`) for the lifetime of the process.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default model for chat completions and the Responses API.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Default model for embedding generation.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Default provider API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default outbound request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the provider API key.
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding the default chat model.
pub const ENV_MODEL: &str = "OPENAI_MODEL";
/// Environment variable overriding the default embedding model.
pub const ENV_EMBEDDING_MODEL: &str = "OPENAI_EMBEDDING_MODEL";
/// Environment variable overriding the provider API root.
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
/// Environment variable overriding the request timeout.
pub const ENV_TIMEOUT_SECS: &str = "OPENAI_TIMEOUT_SECS";

/// Process-wide provider configuration.
///
/// The API key is never printed so settings can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Provider credential. Empty means "not configured".
    pub api_key: String,

    /// Model used when a chat or response request omits one.
    pub chat_model: String,

    /// Model used when an embedding request omits one.
    pub embedding_model: String,

    /// Provider API root, without a trailing slash.
    pub base_url: String,

    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "<unset>" })
            .field("chat_model", &self.chat_model)
            .field("embedding_model", &self.embedding_model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Settings {
    /// Build settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// Every value is trimmed; blank values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let timeout_secs = match read(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidTimeout(raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let settings = Self {
            api_key: read(ENV_API_KEY).unwrap_or_default(),
            chat_model: read(ENV_MODEL).unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            embedding_model: read(ENV_EMBEDDING_MODEL)
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            base_url: read(ENV_BASE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs,
        };

        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Whether a provider credential is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Outbound request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Errors produced while loading or validating settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The configured base URL does not parse.
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The timeout is not a positive integer number of seconds.
    #[error("Invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Validate a settings value.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if Url::parse(&settings.base_url).is_err() {
        return Err(SettingsError::InvalidBaseUrl(settings.base_url.clone()));
    }
    if settings.timeout_secs == 0 {
        return Err(SettingsError::InvalidTimeout(settings.timeout_secs.to_string()));
    }
    Ok(())
}
