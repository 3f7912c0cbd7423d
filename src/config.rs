//! Startup configuration for the generation client.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_KEY environment variable not set")]
    MissingApiKey,
}

/// Settings passed to [`crate::service::GeminiClient`] at construction.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    /// Per-request timeout. `None` waits for the endpoint indefinitely.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    /// Read the API key from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_api_key(std::env::var(API_KEY_VAR).ok())
    }

    fn from_api_key(api_key: Option<String>) -> Result<Self, ConfigError> {
        match api_key {
            Some(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
