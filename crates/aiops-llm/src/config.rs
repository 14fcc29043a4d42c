//! Completion client configuration.

use std::time::Duration;

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default bound on the outbound completion call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the completion client.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Model identifier passed on every request.
    pub model: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Upper bound on the outbound call, connection included.
    pub timeout: Duration,
}

impl LlmConfig {
    /// Creates a configuration with the given API key and defaults for
    /// everything else.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the outbound call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
