//! Processor configuration, read once from the environment at startup.

use std::net::SocketAddr;

use aiops_llm::LlmConfig;

/// Default service display name.
pub const DEFAULT_SERVICE_NAME: &str = "AIOps AI Processor";

/// Default log level when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default bind address when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
    8000,
);

/// Configuration for the alert processor.
///
/// Constructed once at process start (normally via [`from_env`]) and passed
/// into the HTTP layer; never mutated afterwards.
///
/// [`from_env`]: ProcessorConfig::from_env
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Completion API key. Empty means unset; analysis is skipped.
    pub api_key: String,
    /// Completion model identifier.
    pub model: String,
    /// Base URL of the completion API.
    pub base_url: String,
    /// Log level directive for the tracing subscriber.
    pub log_level: String,
    /// Display name reported by the root endpoint.
    pub service_name: String,
    /// Address to bind the HTTP server to.
    pub bind_addr: SocketAddr,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: aiops_llm::config::DEFAULT_MODEL.to_string(),
            base_url: aiops_llm::config::DEFAULT_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            bind_addr: DEFAULT_BIND_ADDR,
        }
    }
}

impl ProcessorConfig {
    /// Reads the configuration from environment variables.
    ///
    /// | variable | default |
    /// |----------|---------|
    /// | `OPENAI_API_KEY` | empty (analysis skipped) |
    /// | `OPENAI_MODEL` | `gpt-4o-mini` |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
    /// | `LOG_LEVEL` | `info` |
    /// | `APP_NAME` | `AIOps AI Processor` |
    /// | `BIND_ADDR` | `0.0.0.0:8000` |
    ///
    /// An unparseable `BIND_ADDR` falls back to the default address.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            model: std::env::var("OPENAI_MODEL").unwrap_or(defaults.model),
            base_url: std::env::var("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            service_name: std::env::var("APP_NAME").unwrap_or(defaults.service_name),
            bind_addr: std::env::var("BIND_ADDR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.bind_addr),
        }
    }

    /// Returns true if a completion API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Builds the completion client configuration from this config.
    #[must_use]
    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig::new(self.api_key.clone())
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone())
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the service display name.
    #[must_use]
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Set the bind address.
    #[must_use]
    pub const fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();

        assert!(!config.has_api_key());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
        assert_eq!(config.bind_addr.port(), 8000);
    }

    #[test]
    fn test_has_api_key() {
        let config = ProcessorConfig::default().with_api_key("sk-test");

        assert!(config.has_api_key());
    }

    #[test]
    fn test_builder_methods() {
        let addr: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        let config = ProcessorConfig::default()
            .with_api_key("sk-test")
            .with_model("gpt-4o")
            .with_service_name("Test Processor")
            .with_bind_addr(addr);

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.service_name, "Test Processor");
        assert_eq!(config.bind_addr, addr);
    }

    #[test]
    fn test_llm_config_carries_fields() {
        let config = ProcessorConfig::default()
            .with_api_key("sk-test")
            .with_model("gpt-4o");

        let llm = config.llm_config();

        assert_eq!(llm.api_key, "sk-test");
        assert_eq!(llm.model, "gpt-4o");
        assert_eq!(llm.base_url, config.base_url);
    }
}
