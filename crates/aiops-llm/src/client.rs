//! Completion API client and the analyzer trait it implements.

use aiops_alerts::{format_alerts, AlertPayload};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::LlmConfig;
use crate::error::LlmError;

/// System instruction sent with every analysis request.
const SYSTEM_PROMPT: &str = "You are an AIOps assistant that analyzes infrastructure alerts.
When given an alert, provide:
1. A brief summary of what's happening
2. Potential root causes (2-3 possibilities)
3. Recommended actions to resolve the issue
4. Severity assessment (Critical/Warning/Info)

Be concise and actionable. Format your response clearly.";

/// Prefix placed before the formatted alert text in the user message.
const USER_PREFIX: &str = "Analyze this alert:\n\n";

/// Response-length cap for generated analyses.
const MAX_TOKENS: u32 = 500;

/// Sampling temperature, favoring determinism over creativity.
const TEMPERATURE: f64 = 0.3;

/// Longest API error body echoed into an [`LlmError::Api`] message.
const MAX_ERROR_BODY: usize = 512;

/// Something that can analyze an alert payload.
///
/// The HTTP layer depends on this trait rather than on [`OpenAiClient`]
/// directly, so tests can inject a mock without any process-global state.
#[async_trait]
pub trait AlertAnalyzer: Send + Sync {
    /// Analyzes a payload, returning the generated analysis text.
    async fn analyze(&self, payload: &AlertPayload) -> Result<String, LlmError>;

    /// Analyzes free-form text by wrapping it as a single alert's
    /// `description` annotation.
    async fn analyze_text(&self, text: &str) -> Result<String, LlmError> {
        self.analyze(&AlertPayload::from_text(text)).await
    }
}

/// One message in the completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system", "user", "assistant").
    pub role: String,
    /// Message text.
    pub content: String,
}

/// Request frame for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation messages, system instruction first.
    pub messages: Vec<ChatMessage>,
    /// Generated-token cap.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Assistant message within a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Generated text, absent for tool-call style responses.
    #[serde(default)]
    pub content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message.
    pub message: ResponseMessage,
}

/// Response frame from the chat-completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Returned completions; the first is used.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// Client for an OpenAI-compatible chat-completions API.
///
/// Built once at startup and shared for the process lifetime; holds no
/// per-request mutable state.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl OpenAiClient {
    /// Creates a client from the given configuration.
    ///
    /// The configured timeout bounds every outbound call, connection
    /// included.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Builds the completion request frame for a formatted alert text.
    #[must_use]
    pub fn build_request(&self, alert_text: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("{USER_PREFIX}{alert_text}"),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    async fn complete(&self, payload: &AlertPayload) -> Result<String, LlmError> {
        let alert_text = format_alerts(payload);
        let request = self.build_request(&alert_text);
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(model = %self.config.model, "sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: truncate_body(&body),
            });
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl AlertAnalyzer for OpenAiClient {
    async fn analyze(&self, payload: &AlertPayload) -> Result<String, LlmError> {
        match self.complete(payload).await {
            Ok(analysis) => {
                info!("alert analyzed successfully");
                Ok(analysis)
            }
            Err(err) => {
                error!(error = %err, "alert analysis failed");
                Err(err)
            }
        }
    }
}

/// Caps an API error body so oversized responses don't bloat errors or logs.
fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn test_client(base_url: &str) -> OpenAiClient {
        let config = LlmConfig::new("sk-test")
            .with_base_url(base_url)
            .with_timeout(Duration::from_millis(500));
        OpenAiClient::new(config).unwrap()
    }

    #[test]
    fn test_build_request_shape() {
        let client = test_client("http://localhost:1");
        let request = client.build_request("Alert: HighCPU");

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, 500);
        assert!((request.temperature - 0.3).abs() < f64::EPSILON);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(
            request.messages[1].content,
            "Analyze this alert:\n\nAlert: HighCPU"
        );
    }

    #[test]
    fn test_request_serialization() {
        let client = test_client("http://localhost:1");
        let request = client.build_request("text");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 500);
        assert!((value["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-9);
        assert!(value["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("AIOps assistant"));
    }

    #[test]
    fn test_response_parses_first_choice() {
        let json = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Summary: disk full"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.choices.len(), 2);
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Summary: disk full")
        );
    }

    #[test]
    fn test_response_with_no_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();

        assert!(response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .is_none());
    }

    #[test]
    fn test_truncate_body_caps_length() {
        let long = "x".repeat(2000);

        assert_eq!(truncate_body(&long).len(), MAX_ERROR_BODY);
        assert_eq!(truncate_body("short"), "short");
    }

    #[tokio::test]
    async fn test_analyze_surfaces_transport_errors() {
        // Port 1 is never listening; the connect fails immediately.
        let client = test_client("http://127.0.0.1:1/v1");
        let payload = AlertPayload::from_text("anything");

        let err = client.analyze(&payload).await.unwrap_err();

        assert!(matches!(err, LlmError::Http(_)));
        assert!(err.to_string().starts_with("completion request failed"));
    }

    #[tokio::test]
    async fn test_analyze_text_wraps_description() {
        struct EchoAnalyzer;

        #[async_trait]
        impl AlertAnalyzer for EchoAnalyzer {
            async fn analyze(&self, payload: &AlertPayload) -> Result<String, LlmError> {
                Ok(format_alerts(payload))
            }
        }

        let result = EchoAnalyzer.analyze_text("database is slow").await.unwrap();

        assert!(result.contains("Description: database is slow"));
        assert!(result.contains("Alert: Unknown"));
    }
}
