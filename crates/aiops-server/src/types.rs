//! Request and response types for the processor API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Configured service display name.
    pub service: String,
    /// Always "running".
    pub status: String,
    /// Time of this response.
    pub timestamp: DateTime<Utc>,
}

/// Response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Response for the Alertmanager webhook endpoint.
///
/// Two shapes share this type: `status == "received"` when analysis was
/// skipped (no API key), with `message` set; `status == "analyzed"` when
/// the analysis stage ran, with `analysis` and `timestamp` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// "analyzed" or "received".
    pub status: String,
    /// Number of alerts in the inbound payload.
    pub alert_count: usize,
    /// Explanation for skipped analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Generated analysis text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    /// Time the analysis completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl WebhookResponse {
    /// Builds the analysis-skipped response.
    #[must_use]
    pub fn received(alert_count: usize) -> Self {
        Self {
            status: "received".to_string(),
            alert_count,
            message: Some("Alert received but analysis skipped (no API key)".to_string()),
            analysis: None,
            timestamp: None,
        }
    }

    /// Builds the analyzed response.
    #[must_use]
    pub fn analyzed(alert_count: usize, analysis: String) -> Self {
        Self {
            status: "analyzed".to_string(),
            alert_count,
            message: None,
            analysis: Some(analysis),
            timestamp: Some(Utc::now()),
        }
    }
}

/// Request body for the manual-analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze. Missing or empty text is rejected.
    #[serde(default)]
    pub text: String,
}

/// Response for the manual-analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Always "analyzed".
    pub status: String,
    /// Generated analysis text.
    pub analysis: String,
    /// Time the analysis completed.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_received_response_shape() {
        let response = WebhookResponse::received(3);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "received");
        assert_eq!(json["alert_count"], 3);
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("no API key"));
        assert!(json.get("analysis").is_none());
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn test_analyzed_response_shape() {
        let response = WebhookResponse::analyzed(2, "Summary: disk full".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "analyzed");
        assert_eq!(json["alert_count"], 2);
        assert_eq!(json["analysis"], "Summary: disk full");
        assert!(json.get("message").is_none());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_analyze_request_defaults_text() {
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();

        assert!(request.text.is_empty());
    }

    #[test]
    fn test_health_response_default() {
        let json = serde_json::to_value(HealthResponse::default()).unwrap();

        assert_eq!(json["status"], "healthy");
    }
}
