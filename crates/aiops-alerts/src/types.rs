//! Inbound alert payload types.
//!
//! These types mirror the Alertmanager webhook JSON shape. Parsing is
//! intentionally lenient: unknown fields are ignored and every expected
//! field is optional or defaulted, so a degenerate payload still
//! deserializes and flows through the pipeline with placeholder values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Severity label reported for alerts that carry no `severity` label.
pub const UNKNOWN_SEVERITY: &str = "unknown";

/// An Alertmanager webhook payload.
///
/// The logical shape is `{status, alerts: [...]}`. Additional Alertmanager
/// fields (`groupKey`, `receiver`, ...) are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPayload {
    /// Group status reported by Alertmanager ("firing" or "resolved").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The alerts in this notification, in Alertmanager order.
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

impl AlertPayload {
    /// Creates a payload from a list of alerts.
    #[must_use]
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            status: None,
            alerts,
        }
    }

    /// Wraps free-form text as a payload with a single alert whose
    /// `description` annotation is the text.
    ///
    /// Used by the manual-analysis endpoint so arbitrary text flows through
    /// the same formatting pipeline as real alerts.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut annotations = HashMap::new();
        annotations.insert("description".to_string(), text.into());
        Self::new(vec![Alert {
            annotations,
            ..Alert::default()
        }])
    }

    /// Returns the number of alerts in the payload.
    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// Returns the group status, or "unknown" if absent.
    #[must_use]
    pub fn status_or_unknown(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }
}

/// One firing or resolved alert within a webhook payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert status ("firing" or "resolved").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Start time as reported by Alertmanager. Kept as an opaque string;
    /// it is only ever echoed into the formatted text.
    #[serde(
        default,
        rename = "startsAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub starts_at: Option<String>,
    /// Identity labels (`alertname`, `severity`, `instance`, `job`, ...).
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Human-readable annotations (`summary`, `description`, ...).
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Alert {
    /// Returns the alert's `severity` label, or [`UNKNOWN_SEVERITY`] when
    /// the label is absent.
    ///
    /// A present-but-empty label is returned verbatim; only a missing key
    /// degrades to the placeholder.
    #[must_use]
    pub fn severity(&self) -> &str {
        self.labels
            .get("severity")
            .map_or(UNKNOWN_SEVERITY, String::as_str)
    }

    /// Returns a label value by key, if present.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Returns an annotation value by key, if present.
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let json = r#"{
            "status": "firing",
            "alerts": [
                {
                    "status": "firing",
                    "startsAt": "2026-01-15T10:30:00Z",
                    "labels": {
                        "alertname": "HighMemory",
                        "severity": "warning",
                        "instance": "node-1:9100",
                        "job": "node-exporter"
                    },
                    "annotations": {
                        "summary": "Memory usage above 90%",
                        "description": "node-1 has been above 90% memory for 5m"
                    }
                }
            ]
        }"#;

        let payload: AlertPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.status_or_unknown(), "firing");
        assert_eq!(payload.alert_count(), 1);

        let alert = &payload.alerts[0];
        assert_eq!(alert.severity(), "warning");
        assert_eq!(alert.label("alertname"), Some("HighMemory"));
        assert_eq!(alert.annotation("summary"), Some("Memory usage above 90%"));
        assert_eq!(alert.starts_at.as_deref(), Some("2026-01-15T10:30:00Z"));
    }

    #[test]
    fn test_parse_empty_object() {
        let payload: AlertPayload = serde_json::from_str("{}").unwrap();

        assert!(payload.status.is_none());
        assert!(payload.alerts.is_empty());
        assert_eq!(payload.status_or_unknown(), "unknown");
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let json = r#"{
            "receiver": "aiops",
            "groupKey": "{}:{alertname=\"X\"}",
            "alerts": [{"labels": {"severity": "critical"}}]
        }"#;

        let payload: AlertPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.alert_count(), 1);
        assert_eq!(payload.alerts[0].severity(), "critical");
    }

    #[test_case(Some("critical"), "critical" ; "explicit severity passes through")]
    #[test_case(Some(""), "" ; "empty severity preserved verbatim")]
    #[test_case(None, "unknown" ; "missing severity defaults")]
    fn test_severity_label(value: Option<&str>, expected: &str) {
        let mut alert = Alert::default();
        if let Some(v) = value {
            alert.labels.insert("severity".to_string(), v.to_string());
        }

        assert_eq!(alert.severity(), expected);
    }

    #[test]
    fn test_from_text_wraps_description() {
        let payload = AlertPayload::from_text("database is slow");

        assert_eq!(payload.alert_count(), 1);
        assert_eq!(
            payload.alerts[0].annotation("description"),
            Some("database is slow")
        );
        assert!(payload.alerts[0].labels.is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let payload = AlertPayload::from_text("hello");
        let json = serde_json::to_string(&payload).unwrap();
        let back: AlertPayload = serde_json::from_str(&json).unwrap();

        assert_eq!(payload, back);
    }
}
