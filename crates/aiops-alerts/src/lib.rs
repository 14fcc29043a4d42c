//! Alertmanager-compatible alert model and prompt formatting for the AIOps processor.
//!
//! `aiops-alerts` provides the inbound data model for Alertmanager webhook
//! payloads and the pure formatting step that turns a payload into the text
//! block handed to the analysis LLM.
//!
//! # Design
//!
//! - **Lenient schema**: every field on [`Alert`] and [`AlertPayload`] is
//!   optional or defaulted. A payload with missing fields deserializes
//!   successfully; placeholders are substituted at format time, not at
//!   parse time.
//! - **Pure formatting**: [`format_alerts`] has no side effects, no failure
//!   mode, and is deterministic for a given payload.
//!
//! # Example
//!
//! ```rust
//! use aiops_alerts::{AlertPayload, format_alerts};
//!
//! let payload: AlertPayload = serde_json::from_str(
//!     r#"{"status":"firing","alerts":[{"labels":{"alertname":"HighCPU","severity":"critical"}}]}"#,
//! ).unwrap();
//!
//! assert_eq!(payload.alerts.len(), 1);
//! assert_eq!(payload.alerts[0].severity(), "critical");
//!
//! let text = format_alerts(&payload);
//! assert!(text.contains("Alert: HighCPU"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod format;
pub mod types;

// Re-export main types at crate root
pub use format::{format_alerts, NO_ALERT_DATA};
pub use types::{Alert, AlertPayload};
