//! Prometheus instrumentation for the AIOps alert processor.
//!
//! `aiops-metrics` provides the process-wide counters and histogram recorded
//! around each webhook request, plus text exposition for the `/metrics`
//! endpoint.
//!
//! # Example
//!
//! ```rust
//! use aiops_metrics::{AnalysisOutcome, MetricsRegistry};
//!
//! let registry = MetricsRegistry::new();
//! let metrics = registry.metrics();
//!
//! metrics.inc_alerts_received("critical");
//! metrics.inc_alerts_analyzed(AnalysisOutcome::Success);
//! metrics.observe_analysis_duration(1.25);
//!
//! let output = registry.encode();
//! assert!(output.contains("aiops_alerts_received_total"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod prometheus;

// Re-export main types at crate root
pub use prometheus::{AnalysisOutcome, MetricsRegistry, ProcessorMetrics};
