//! Prometheus metrics for the alert processing pipeline.
//!
//! Three instruments, all safe for concurrent update from in-flight
//! requests:
//! - `aiops_alerts_received_total{severity}`: alerts seen in webhook payloads
//! - `aiops_alerts_analyzed_total{status}`: analysis outcomes per request
//! - `aiops_analysis_duration_seconds`: wall-clock time of the analyze call

use std::sync::Arc;

use parking_lot::RwLock;
use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::histogram::{exponential_buckets, Histogram};
use prometheus_client::registry::Registry;

/// Label set for the received-alerts counter.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct SeverityLabels {
    /// The alert's `severity` label, or "unknown".
    pub severity: String,
}

/// Label set for the analyzed-alerts counter.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct OutcomeLabels {
    /// The analysis outcome ("success" or "error").
    pub status: String,
}

/// Outcome of one webhook request's analysis stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisOutcome {
    /// The analysis produced generated text.
    Success,
    /// The analysis failed (transport, API, or parse failure) or the
    /// request never produced a parseable payload.
    Error,
}

impl AnalysisOutcome {
    /// Returns the outcome as the metric label value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for AnalysisOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counters and histogram for the alert processing pipeline.
#[derive(Clone)]
pub struct ProcessorMetrics {
    /// Alerts received, by severity label.
    alerts_received: Family<SeverityLabels, Counter>,
    /// Analysis outcomes, by status label.
    alerts_analyzed: Family<OutcomeLabels, Counter>,
    /// Histogram of analyze-call durations in seconds.
    analysis_duration_seconds: Histogram,
}

impl std::fmt::Debug for ProcessorMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorMetrics").finish_non_exhaustive()
    }
}

impl ProcessorMetrics {
    /// Creates the processor metrics and registers them with the given registry.
    fn new(registry: &mut Registry) -> Self {
        let alerts_received = Family::<SeverityLabels, Counter>::default();
        registry.register(
            "aiops_alerts_received",
            "Total number of alerts received",
            alerts_received.clone(),
        );

        let alerts_analyzed = Family::<OutcomeLabels, Counter>::default();
        registry.register(
            "aiops_alerts_analyzed",
            "Total number of alerts analyzed",
            alerts_analyzed.clone(),
        );

        // Histogram buckets: 50ms to ~102s with exponential growth, sized
        // for completion-API latencies (most calls land between 500ms and 30s).
        let buckets = exponential_buckets(0.05, 2.0, 12);
        let analysis_duration_seconds = Histogram::new(buckets);
        registry.register(
            "aiops_analysis_duration_seconds",
            "Time spent analyzing alerts",
            analysis_duration_seconds.clone(),
        );

        Self {
            alerts_received,
            alerts_analyzed,
            analysis_duration_seconds,
        }
    }

    /// Increments the received-alerts counter for a severity.
    pub fn inc_alerts_received(&self, severity: &str) {
        let labels = SeverityLabels {
            severity: severity.to_string(),
        };
        self.alerts_received.get_or_create(&labels).inc();
    }

    /// Gets the received-alerts count for a severity.
    #[must_use]
    pub fn get_alerts_received(&self, severity: &str) -> u64 {
        let labels = SeverityLabels {
            severity: severity.to_string(),
        };
        self.alerts_received.get_or_create(&labels).get()
    }

    /// Increments the analyzed-alerts counter for an outcome.
    pub fn inc_alerts_analyzed(&self, outcome: AnalysisOutcome) {
        let labels = OutcomeLabels {
            status: outcome.as_str().to_string(),
        };
        self.alerts_analyzed.get_or_create(&labels).inc();
    }

    /// Gets the analyzed-alerts count for an outcome.
    #[must_use]
    pub fn get_alerts_analyzed(&self, outcome: AnalysisOutcome) -> u64 {
        let labels = OutcomeLabels {
            status: outcome.as_str().to_string(),
        };
        self.alerts_analyzed.get_or_create(&labels).get()
    }

    /// Records an analysis duration observation in seconds.
    pub fn observe_analysis_duration(&self, duration_seconds: f64) {
        self.analysis_duration_seconds.observe(duration_seconds);
    }

    /// Records an analysis duration from a `std::time::Duration`.
    pub fn observe_analysis_duration_from(&self, duration: std::time::Duration) {
        self.analysis_duration_seconds
            .observe(duration.as_secs_f64());
    }
}

/// Central Prometheus metrics registry for the alert processor.
///
/// Holds all instruments and encodes them in Prometheus text format for
/// the `/metrics` endpoint. Cloning is cheap and clones share state.
#[derive(Clone)]
pub struct MetricsRegistry {
    /// The underlying prometheus-client registry.
    registry: Arc<RwLock<Registry>>,
    /// The processor's instruments.
    metrics: ProcessorMetrics,
}

impl std::fmt::Debug for MetricsRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRegistry")
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    /// Creates a new registry with all processor metrics registered.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Registry::default();
        let metrics = ProcessorMetrics::new(&mut registry);

        Self {
            registry: Arc::new(RwLock::new(registry)),
            metrics,
        }
    }

    /// Returns a reference to the processor metrics.
    #[must_use]
    pub fn metrics(&self) -> &ProcessorMetrics {
        &self.metrics
    }

    /// Encodes all metrics in Prometheus text format.
    ///
    /// This output can be served directly from a `/metrics` HTTP endpoint.
    #[must_use]
    pub fn encode(&self) -> String {
        let registry = self.registry.read();
        let mut buffer = String::new();
        if encode(&mut buffer, &registry).is_err() {
            tracing::error!("failed to encode prometheus metrics");
            return String::new();
        }
        buffer
    }

    /// Returns the Content-Type header value for Prometheus metrics.
    #[must_use]
    pub const fn content_type() -> &'static str {
        "text/plain; version=0.0.4; charset=utf-8"
    }
}
