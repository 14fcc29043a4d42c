//! Shared state for the processor HTTP layer.

use std::sync::Arc;
use std::time::Instant;

use aiops_llm::AlertAnalyzer;
use aiops_metrics::{MetricsRegistry, ProcessorMetrics};

use crate::config::ProcessorConfig;

/// Shared state for the processor server.
///
/// Holds everything a request handler needs: the immutable configuration,
/// the metrics registry, and the analyzer. Constructed once at startup and
/// shared across all in-flight requests behind an `Arc`.
pub struct AppState {
    /// Processor configuration.
    config: Arc<ProcessorConfig>,
    /// Metrics registry backing the `/metrics` endpoint.
    registry: MetricsRegistry,
    /// The alert analyzer, injected at startup.
    analyzer: Arc<dyn AlertAnalyzer>,
    /// Server start time.
    start_time: Instant,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Creates new shared state.
    pub fn new(config: ProcessorConfig, analyzer: Arc<dyn AlertAnalyzer>) -> Self {
        Self {
            config: Arc::new(config),
            registry: MetricsRegistry::new(),
            analyzer,
            start_time: Instant::now(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Returns the processor metrics.
    #[must_use]
    pub fn metrics(&self) -> &ProcessorMetrics {
        self.registry.metrics()
    }

    /// Returns the metrics registry.
    #[must_use]
    pub fn registry(&self) -> &MetricsRegistry {
        &self.registry
    }

    /// Returns the analyzer.
    #[must_use]
    pub fn analyzer(&self) -> &dyn AlertAnalyzer {
        self.analyzer.as_ref()
    }

    /// Returns the server uptime in seconds.
    #[must_use]
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
