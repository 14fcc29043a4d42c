//! # aiops-server
//!
//! HTTP layer for the AIOps alert processor, built on the axum framework.
//!
//! The server receives Alertmanager webhook notifications, hands their
//! content to an [`AlertAnalyzer`](aiops_llm::AlertAnalyzer) for root-cause
//! analysis, records Prometheus counters and a latency histogram around each
//! request, and returns the analysis as JSON.
//!
//! ## API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/` | GET | Service info and liveness |
//! | `/health` | GET | Health check |
//! | `/metrics` | GET | Prometheus text exposition |
//! | `/webhook/alertmanager` | POST | Alertmanager webhook receiver |
//! | `/analyze` | POST | Manual single-text analysis |
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use aiops_llm::OpenAiClient;
//! use aiops_server::{ProcessorConfig, ProcessorServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ProcessorConfig::from_env();
//!     let analyzer = Arc::new(OpenAiClient::new(config.llm_config()).unwrap());
//!     let addr = config.bind_addr;
//!
//!     let server = ProcessorServer::new(config, analyzer);
//!     // server.serve(addr).await.unwrap();
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod types;

// Re-export main types
pub use config::ProcessorConfig;
pub use error::{ProcessorError, ProcessorResult};
pub use server::ProcessorServer;
pub use state::AppState;
pub use types::{AnalyzeRequest, AnalyzeResponse, HealthResponse, ServiceInfo, WebhookResponse};
