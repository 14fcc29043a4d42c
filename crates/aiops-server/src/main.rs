//! aiops-processor - AI-powered alert analysis service.
//!
//! Receives Alertmanager webhooks, analyzes alert content with an
//! OpenAI-compatible completion API, and exposes Prometheus metrics.

use std::net::SocketAddr;
use std::sync::Arc;

use aiops_llm::OpenAiClient;
use aiops_server::{ProcessorConfig, ProcessorServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ProcessorConfig::from_env();

    // RUST_LOG wins when set; LOG_LEVEL covers the common case.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase())),
        )
        .init();

    // Bind address may be overridden by the first positional argument.
    let bind_addr: SocketAddr = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.bind_addr);

    info!(service = %config.service_name, model = %config.model, "starting alert processor");
    if !config.has_api_key() {
        warn!("OPENAI_API_KEY not set - webhook analysis will be skipped");
    }

    let analyzer = Arc::new(OpenAiClient::new(config.llm_config())?);
    let server = ProcessorServer::new(config, analyzer);

    server.serve(bind_addr).await?;

    Ok(())
}
