//! Processor server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use aiops_llm::AlertAnalyzer;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ProcessorConfig;
use crate::error::{ProcessorError, ProcessorResult};
use crate::routes::create_router;
use crate::state::AppState;

/// The alert processor HTTP server.
///
/// Wraps the shared [`AppState`] and serves the processor API. The analyzer
/// is injected at construction so tests can run the full router against a
/// mock.
#[derive(Debug, Clone)]
pub struct ProcessorServer {
    state: Arc<AppState>,
}

impl ProcessorServer {
    /// Creates a new server from the configuration and an analyzer.
    #[must_use]
    pub fn new(config: ProcessorConfig, analyzer: Arc<dyn AlertAnalyzer>) -> Self {
        let state = Arc::new(AppState::new(config, analyzer));
        Self { state }
    }

    /// Returns the shared state for external access.
    #[must_use]
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    /// Creates the router without starting the server.
    ///
    /// Useful for testing or embedding in another server.
    #[must_use]
    pub fn router(&self) -> axum::Router {
        create_router(self.state.clone())
    }

    /// Starts the server and listens for connections.
    ///
    /// Runs until the server encounters a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve(&self, addr: SocketAddr) -> ProcessorResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ProcessorError::BindFailed(addr, e))?;

        info!(addr = %addr, "Processor server listening");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| ProcessorError::Internal(e.to_string()))?;

        Ok(())
    }

    /// Starts the server with graceful shutdown support.
    ///
    /// The server will shut down when the provided future completes.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve_with_shutdown<F>(&self, addr: SocketAddr, shutdown: F) -> ProcessorResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ProcessorError::BindFailed(addr, e))?;

        info!(addr = %addr, "Processor server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ProcessorError::Internal(e.to_string()))?;

        info!("Processor server shut down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::MockAnalyzer;

    fn make_test_server() -> ProcessorServer {
        let config = ProcessorConfig::default().with_api_key("sk-test");
        ProcessorServer::new(config, MockAnalyzer::succeeding("ok"))
    }

    #[test]
    fn test_server_creation() {
        let server = make_test_server();

        assert!(server.state().config().has_api_key());
    }

    #[test]
    fn test_server_clone_shares_state() {
        let server = make_test_server();
        let cloned = server.clone();

        server.state().metrics().inc_alerts_received("critical");

        assert_eq!(
            cloned.state().metrics().get_alerts_received("critical"),
            1
        );
    }

    #[tokio::test]
    async fn test_router_creation() {
        let server = make_test_server();
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_serve_with_shutdown() {
        let server = make_test_server();

        // Use a random port to avoid conflicts
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let server_handle = tokio::spawn(async move {
            server
                .serve_with_shutdown(addr, async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        // Give server a moment to start
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let _ = shutdown_tx.send(());

        let result =
            tokio::time::timeout(std::time::Duration::from_secs(1), server_handle).await;

        assert!(result.is_ok());
    }
}
