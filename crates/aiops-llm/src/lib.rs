//! LLM completion client for alert root-cause analysis.
//!
//! `aiops-llm` owns the outbound call to an OpenAI-compatible chat-completion
//! API. The [`AlertAnalyzer`] trait is the seam the HTTP layer depends on;
//! [`OpenAiClient`] is the production implementation, constructed once at
//! startup and shared for the process lifetime.
//!
//! # Example
//!
//! ```rust,no_run
//! use aiops_llm::{AlertAnalyzer, LlmConfig, OpenAiClient};
//! use aiops_alerts::AlertPayload;
//!
//! # async fn run() -> Result<(), aiops_llm::LlmError> {
//! let config = LlmConfig::new("sk-...").with_model("gpt-4o-mini");
//! let client = OpenAiClient::new(config)?;
//!
//! let payload = AlertPayload::from_text("disk usage at 97% on node-3");
//! let analysis = client.analyze(&payload).await?;
//! println!("{analysis}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;

// Re-export main types at crate root
pub use client::{AlertAnalyzer, OpenAiClient};
pub use config::LlmConfig;
pub use error::LlmError;
