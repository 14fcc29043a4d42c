//! Error types for the completion client.

use thiserror::Error;

/// Errors from the outbound completion call.
///
/// All variants are terminal for the request: the client performs no
/// retries.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure (connect, timeout, TLS, body decode).
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("completion API returned status {status}: {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Body excerpt returned with the error status.
        message: String,
    },

    /// The API answered 2xx but the completion carried no choices.
    #[error("completion response contained no choices")]
    EmptyResponse,
}
