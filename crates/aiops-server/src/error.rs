//! Error types for the processor HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for processor operations.
pub type ProcessorResult<T> = Result<T, ProcessorError>;

/// Errors that can occur in the processor HTTP layer.
///
/// Display strings double as the `detail` field of the JSON error body, so
/// variants carrying a caller-facing message render it without decoration.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Failed to bind to the specified address.
    #[error("failed to bind to {0}: {1}")]
    BindFailed(std::net::SocketAddr, std::io::Error),

    /// Invalid request parameters.
    #[error("{0}")]
    InvalidRequest(String),

    /// Manual analysis requested but no API key is configured.
    #[error("No OpenAI API key configured")]
    MissingApiKey,

    /// The analysis call failed.
    #[error("{0}")]
    Analysis(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ProcessorError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            Self::BindFailed(_, _) | Self::Analysis(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
