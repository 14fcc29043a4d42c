//! HTTP request handlers for the processor API.

use std::sync::Arc;
use std::time::Instant;

use aiops_alerts::AlertPayload;
use aiops_metrics::{AnalysisOutcome, MetricsRegistry};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{ProcessorError, ProcessorResult};
use crate::state::AppState;
use crate::types::{AnalyzeRequest, AnalyzeResponse, HealthResponse, ServiceInfo, WebhookResponse};

/// Prefix carried by the analysis text when the completion call failed.
const ANALYSIS_ERROR_PREFIX: &str = "Error analyzing alert: ";

/// Handle GET / - service info.
pub async fn root(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: state.config().service_name.clone(),
        status: "running".to_string(),
        timestamp: Utc::now(),
    })
}

/// Handle GET /health - health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Handle GET /metrics - Prometheus text exposition.
pub async fn metrics_exposition(State(state): State<Arc<AppState>>) -> Response {
    let body = state.registry().encode();
    (
        [(header::CONTENT_TYPE, MetricsRegistry::content_type())],
        body,
    )
        .into_response()
}

/// Handle POST /webhook/alertmanager - receive and analyze alerts.
///
/// The body is parsed leniently (see [`AlertPayload`]); a payload that is
/// not valid JSON at all is a 500 with the parse error as `detail` and an
/// error-outcome increment, matching the upstream consumers' expectations.
/// When no API key is configured the alerts are counted but analysis is
/// skipped entirely.
pub async fn alertmanager_webhook(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ProcessorResult<Json<WebhookResponse>> {
    let payload: AlertPayload = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(err) => {
            state.metrics().inc_alerts_analyzed(AnalysisOutcome::Error);
            return Err(ProcessorError::Internal(err.to_string()));
        }
    };

    info!(
        status = payload.status_or_unknown(),
        alert_count = payload.alert_count(),
        "received alert webhook"
    );

    for alert in &payload.alerts {
        state.metrics().inc_alerts_received(alert.severity());
    }

    if !state.config().has_api_key() {
        warn!("no API key configured - skipping analysis");
        return Ok(Json(WebhookResponse::received(payload.alert_count())));
    }

    let start = Instant::now();
    let result = state.analyzer().analyze(&payload).await;
    state.metrics().observe_analysis_duration_from(start.elapsed());

    let (outcome, analysis) = match result {
        Ok(text) => (AnalysisOutcome::Success, text),
        Err(err) => (
            AnalysisOutcome::Error,
            format!("{ANALYSIS_ERROR_PREFIX}{err}"),
        ),
    };
    state.metrics().inc_alerts_analyzed(outcome);

    debug!(analysis = %analysis, "alert analysis");
    info!(outcome = %outcome, "alert analysis completed");

    Ok(Json(WebhookResponse::analyzed(
        payload.alert_count(),
        analysis,
    )))
}

/// Handle POST /analyze - manual single-text analysis.
///
/// Requires a non-empty `text` field (400 otherwise) and a configured API
/// key (503 otherwise). A failed completion call surfaces as a 500 here,
/// unlike the webhook path; manual callers see real errors.
pub async fn analyze_manual(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ProcessorResult<Json<AnalyzeResponse>> {
    let request: AnalyzeRequest =
        serde_json::from_str(&body).map_err(|err| ProcessorError::Internal(err.to_string()))?;

    if request.text.is_empty() {
        return Err(ProcessorError::InvalidRequest(
            "No text provided".to_string(),
        ));
    }

    if !state.config().has_api_key() {
        return Err(ProcessorError::MissingApiKey);
    }

    let analysis = state
        .analyzer()
        .analyze_text(&request.text)
        .await
        .map_err(|err| ProcessorError::Analysis(err.to_string()))?;

    Ok(Json(AnalyzeResponse {
        status: "analyzed".to_string(),
        analysis,
        timestamp: Utc::now(),
    }))
}
