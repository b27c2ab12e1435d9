use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use promptlens_core::AnalysisRequest;
use serde::Deserialize;

// ============================================================================
// Health
// ============================================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": state.analyzer.engine().catalog_name(),
    }))
}

// ============================================================================
// Analysis
// ============================================================================

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> impl IntoResponse {
    let max_chars = state.config.server.max_input_chars;
    let chars = request.text.chars().count();
    if chars > max_chars {
        tracing::warn!(chars, max_chars, "Rejected oversized request");
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(serde_json::json!({
                "error": format!("Request text exceeds {} characters", max_chars)
            })),
        )
            .into_response();
    }

    let result = state.analyzer.analyze(request).await;
    state.record(result.clone());
    Json(result).into_response()
}

// ============================================================================
// Rules
// ============================================================================

pub async fn list_rules(State(state): State<AppState>) -> impl IntoResponse {
    let engine = state.analyzer.engine();
    let rules: Vec<_> = engine.rules().cloned().collect();
    Json(serde_json::json!({
        "catalog": engine.catalog_name(),
        "rules": rules,
    }))
}

// ============================================================================
// Statistics
// ============================================================================

pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.analyzer.metrics().snapshot())
}

pub async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.prometheus {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Metrics exporter not installed".to_string(),
        ),
    }
}

// ============================================================================
// History
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

fn default_history_limit() -> usize {
    20
}

pub async fn list_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    Json(state.recent(query.limit))
}
