//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub llm_configured: bool,
    pub version: &'static str,
}

/// `GET /api/health`: store reachability and whether explanations are live.
///
/// Answers 503 when the store does not respond.
pub async fn check(State(ctx): State<ApiContext>) -> (StatusCode, Json<HealthResponse>) {
    let llm_configured = ctx.checker.explainer().is_enabled();

    let (code, status, store) = match ctx.db.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(error) => {
            tracing::warn!(%error, "health check: reference store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            store,
            llm_configured,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
