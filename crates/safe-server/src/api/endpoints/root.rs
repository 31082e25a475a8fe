use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// `GET /api/`
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: "SAFEUSE API - Harm Reduction Drug Interaction Checker",
    })
}
