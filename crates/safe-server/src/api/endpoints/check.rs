//! Interaction check endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use safe_core::responses::{CheckRequest, CheckResult, MAX_SUBSTANCE_IDS};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// `POST /api/check`
///
/// More than [`MAX_SUBSTANCE_IDS`] ids is rejected with 422 before any lookup.
pub async fn run(
    State(ctx): State<ApiContext>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResult>, ApiError> {
    let Json(request) = payload?;
    let result = ctx.checker.check(&request).await?;
    Ok(Json(result))
}
