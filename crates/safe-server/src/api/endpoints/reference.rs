//! Read-only listings of the reference data, in seed order.

use axum::Json;
use axum::extract::State;
use safe_core::entities::{Substance, SymptomEntry};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// `GET /api/substances`
pub async fn substances(State(ctx): State<ApiContext>) -> Result<Json<Vec<Substance>>, ApiError> {
    Ok(Json(ctx.db.list_substances().await?))
}

/// `GET /api/symptoms`
pub async fn symptoms(State(ctx): State<ApiContext>) -> Result<Json<Vec<SymptomEntry>>, ApiError> {
    Ok(Json(ctx.db.list_symptoms().await?))
}
