//! Reference data reseed endpoint.

use axum::Json;
use axum::extract::State;
use safe_core::responses::SeedResponse;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// `POST /api/seed-data`: destructive reload of all reference data.
///
/// Concurrent calls are queued behind each other. Checks running during a
/// seed may observe a partially written store.
pub async fn reseed(State(ctx): State<ApiContext>) -> Result<Json<SeedResponse>, ApiError> {
    let _guard = ctx.seed_lock.lock().await;
    let counts = ctx.db.seed_reference_data().await?;
    Ok(Json(SeedResponse::seeded(counts)))
}
