use anyhow::Context;
use safe_core::responses::SeedResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `safeuse seed`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let counts = ctx
        .db
        .seed_reference_data()
        .await
        .context("failed to seed reference data")?;
    output(&SeedResponse::seeded(counts), flags.format)
}
