use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `safeuse substances`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let substances = ctx
        .db
        .list_substances()
        .await
        .context("failed to list substances")?;
    if substances.is_empty() {
        tracing::warn!("reference store is empty; run `safeuse seed` first");
    }
    output(&substances, flags.format)
}
