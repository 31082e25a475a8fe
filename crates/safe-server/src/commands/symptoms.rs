use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `safeuse symptoms`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let symptoms = ctx
        .db
        .list_symptoms()
        .await
        .context("failed to list symptoms")?;
    output(&symptoms, flags.format)
}
