use anyhow::Context;
use safe_core::responses::CheckRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `safeuse check <ids...>`.
pub async fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = CheckRequest {
        substance_ids: args.ids.clone(),
        already_taken: args.already_taken,
    };

    let result = ctx.checker.check(&request).await.context("check failed")?;
    if !result.unresolved_ids.is_empty() {
        tracing::warn!(ids = ?result.unresolved_ids, "unknown substance ids were ignored");
    }

    output(&result, flags.format)
}
