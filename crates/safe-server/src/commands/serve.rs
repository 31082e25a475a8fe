use anyhow::Context;

use crate::api;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `safeuse serve`.
pub async fn handle(args: &ServeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.seed {
        ctx.db
            .seed_reference_data()
            .await
            .context("failed to seed reference data before serving")?;
    }

    let mut server = ctx.config.server.clone();
    if let Some(port) = args.port {
        server.port = port;
    }

    let addr = server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr()?;

    let app = api::router(ctx.api_context(), &server);

    tracing::info!(
        %local,
        explanations = ctx.checker.explainer().is_enabled(),
        model = ctx.checker.explainer().model().unwrap_or("none"),
        "SafeUse API started"
    );
    if !flags.quiet {
        eprintln!("safeuse listening on http://{local}/api");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("SafeUse API server error")?;

    tracing::info!("SafeUse API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("SafeUse API received shutdown signal");
}
