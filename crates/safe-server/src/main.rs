use anyhow::Context;
use clap::Parser;
use safe_config::SafeConfig;

mod api;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("safeuse error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Loads `.env` first so SAFEUSE_LOG from the file reaches the filter.
    let config = SafeConfig::load_with_dotenv().context("failed to load safeuse configuration")?;

    init_tracing(cli.quiet, cli.verbose, cli.command.default_log_level())?;
    context::warn_unconfigured(&config);

    let flags = cli.global_flags();
    let ctx = context::AppContext::init(config)
        .await
        .context("failed to initialize safeuse application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool, default_level: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        default_level
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SAFEUSE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
