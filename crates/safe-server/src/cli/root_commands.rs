use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Replace all reference data with the bundled dataset.
    Seed,
    /// Check a combination of substances.
    Check(CheckArgs),
    /// List known substances.
    Substances,
    /// List symptom guidance.
    Symptoms,
}

impl Commands {
    /// Log level used when neither `--quiet`, `--verbose`, nor `SAFEUSE_LOG` is set.
    #[must_use]
    pub const fn default_log_level(&self) -> &'static str {
        match self {
            Self::Serve(_) => "info",
            Self::Seed | Self::Check(_) | Self::Substances | Self::Symptoms => "warn",
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Seed the reference data before accepting requests.
    #[arg(long)]
    pub seed: bool,

    /// Override the configured listen port.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Substance ids (for example: mdma alcohol).
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,

    /// The substances have already been taken.
    #[arg(long)]
    pub already_taken: bool,
}
