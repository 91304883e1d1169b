use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use locale_sync::{run_sync, SyncOptions, SENTINEL};

/// Structural diff and repair for a pair of locale JSON files.
#[derive(Debug, Parser)]
#[command(name = "locale-sync", version, about)]
struct Cli {
    /// First locale file (e.g. en.json).
    left: PathBuf,

    /// Second locale file (e.g. ar.json).
    right: PathBuf,

    /// Merge missing keys into both files and rewrite them. Without this
    /// flag the run is a dry-run report and never writes.
    #[arg(long)]
    apply: bool,

    /// Rewrite with keys sorted alphabetically at every level.
    #[arg(long)]
    sort_keys: bool,

    /// Maximum sampled paths shown per report section.
    #[arg(long, default_value_t = 10)]
    sample: usize,

    /// Internal path separator; must not occur inside any key.
    #[arg(long, default_value = SENTINEL)]
    separator: String,

    /// Also report blank values and values copied verbatim between locales.
    #[arg(long)]
    audit: bool,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = SyncOptions {
        apply: cli.apply,
        sort_keys: cli.sort_keys,
        separator: cli.separator,
        sample_limit: cli.sample,
        audit: cli.audit,
    };

    let report = run_sync(&cli.left, &cli.right, &options)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
    } else {
        print!("{report}");
    }
    Ok(())
}
