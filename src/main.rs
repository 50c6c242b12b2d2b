// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{ConvertOptions, cmd_convert};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Warnings only by default; the printed report is the primary output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cmd_convert(&ConvertOptions {
        pattern: &cli.pattern,
        root: &cli.root,
        config: cli.config.as_deref(),
        base: cli.base,
        max_conversions: cli.max_conversions,
        dry_run: cli.dry_run,
        preview_limit: cli.preview_limit,
    })
}
