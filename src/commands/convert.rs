// src/commands/convert.rs

//! The px-to-rem conversion command

use anyhow::{Context, Result};
use pxrem::{ConfigFile, ConversionSession, DiskStore, discovery, report};
use std::path::Path;
use tracing::info;

/// Options for [`cmd_convert`], already parsed from the command line
#[derive(Debug)]
pub struct ConvertOptions<'a> {
    pub pattern: &'a str,
    pub root: &'a Path,
    pub config: Option<&'a Path>,
    pub base: Option<u32>,
    pub max_conversions: Option<usize>,
    pub dry_run: bool,
    pub preview_limit: usize,
}

/// Find matching files, convert them and print a summary
///
/// The policy is validated before discovery, so a bad base or budget never
/// touches a file.
pub fn cmd_convert(opts: &ConvertOptions<'_>) -> Result<()> {
    let config = ConfigFile::discover(opts.config, opts.root)
        .context("Failed to load configuration")?;
    let policy = config
        .policy(opts.base, opts.max_conversions, opts.dry_run)
        .context("Invalid conversion settings")?;
    info!(
        base = policy.base_unit_size(),
        max = policy.max_conversions(),
        dry_run = policy.dry_run(),
        "Conversion policy"
    );

    let files = discovery::find_files(opts.root, opts.pattern, &config.excluded_dirs())?;
    if files.is_empty() {
        return Err(anyhow::anyhow!("No files found matching: {}", opts.pattern));
    }

    println!("Found {} file(s):", files.len());
    for file in &files {
        println!("  {}", relative(file, opts.root).display());
    }
    println!();

    let mut session = ConversionSession::new(policy);
    let summary = session.convert_files(&files, &mut DiskStore)?;

    for file in summary.files.iter().filter(|f| f.conversions > 0) {
        let path = relative(&file.path, opts.root);
        if opts.dry_run {
            println!("[DRY RUN] {} ({} changes)", path.display(), file.conversions);
        } else {
            println!("{} ({} changes)", path.display(), file.conversions);
        }
    }

    if let Some(max) = policy.max_conversions()
        && session.is_exhausted()
    {
        println!("Reached max conversions limit ({})", max);
        if summary.files_skipped > 0 {
            println!("  {} file(s) not processed", summary.files_skipped);
        }
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("Total conversions: {}", summary.total_conversions());

    if opts.dry_run {
        let preview = report::render_preview(session.records(), opts.root, opts.preview_limit);
        if !preview.is_empty() {
            println!();
            println!("Changes preview (first {}):", opts.preview_limit);
            for line in preview {
                println!("  {}", line);
            }
        }
        println!();
        println!("This was a dry run. Remove -d to apply changes.");
    } else {
        println!("Files written: {}", summary.files_written());
    }

    Ok(())
}

fn relative<'p>(path: &'p Path, root: &Path) -> &'p Path {
    path.strip_prefix(root).unwrap_or(path)
}
