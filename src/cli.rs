// src/cli.rs
//! CLI definitions for pxrem
//!
//! The command implementation lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pxrem")]
#[command(author, version)]
#[command(about = "Convert px values to rem safely in CSS/JS files", long_about = None)]
#[command(after_help = "\
Examples:
  # Dry run on CSS files
  pxrem -d \"public/styles/*.css\"

  # Convert up to 50 values
  pxrem -m 50 \"**/*.css\"

  # Custom base (20px = 1rem)
  pxrem -b 20 app.css

Safe conversions: font-size, padding, margin, gap, width/height (>20px)
Excluded: borders, shadows, outlines, transforms, small values (1-2px)")]
pub struct Cli {
    /// File pattern (glob, relative to --root)
    pub pattern: String,

    /// Show changes without modifying files
    #[arg(short, long)]
    pub dry_run: bool,

    /// Maximum number of conversions (default: unlimited)
    #[arg(short, long = "max", value_name = "N")]
    pub max_conversions: Option<usize>,

    /// Base px value for 1rem (default: 16)
    #[arg(short, long = "base", value_name = "PX")]
    pub base: Option<u32>,

    /// Config file (default: pxrem.toml in the root, if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the pattern is resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Number of changes to show in the dry-run preview
    #[arg(long, default_value_t = pxrem::report::PREVIEW_LIMIT)]
    pub preview_limit: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["pxrem", "**/*.css"]).unwrap();
        assert_eq!(cli.pattern, "**/*.css");
        assert!(!cli.dry_run);
        assert_eq!(cli.max_conversions, None);
        assert_eq!(cli.base, None);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.preview_limit, 20);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["pxrem", "-d", "-m", "50", "-b", "20", "app.css"]).unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.max_conversions, Some(50));
        assert_eq!(cli.base, Some(20));
    }

    #[test]
    fn test_rejects_negative_values() {
        assert!(Cli::try_parse_from(["pxrem", "-m", "-3", "app.css"]).is_err());
        assert!(Cli::try_parse_from(["pxrem", "-b", "-16", "app.css"]).is_err());
    }

    #[test]
    fn test_pattern_required() {
        assert!(Cli::try_parse_from(["pxrem"]).is_err());
    }
}
