// src/discovery.rs

//! Glob-based discovery of files to convert

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Expand `pattern` under `root` into a sorted list of files
///
/// Directories, unreadable entries and anything under an excluded directory
/// name (below `root`) are dropped. Sorting keeps budget truncation
/// reproducible across platforms.
pub fn find_files(root: &Path, pattern: &str, excluded_dirs: &[String]) -> Result<Vec<PathBuf>> {
    // Only the pattern is a glob; brackets or stars in the root are literal
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let full_pattern = Path::new(&escaped_root).join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let entries = glob::glob(&full_pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.msg.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                if !path.is_file() {
                    continue;
                }
                let relative = path.strip_prefix(root).unwrap_or(&path);
                if is_excluded(relative, excluded_dirs) {
                    debug!(path = %path.display(), "Skipping excluded path");
                    continue;
                }
                files.push(path);
            }
            Err(e) => warn!("Skipping unreadable path: {}", e),
        }
    }

    files.sort();
    Ok(files)
}

/// Check if any path component equals an excluded directory name
pub fn is_excluded(path: &Path, excluded_dirs: &[String]) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => excluded_dirs.iter().any(|dir| name == dir.as_str()),
        _ => false,
    })
}
