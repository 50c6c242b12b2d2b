// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stylesheet with ten eligible pixel literals, several ineligible ones, and
/// a few literals under the thresholds.
pub const STYLESHEET: &str = "\
.card {
  padding: 16px 24px;
  margin: 8px 2px;
  border: 1px solid #ccc;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
  font-size: 18px;
}
.card__title { width: 320px; height: 12px; gap: 32px }
.card__body {
  max-width: 640px;
  column-gap: 40px;
  padding-top: 48px; margin-bottom: 56px;
  border-width: 30px;
  transform: translateY(40px);
}
";

/// Number of literals in [`STYLESHEET`] the default policy converts
pub const STYLESHEET_CONVERSIONS: usize = 10;

/// Inline styles in a JS component
pub const COMPONENT: &str = "\
export const Card = () => (
  <div style={{ padding: '24px' }}>
    <span style={{ fontSize: '14px', margin: '12px' }} />
  </div>
);
";

/// Create a temp project with the given files.
///
/// Returns (TempDir, root) - keep the TempDir alive to prevent cleanup.
pub fn setup_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().to_path_buf();

    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    (temp_dir, root)
}

pub fn read(root: &Path, path: &str) -> String {
    std::fs::read_to_string(root.join(path)).unwrap()
}
