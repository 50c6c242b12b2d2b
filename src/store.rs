// src/store.rs

//! File content access for batch conversion
//!
//! The engine never touches the filesystem itself. [`ConversionSession::convert_files`]
//! reads and writes through a [`FileStore`], so the same batch logic runs
//! against disk or against an in-memory map.
//!
//! [`ConversionSession::convert_files`]: crate::ConversionSession::convert_files

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Source of file content and sink for rewritten content
pub trait FileStore {
    /// Read the full UTF-8 content of a file
    fn read(&mut self, path: &Path) -> Result<String>;

    /// Replace the full content of a file
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Reads and writes files on the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&mut self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// In-memory store that remembers every read and write
///
/// Useful for previews and for checking that a run left storage alone.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, String>,
    reads: Vec<PathBuf>,
    writes: Vec<PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file without counting it as a write
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Current content of a file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Paths read so far, in order
    pub fn reads(&self) -> &[PathBuf] {
        &self.reads
    }

    /// Paths written so far, in order
    pub fn writes(&self) -> &[PathBuf] {
        &self.writes
    }
}

impl FileStore for MemoryStore {
    fn read(&mut self, path: &Path) -> Result<String> {
        self.reads.push(path.to_path_buf());
        self.files.get(path).cloned().ok_or_else(|| Error::Read {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not in memory store"),
        })
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.writes.push(path.to_path_buf());
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
