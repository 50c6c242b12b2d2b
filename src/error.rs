// src/error.rs
//! Error types for pxrem
//!
//! Policy skips (ineligible property, value under threshold, no declaration
//! on a line) are not errors. Only configuration mistakes and file I/O
//! surface here.

use crate::convert::BatchSummary;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the conversion engine and its collaborators
#[derive(Error, Debug)]
pub enum Error {
    /// Base unit size of zero would make every ratio undefined
    #[error("Base unit size must be a positive integer, got {0}")]
    InvalidBaseUnit(u32),

    /// A conversion budget of zero is rejected rather than treated as unlimited
    #[error("Maximum conversions must be a positive integer, got {0}")]
    InvalidMaxConversions(usize),

    /// Dimension threshold below the general pixel threshold
    #[error(
        "Dimension threshold ({min_dimension_pixels}px) must not be lower than the pixel threshold ({min_pixel_value}px)"
    )]
    InvalidThresholds {
        min_pixel_value: u64,
        min_dimension_pixels: u64,
    },

    /// Glob pattern could not be parsed
    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Failed to read a source file
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a rewritten source file
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file failed part way through a batch; earlier files may already be rewritten
    #[error("{source} ({} file(s) already rewritten)", .completed.files_written())]
    Batch {
        completed: BatchSummary,
        #[source]
        source: Box<Error>,
    },

    /// Config file exists but is not valid TOML for our schema
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
