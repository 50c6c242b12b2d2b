// src/lib.rs

//! pxrem - selective px-to-rem conversion
//!
//! Rewrites pixel literals inside `property: value` declarations of CSS and
//! JS sources into rem units, under a property-aware safety policy, with an
//! optional global conversion budget and a dry-run preview mode.
//!
//! # Architecture
//!
//! - Line-oriented: the engine sees text lines already in memory, never paths
//! - Lexical: declarations and literals are matched by pattern, not parsed
//! - Bounded: one session-owned counter caps conversions across a batch
//! - Auditable: every substitution is recorded in application order

pub mod config;
pub mod convert;
pub mod discovery;
mod error;
pub mod report;
pub mod store;

pub use config::{ConfigFile, ConversionPolicy, DEFAULT_BASE_UNIT, DEFAULT_EXCLUDED_DIRS};
pub use convert::{
    BatchSummary, ConversionRecord, ConversionSession, DeclarationScanner, FileConversion,
    FileSummary, PropertyClassifier, ThresholdPolicy, to_rem,
};
pub use error::{Error, Result};
pub use store::{DiskStore, FileStore, MemoryStore};
