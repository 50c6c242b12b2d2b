// src/convert/mod.rs

//! Selective px-to-rem conversion engine
//!
//! The engine works on lines of text that are already in memory. For each
//! line it finds `property: value` declarations, keeps only eligible
//! properties, finds `<digits>px` literals inside each value, applies the
//! value thresholds and substitutes the rem literal in place.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`PropertyClassifier`] | Which properties may be converted |
//! | [`ThresholdPolicy`] | Which magnitudes may be converted |
//! | [`to_rem`] | Canonical rem formatting |
//! | [`DeclarationScanner`] | Lexical matching of declarations and literals |
//! | [`ConversionSession`] | Budget, dry run and change log across files |
//!
//! # Usage
//!
//! ```
//! use pxrem::{ConversionPolicy, ConversionSession};
//! use std::path::Path;
//!
//! let policy = ConversionPolicy::new(16, None, true).unwrap();
//! let mut session = ConversionSession::new(policy);
//! let result = session.process_file(Path::new("app.css"), &["  padding: 18px 2px;"]);
//!
//! assert_eq!(result.lines, vec!["  padding: 1.125rem 2px;"]);
//! assert_eq!(session.records()[0].converted, "1.125rem");
//! ```

mod classifier;
mod scanner;
mod session;
mod threshold;
mod units;

pub use classifier::PropertyClassifier;
pub use scanner::{Declaration, DeclarationScanner, PixelToken};
pub use session::{
    BatchSummary, ConversionRecord, ConversionSession, FileConversion, FileSummary, split_lines,
};
pub use threshold::{MIN_DIMENSION_PIXELS, MIN_PIXEL_VALUE, ThresholdPolicy};
pub use units::{REM_PRECISION, to_rem};
