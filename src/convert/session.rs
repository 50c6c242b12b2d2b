// src/convert/session.rs

//! Bounded conversion across lines and files
//!
//! A [`ConversionSession`] owns the only mutable state of a run: the
//! conversion counter and the ordered change log. Records are appended in
//! file order, then line order, then left-to-right token order, which is
//! also the order the budget is spent in.

use super::{DeclarationScanner, PropertyClassifier, to_rem};
use crate::config::ConversionPolicy;
use crate::error::{Error, Result};
use crate::store::FileStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// One applied px-to-rem substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRecord {
    /// File the conversion happened in
    pub file: PathBuf,
    /// 1-based line number
    pub line_number: usize,
    /// Property name as written in the source
    pub property: String,
    /// Pixel literal that was replaced, e.g. `18px`
    pub original: String,
    /// Rem literal written in its place, e.g. `1.125rem`
    pub converted: String,
}

/// Result of converting one file's lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConversion {
    /// Rewritten lines, same count and terminators as the input
    pub lines: Vec<String>,
    /// Conversions applied in this file
    pub conversions: usize,
}

impl FileConversion {
    /// Join the rewritten lines back into file content
    pub fn content(&self) -> String {
        self.lines.concat()
    }
}

/// Per-file outcome of a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// File as passed to the batch
    pub path: PathBuf,
    /// Conversions applied in this file
    pub conversions: usize,
    /// Whether the rewritten content was handed to the store
    pub written: bool,
}

/// Outcome of [`ConversionSession::convert_files`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files that were read and processed, in processing order
    pub files: Vec<FileSummary>,
    /// Files never opened because the budget ran out first
    pub files_skipped: usize,
}

impl BatchSummary {
    /// Total conversions across processed files
    pub fn total_conversions(&self) -> usize {
        self.files.iter().map(|f| f.conversions).sum()
    }

    /// Number of files whose content was written back
    pub fn files_written(&self) -> usize {
        self.files.iter().filter(|f| f.written).count()
    }
}

/// Session-scoped conversion state
#[derive(Debug)]
pub struct ConversionSession {
    policy: ConversionPolicy,
    conversions: usize,
    records: Vec<ConversionRecord>,
}

impl ConversionSession {
    /// Start a session with a validated policy
    pub fn new(policy: ConversionPolicy) -> Self {
        Self {
            policy,
            conversions: 0,
            records: Vec::new(),
        }
    }

    /// Policy this session was started with
    pub fn policy(&self) -> &ConversionPolicy {
        &self.policy
    }

    /// Conversions applied so far across all files
    pub fn conversions(&self) -> usize {
        self.conversions
    }

    /// Change log in application order
    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    /// Consume the session, keeping only its change log
    pub fn into_records(self) -> Vec<ConversionRecord> {
        self.records
    }

    /// Conversions still allowed, `None` when unbounded
    pub fn remaining_budget(&self) -> Option<usize> {
        self.policy
            .max_conversions()
            .map(|max| max.saturating_sub(self.conversions))
    }

    /// Check if the budget has been spent
    pub fn is_exhausted(&self) -> bool {
        self.remaining_budget() == Some(0)
    }

    /// Convert the lines of one file
    ///
    /// Lines after the budget runs out are copied verbatim, as is the rest
    /// of the line in which it runs out.
    pub fn process_file<S: AsRef<str>>(&mut self, file: &Path, lines: &[S]) -> FileConversion {
        let before = self.conversions;
        let mut rewritten = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if self.is_exhausted() {
                rewritten.push(line.to_string());
                continue;
            }
            rewritten.push(self.process_line(file, index + 1, line));
        }

        FileConversion {
            lines: rewritten,
            conversions: self.conversions - before,
        }
    }

    /// Rewrite eligible pixel literals in a single line
    ///
    /// Substitution is by recorded offset, so a skipped `5px` earlier in the
    /// line is never mistaken for a later accepted one.
    fn process_line(&mut self, file: &Path, line_number: usize, line: &str) -> String {
        let mut output = String::with_capacity(line.len());
        let mut cursor = 0;
        let thresholds = self.policy.thresholds();
        let base = self.policy.base_unit_size();

        'declarations: for decl in DeclarationScanner::find_declarations(line) {
            if !PropertyClassifier::is_eligible(decl.property) {
                trace!(property = decl.property, line_number, "property not eligible");
                continue;
            }

            for token in DeclarationScanner::find_pixel_tokens(decl.value) {
                if self.is_exhausted() {
                    break 'declarations;
                }
                if !thresholds.should_convert(decl.property, token.magnitude) {
                    trace!(property = decl.property, value = token.raw, "value below threshold");
                    continue;
                }

                let start = decl.value_start + token.offset;
                let converted = to_rem(token.magnitude, base);
                output.push_str(&line[cursor..start]);
                output.push_str(&converted);
                cursor = start + token.raw.len();

                self.records.push(ConversionRecord {
                    file: file.to_path_buf(),
                    line_number,
                    property: decl.property.to_string(),
                    original: token.raw.to_string(),
                    converted,
                });
                self.conversions += 1;
            }
        }

        output.push_str(&line[cursor..]);
        output
    }

    /// Convert a batch of files through a store
    ///
    /// Files are processed in the given order. Once the budget is spent the
    /// remaining files are not read at all. A file is written only when the
    /// policy is not a dry run and at least one conversion happened in it.
    ///
    /// A read or write failure part way through returns [`Error::Batch`],
    /// which carries the summary of the files already processed.
    pub fn convert_files<F: FileStore>(
        &mut self,
        paths: &[PathBuf],
        store: &mut F,
    ) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for (index, path) in paths.iter().enumerate() {
            if self.is_exhausted() {
                summary.files_skipped = paths.len() - index;
                info!(
                    limit = self.policy.max_conversions(),
                    skipped = summary.files_skipped,
                    "Reached max conversions limit"
                );
                break;
            }

            let content = match store.read(path) {
                Ok(content) => content,
                Err(source) => return Err(batch_failed(summary, source)),
            };
            let lines = split_lines(&content);
            let result = self.process_file(path, &lines);
            debug!(path = %path.display(), conversions = result.conversions, "Processed file");

            let written = !self.policy.dry_run() && result.conversions > 0;
            if written {
                if let Err(source) = store.write(path, &result.content()) {
                    return Err(batch_failed(summary, source));
                }
                info!(path = %path.display(), conversions = result.conversions, "Wrote file");
            }

            summary.files.push(FileSummary {
                path: path.clone(),
                conversions: result.conversions,
                written,
            });
        }

        Ok(summary)
    }
}

/// Wrap a mid-batch failure with what had already been done
fn batch_failed(completed: BatchSummary, source: Error) -> Error {
    for file in completed.files.iter().filter(|f| f.written) {
        warn!(path = %file.path.display(), "File was rewritten before the batch failed");
    }
    Error::Batch {
        completed,
        source: Box::new(source),
    }
}

/// Split file content into lines, keeping each line's terminator
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}
