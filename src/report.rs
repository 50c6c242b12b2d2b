// src/report.rs

//! Human-readable change log formatting

use crate::convert::ConversionRecord;
use std::path::Path;

/// Number of records shown in a dry-run preview
pub const PREVIEW_LIMIT: usize = 20;

/// Format one record as `<file>:<line> | <property>: <original> → <converted>`
pub fn format_record(record: &ConversionRecord) -> String {
    format_with_path(record, &record.file)
}

/// Same as [`format_record`] but with the file shown relative to `root`
pub fn format_record_relative(record: &ConversionRecord, root: &Path) -> String {
    let file = record.file.strip_prefix(root).unwrap_or(&record.file);
    format_with_path(record, file)
}

fn format_with_path(record: &ConversionRecord, file: &Path) -> String {
    format!(
        "{}:{} | {}: {} → {}",
        file.display(),
        record.line_number,
        record.property,
        record.original,
        record.converted
    )
}

/// Preview lines for at most `limit` records, plus a trailing overflow line
///
/// ```text
/// app.css:3 | padding: 18px → 1.125rem
/// ... and 4 more
/// ```
pub fn render_preview(records: &[ConversionRecord], root: &Path, limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = records
        .iter()
        .take(limit)
        .map(|record| format_record_relative(record, root))
        .collect();

    if records.len() > limit {
        lines.push(format!("... and {} more", records.len() - limit));
    }

    lines
}
