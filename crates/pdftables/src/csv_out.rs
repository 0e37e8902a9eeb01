use std::fs;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::ExtractError;

/// Write a normalized table to `path` as UTF-8 CSV.
///
/// If `header_row` names a row inside the table, that row is written first
/// and the rest follow in their original order. An absent or out-of-range
/// index leaves the rows untouched. The parent directory is created when
/// missing and an existing file is overwritten.
pub fn write_csv(
    rows: &[Vec<String>],
    path: &Path,
    header_row: Option<usize>,
) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_path(path)?;
    for row in ordered_rows(rows, header_row) {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Rows in output order, with the header row (if in bounds) moved to the front.
fn ordered_rows(rows: &[Vec<String>], header_row: Option<usize>) -> Vec<&Vec<String>> {
    match header_row {
        Some(idx) if idx < rows.len() => std::iter::once(&rows[idx])
            .chain(rows[..idx].iter())
            .chain(rows[idx + 1..].iter())
            .collect(),
        _ => rows.iter().collect(),
    }
}
