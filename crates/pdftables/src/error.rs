//! Error type for the extraction pipeline.
//!
//! Uses [`thiserror`] for error derivation. Library errors from the PDF
//! backend are carried as messages, since only their text reaches the user.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while extracting tables.
///
/// A table that cleans to nothing is not an error; it is reported through
/// [`crate::ExtractEvent::TableSkipped`] instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input path does not name an existing regular file.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The requested page range resolved to no pages of the document.
    #[error("No valid pages in the specified range.")]
    NoPagesSelected,

    /// The PDF library could not open the document.
    #[error("failed to open PDF: {0}")]
    Open(String),

    /// The PDF library failed while reading a page (1-based).
    #[error("failed to read page {page}: {detail}")]
    Page { page: usize, detail: String },

    /// Error creating the output directory or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing a table as CSV.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}
