//! The table-detection seam.
//!
//! [`TableSource`] is the only thing the pipeline needs from a PDF: a page
//! count and the raw tables found on each page. [`PdfDocument`] implements it
//! on top of pdfplumber; tests substitute in-memory sources.

use std::path::Path;

use pdfplumber::{Pdf, TableSettings};

use crate::error::ExtractError;
use crate::table::RawTable;

/// A document that can report raw tables page by page.
pub trait TableSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Raw tables detected on the 0-indexed page, in detection order.
    ///
    /// A page without tables yields an empty list, not an error.
    fn extract_tables(&self, page_index: usize) -> Result<Vec<RawTable>, ExtractError>;
}

/// An open PDF whose tables are detected by pdfplumber with default settings.
///
/// The parsed document is released when this value is dropped.
pub struct PdfDocument {
    pdf: Pdf,
    settings: TableSettings,
}

impl PdfDocument {
    /// Open the PDF at `path`.
    ///
    /// Fails with [`ExtractError::FileNotFound`] unless `path` names an
    /// existing regular file, and with [`ExtractError::Open`] if pdfplumber
    /// rejects it.
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        if !path.is_file() {
            return Err(ExtractError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let pdf = Pdf::open_file(path, None).map_err(|e| ExtractError::Open(e.to_string()))?;
        Ok(Self {
            pdf,
            settings: TableSettings::default(),
        })
    }
}

impl TableSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    fn extract_tables(&self, page_index: usize) -> Result<Vec<RawTable>, ExtractError> {
        let page = self.pdf.page(page_index).map_err(|e| ExtractError::Page {
            page: page_index + 1,
            detail: e.to_string(),
        })?;

        let tables: Vec<RawTable> = page
            .find_tables(&self.settings)
            .into_iter()
            .map(|table| {
                table
                    .rows
                    .into_iter()
                    .map(|row| row.into_iter().map(|cell| cell.text).collect())
                    .collect()
            })
            .collect();
        Ok(tables)
    }
}
