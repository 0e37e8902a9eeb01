use std::fs;
use std::path::{Path, PathBuf};

use crate::csv_out::write_csv;
use crate::error::ExtractError;
use crate::source::{PdfDocument, TableSource};
use crate::table::{clean_table, normalize_column_count};

/// Options controlling one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Directory receiving the CSV files. Created if missing.
    pub output_dir: PathBuf,
    /// 0-indexed pages to scan, or `None` for every page.
    pub pages: Option<Vec<usize>>,
    /// 0-indexed row of each table to write first as the CSV header.
    pub header_row: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            pages: None,
            header_row: None,
        }
    }
}

/// Progress notifications emitted while extracting.
///
/// Page and table numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractEvent {
    /// Scanning is about to begin.
    Started {
        total_pages: usize,
        pages_to_scan: usize,
    },
    /// A table was written to `file_name` inside the output directory.
    TableWritten {
        page: usize,
        table: usize,
        rows: usize,
        cols: usize,
        file_name: String,
    },
    /// A table had no content after cleaning; nothing was written.
    TableSkipped { page: usize, table: usize },
}

/// File name for table `table` on page `page` (both 1-based).
pub fn output_file_name(base_name: &str, page: usize, table: usize) -> String {
    format!("{base_name}_page{page}_table{table}.csv")
}

/// The input's file name without its extension, used to prefix output files.
pub fn document_base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Extract every non-empty table from `source` into its own CSV file.
///
/// Pages are visited in the order given by `options.pages` (or all pages in
/// order); indices at or past the page count are ignored. Returns the number
/// of files written.
pub fn extract_tables<S, F>(
    source: &S,
    base_name: &str,
    options: &ExtractOptions,
    mut on_event: F,
) -> Result<usize, ExtractError>
where
    S: TableSource + ?Sized,
    F: FnMut(&ExtractEvent),
{
    fs::create_dir_all(&options.output_dir)?;

    let total_pages = source.page_count();
    let page_indices: Vec<usize> = match &options.pages {
        Some(pages) => pages.clone(),
        None => (0..total_pages).collect(),
    };

    on_event(&ExtractEvent::Started {
        total_pages,
        pages_to_scan: page_indices.len(),
    });

    let mut written = 0;
    for page_idx in page_indices {
        if page_idx >= total_pages {
            continue;
        }
        let page = page_idx + 1;

        let tables = source.extract_tables(page_idx)?;
        if tables.is_empty() {
            tracing::debug!(page, "no tables detected");
            continue;
        }

        for (t_idx, raw) in tables.iter().enumerate() {
            let table = t_idx + 1;

            let cleaned = clean_table(raw);
            if cleaned.is_empty() {
                tracing::info!(page, table, "table empty after cleaning, skipped");
                on_event(&ExtractEvent::TableSkipped { page, table });
                continue;
            }

            let normalized = normalize_column_count(cleaned);
            let file_name = output_file_name(base_name, page, table);
            let path = options.output_dir.join(&file_name);

            write_csv(&normalized, &path, options.header_row)?;
            written += 1;
            tracing::debug!(page, table, path = %path.display(), "wrote table");

            on_event(&ExtractEvent::TableWritten {
                page,
                table,
                rows: normalized.len(),
                cols: normalized.first().map_or(0, Vec::len),
                file_name,
            });
        }
    }

    Ok(written)
}

/// Open the PDF at `path` and extract its tables with [`extract_tables`].
///
/// Output files are prefixed with the input's file stem. Fails fast with
/// [`ExtractError::FileNotFound`] if `path` is not an existing regular file.
pub fn extract_pdf<F>(
    path: &Path,
    options: &ExtractOptions,
    on_event: F,
) -> Result<usize, ExtractError>
where
    F: FnMut(&ExtractEvent),
{
    let document = PdfDocument::open(path)?;
    extract_tables(&document, &document_base_name(path), options, on_event)
}
