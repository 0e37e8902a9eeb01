//! pdftables: extract the tables of a PDF document into CSV files.
//!
//! Table detection is delegated to pdfplumber. This crate cleans each
//! detected table, pads its rows to a common width, and writes it to
//! `{basename}_page{N}_table{M}.csv`.
//!
//! # Pipeline
//!
//! - [`parse_page_range`]: 1-indexed range expression to 0-indexed pages
//! - [`TableSource`]: raw tables per page ([`PdfDocument`] in production)
//! - [`clean_table`] and [`normalize_column_count`]: cell and row cleanup
//! - [`write_csv`]: one table per file, optionally promoting a header row
//!
//! [`extract_tables`] runs the pipeline over any [`TableSource`];
//! [`extract_pdf`] opens a file and does the same.

mod csv_out;
mod error;
mod extract;
mod page_range;
mod source;
mod table;

pub use csv_out::write_csv;
pub use error::ExtractError;
pub use extract::{
    ExtractEvent, ExtractOptions, document_base_name, extract_pdf, extract_tables,
    output_file_name,
};
pub use page_range::parse_page_range;
pub use source::{PdfDocument, TableSource};
pub use table::{RawTable, Table, clean_cell, clean_table, normalize_column_count};
