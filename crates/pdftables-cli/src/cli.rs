use std::path::PathBuf;

use clap::Parser;

/// Extract tables from a PDF and save each as a CSV file.
#[derive(Debug, Parser)]
#[command(name = "pdftables", about, version)]
pub struct Cli {
    /// Path to the input PDF file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output directory for CSV files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Page range to extract (e.g. '1-3' or '1,3,5'), 1-indexed. Default: all pages
    #[arg(short, long)]
    pub pages: Option<String>,

    /// 0-based row index within each table to write as the CSV header
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub header_row: Option<i64>,

    /// Log extraction details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The header row as a table index. Negative values select no header,
    /// like any other index outside the table.
    pub fn header_row_index(&self) -> Option<usize> {
        self.header_row.and_then(|row| usize::try_from(row).ok())
    }
}
