use std::path::Path;

use pdftables::{
    ExtractError, ExtractEvent, ExtractOptions, PdfDocument, TableSource, document_base_name,
    extract_tables, parse_page_range,
};

pub fn run(
    file: &Path,
    output: &Path,
    pages: Option<&str>,
    header_row: Option<usize>,
) -> Result<(), i32> {
    let document = open_document(file)?;
    let pages = resolve_pages(pages, document.page_count())?;

    let options = ExtractOptions {
        output_dir: output.to_path_buf(),
        pages,
        header_row,
    };

    println!("Processing: {}", file.display());
    let count = extract_tables(&document, &document_base_name(file), &options, print_event)
        .map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;

    println!();
    if count == 0 {
        println!("No tables found in the specified pages.");
        println!("Tip: If this is a scanned PDF, you need OCR preprocessing first.");
    } else {
        println!("Done. Extracted {count} table(s).");
    }

    Ok(())
}

/// Open a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or cannot be parsed as a valid PDF.
fn open_document(file: &Path) -> Result<PdfDocument, i32> {
    PdfDocument::open(file).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

/// Resolve an optional page range string into 0-indexed page indices.
///
/// `None` means every page. A range that selects nothing is a usage error.
fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Option<Vec<usize>>, i32> {
    let Some(range) = pages else {
        return Ok(None);
    };

    let indices = parse_page_range(range, page_count);
    if indices.is_empty() {
        eprintln!("Error: {}", ExtractError::NoPagesSelected);
        return Err(1);
    }
    Ok(Some(indices))
}

fn print_event(event: &ExtractEvent) {
    match event {
        ExtractEvent::Started {
            total_pages,
            pages_to_scan,
        } => {
            println!("Total pages in PDF: {total_pages}");
            println!("Pages to scan: {pages_to_scan}");
            println!();
        }
        ExtractEvent::TableSkipped { page, table } => {
            println!("  Page {page}, table {table}: empty after cleaning, skipped");
        }
        ExtractEvent::TableWritten {
            page,
            table,
            rows,
            cols,
            file_name,
        } => {
            println!("  Page {page}, table {table}: {rows} rows x {cols} cols -> {file_name}");
        }
    }
}
