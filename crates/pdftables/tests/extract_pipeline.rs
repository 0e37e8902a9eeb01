//! End-to-end tests of the extraction pipeline over an in-memory document.

use std::fs;
use std::path::Path;

use pdftables::{ExtractError, ExtractEvent, ExtractOptions, RawTable, TableSource, extract_tables};

/// A document whose pages hold fixed raw tables.
struct FakeDocument {
    pages: Vec<Vec<RawTable>>,
}

impl TableSource for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract_tables(&self, page_index: usize) -> Result<Vec<RawTable>, ExtractError> {
        Ok(self.pages[page_index].clone())
    }
}

/// A document whose pages fail to load.
struct BrokenDocument;

impl TableSource for BrokenDocument {
    fn page_count(&self) -> usize {
        2
    }

    fn extract_tables(&self, page_index: usize) -> Result<Vec<RawTable>, ExtractError> {
        Err(ExtractError::Page {
            page: page_index + 1,
            detail: "truncated content stream".to_string(),
        })
    }
}

fn raw(rows: &[&[Option<&str>]]) -> RawTable {
    rows.iter()
        .map(|row| row.iter().map(|c| c.map(str::to_string)).collect())
        .collect()
}

fn options_for(dir: &Path) -> ExtractOptions {
    ExtractOptions {
        output_dir: dir.to_path_buf(),
        ..ExtractOptions::default()
    }
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn csv_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".csv"))
        .collect();
    names.sort();
    names
}

#[test]
fn two_page_document_with_one_table() {
    let dir = tempfile::tempdir().unwrap();
    let doc = FakeDocument {
        pages: vec![
            vec![raw(&[
                &[Some("Item"), Some("Price")],
                &[Some("Pen"), Some("1.50")],
                &[Some("Book"), Some("9.90")],
            ])],
            vec![],
        ],
    };

    let count = extract_tables(&doc, "doc", &options_for(dir.path()), |_| {}).unwrap();

    assert_eq!(count, 1);
    assert_eq!(csv_files(dir.path()), vec!["doc_page1_table1.csv"]);
    assert_eq!(
        read_rows(&dir.path().join("doc_page1_table1.csv")),
        vec![
            vec!["Item", "Price"],
            vec!["Pen", "1.50"],
            vec!["Book", "9.90"],
        ]
    );
}

#[test]
fn blank_table_writes_nothing_and_keeps_count() {
    let dir = tempfile::tempdir().unwrap();
    let doc = FakeDocument {
        pages: vec![vec![
            raw(&[&[None, Some("   ")], &[Some("\n\t"), None]]),
            raw(&[&[Some("only")]]),
        ]],
    };

    let mut skipped = Vec::new();
    let count = extract_tables(&doc, "doc", &options_for(dir.path()), |event| {
        if let ExtractEvent::TableSkipped { page, table } = event {
            skipped.push((*page, *table));
        }
    })
    .unwrap();

    assert_eq!(count, 1);
    assert_eq!(skipped, vec![(1, 1)]);
    assert_eq!(csv_files(dir.path()), vec!["doc_page1_table2.csv"]);
}

#[test]
fn cleans_and_pads_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let doc = FakeDocument {
        pages: vec![vec![raw(&[
            &[Some("Region"), Some("Q1\nsales"), Some("Notes")],
            &[None, None, None],
            &[Some("  North "), Some("1,200")],
            &[Some("South")],
        ])]],
    };

    extract_tables(&doc, "sales", &options_for(dir.path()), |_| {}).unwrap();

    let path = dir.path().join("sales_page1_table1.csv");
    assert_eq!(
        read_rows(&path),
        vec![
            vec!["Region", "Q1 sales", "Notes"],
            vec!["North", "1,200", ""],
            vec!["South", "", ""],
        ]
    );
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("North,\"1,200\","), "unexpected CSV: {text:?}");
}

#[test]
fn header_row_applies_to_every_table() {
    let dir = tempfile::tempdir().unwrap();
    let doc = FakeDocument {
        pages: vec![vec![
            raw(&[&[Some("a"), Some("b")], &[Some("H1"), Some("H2")], &[Some("c"), Some("d")]]),
            raw(&[&[Some("only row")]]),
        ]],
    };
    let options = ExtractOptions {
        header_row: Some(1),
        ..options_for(dir.path())
    };

    extract_tables(&doc, "doc", &options, |_| {}).unwrap();

    assert_eq!(
        read_rows(&dir.path().join("doc_page1_table1.csv")),
        vec![vec!["H1", "H2"], vec!["a", "b"], vec!["c", "d"]]
    );
    // Index 1 is out of range for a one-row table and is ignored.
    assert_eq!(
        read_rows(&dir.path().join("doc_page1_table2.csv")),
        vec![vec!["only row"]]
    );
}

#[test]
fn selected_pages_only() {
    let dir = tempfile::tempdir().unwrap();
    let table = raw(&[&[Some("x")]]);
    let doc = FakeDocument {
        pages: vec![vec![table.clone()], vec![table.clone()], vec![table]],
    };
    let options = ExtractOptions {
        pages: Some(vec![0, 2]),
        ..options_for(dir.path())
    };

    let mut started = None;
    let count = extract_tables(&doc, "doc", &options, |event| {
        if let ExtractEvent::Started {
            total_pages,
            pages_to_scan,
        } = event
        {
            started = Some((*total_pages, *pages_to_scan));
        }
    })
    .unwrap();

    assert_eq!(count, 2);
    assert_eq!(started, Some((3, 2)));
    assert_eq!(
        csv_files(dir.path()),
        vec!["doc_page1_table1.csv", "doc_page3_table1.csv"]
    );
}

#[test]
fn creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results").join("tables");
    let doc = FakeDocument {
        pages: vec![vec![raw(&[&[Some("x")]])]],
    };

    extract_tables(&doc, "doc", &options_for(&out), |_| {}).unwrap();

    assert!(out.join("doc_page1_table1.csv").is_file());
}

#[test]
fn document_without_tables_returns_zero() {
    let dir = tempfile::tempdir().unwrap();
    let doc = FakeDocument {
        pages: vec![vec![], vec![]],
    };

    let count = extract_tables(&doc, "doc", &options_for(dir.path()), |_| {}).unwrap();

    assert_eq!(count, 0);
    assert!(csv_files(dir.path()).is_empty());
}

#[test]
fn page_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();

    let err = extract_tables(&BrokenDocument, "doc", &options_for(dir.path()), |_| {}).unwrap_err();

    assert!(matches!(err, ExtractError::Page { page: 1, .. }));
}
