//! Cell cleaning and column normalization for detected tables.

/// A table as returned by the detector: rows of nullable cell text.
///
/// Row lengths may differ.
pub type RawTable = Vec<Vec<Option<String>>>;

/// A cleaned table: rows of non-null cell text.
pub type Table = Vec<Vec<String>>;

/// Clean a single cell value.
///
/// `None` becomes an empty string. Text is trimmed and every internal run of
/// whitespace (including line breaks from wrapped cell text) is collapsed to
/// a single space.
pub fn clean_cell(value: Option<&str>) -> String {
    match value {
        Some(text) => text.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}

/// Clean every cell of a table and drop rows whose cells are all empty.
///
/// The relative order of the remaining rows is preserved.
pub fn clean_table(table: &[Vec<Option<String>>]) -> Table {
    table
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| clean_cell(cell.as_deref()))
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect()
}

/// Pad shorter rows on the right with empty cells so every row matches the
/// widest one.
pub fn normalize_column_count(mut table: Table) -> Table {
    let col_count = table.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut table {
        row.resize(col_count, String::new());
    }
    table
}
