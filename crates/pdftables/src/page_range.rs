use std::collections::BTreeSet;
use std::num::IntErrorKind;

/// Parse a page range string like "1,3-5" into a sorted list of 0-indexed page numbers.
///
/// Input is 1-indexed (user-facing). Output is 0-indexed (internal).
/// Ranges are clamped to `1..=page_count`; single pages outside that window are
/// dropped. Returns an empty list for empty input or any malformed segment,
/// which callers treat as a usage error.
pub fn parse_page_range(input: &str, page_count: usize) -> Vec<usize> {
    let mut pages = BTreeSet::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some((start_str, end_str)) = part.split_once('-') {
            let (Some(start), Some(end)) = (parse_page(start_str), parse_page(end_str)) else {
                return Vec::new();
            };

            let start = start.max(1);
            let end = end.min(page_count);
            if start <= end {
                pages.extend(start - 1..end);
            }
        } else {
            let Some(page) = parse_page(part) else {
                return Vec::new();
            };

            if (1..=page_count).contains(&page) {
                pages.insert(page - 1);
            }
        }
    }

    pages.into_iter().collect()
}

/// Parse one page number. Numbers too large for `usize` saturate so they
/// clamp like any other out-of-range page.
fn parse_page(text: &str) -> Option<usize> {
    match text.trim().parse::<usize>() {
        Ok(page) => Some(page),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(usize::MAX),
        Err(_) => None,
    }
}
