//! Cell value cleanup applied before export.

use lazy_regex::{regex_find, regex_replace_all};

/// Normalizes a cell value in-place: thousands-separator commas are removed,
/// surrounding whitespace is stripped, and interior whitespace runs collapse
/// to a single space. Idempotent; empty values stay empty.
pub fn sanitize_cell(value: &mut String) {
    if value.contains(',') {
        value.retain(|c| c != ',');
    }
    clean_text(value);
}

/// Cleans leading, trailing, and redundant sequences of whitespace within the
/// string, in-place.
pub fn clean_text(s: &mut String) {
    let trimmed = s.trim();
    // Skip the copy/realloc if nothing to do.
    if trimmed.len() != s.len() || regex_find!(r"\s{2,}", trimmed).is_some() {
        let new = regex_replace_all!(r"\s{2,}", trimmed, " ");
        *s = new.to_string();
    }
}
