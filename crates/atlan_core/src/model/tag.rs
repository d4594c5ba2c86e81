//! Atlan tag name normalization.
//!
//! Tag names are case-sensitive display names on the server, so only
//! surrounding whitespace is trimmed.

use std::collections::BTreeSet;

/// Normalizes one tag name; `None` for blank input.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalizes and de-duplicates tag names, dropping blanks.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> BTreeSet<String> {
    tags.iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()))
        .collect()
}
