//! Title-based exclusion of taxonomy pages.
//!
//! The Wikipedia engine leaks Wikimedia category pages such as
//! `"Category:Python (programming language) - Wikimedia Commons"` into text
//! results. Any record whose title carries both markers is dropped before
//! ranking. The match is case-sensitive and ignores the query.

/// Substrings that must all appear in a title for it to be excluded.
pub const WIKIMEDIA_CATEGORY_MARKERS: [&str; 2] = ["Category:", "Wikimedia"];

/// Returns `true` if a record with this title must not be emitted.
pub fn is_excluded(title: &str) -> bool {
    WIKIMEDIA_CATEGORY_MARKERS
        .iter()
        .all(|marker| title.contains(marker))
}
