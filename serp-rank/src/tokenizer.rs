//! Query term extraction.
//!
//! A query is lower-cased and split on runs of non-word characters. Word
//! characters are Unicode alphanumerics plus `_`. Tokens shorter than the
//! minimum length are dropped and duplicates collapse.

use std::collections::BTreeSet;

/// Default minimum token length, in characters.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// Normalised, deduplicated query terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: BTreeSet<String>,
}

impl TermSet {
    /// Returns `true` if no term survived extraction.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if `term` is in the set.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Iterate over the terms in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Returns `true` if any term occurs as a substring of the lower-cased
    /// `text`. Partial words count: `"cat"` hits `"Category"`.
    pub fn hits(&self, text: &str) -> bool {
        if self.terms.is_empty() || text.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.terms.iter().any(|term| lower.contains(term.as_str()))
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Extract the term set for `query`, keeping tokens of at least
/// `min_length` characters.
pub fn extract_terms(query: &str, min_length: usize) -> TermSet {
    let lower = query.to_lowercase();
    let terms = lower
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty() && token.chars().count() >= min_length)
        .map(str::to_owned)
        .collect();
    TermSet { terms }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
