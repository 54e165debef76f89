//! Relevance buckets within one priority tier.

use crate::tokenizer::TermSet;
use serde::Serialize;
use std::fmt;

/// Where the query terms matched a candidate.
///
/// Variants are declared in emission order: within a tier every `Both`
/// record precedes every `TitleOnly` record, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// A term hit the title and a term hit the body.
    Both,
    /// A term hit the title only.
    TitleOnly,
    /// A term hit the body only.
    BodyOnly,
    /// No term hit either field.
    Neither,
}

impl Bucket {
    /// Number of buckets.
    pub const COUNT: usize = 4;

    /// All buckets in emission order.
    pub fn all() -> &'static [Bucket; Self::COUNT] {
        &[Self::Both, Self::TitleOnly, Self::BodyOnly, Self::Neither]
    }

    /// Classify a candidate from its title and effective body text.
    pub fn classify(terms: &TermSet, title: &str, body: &str) -> Self {
        match (terms.hits(title), terms.hits(body)) {
            (true, true) => Self::Both,
            (true, false) => Self::TitleOnly,
            (false, true) => Self::BodyOnly,
            (false, false) => Self::Neither,
        }
    }

    /// Position of this bucket in emission order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short name used in logs and explanations.
    pub fn name(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::TitleOnly => "title_only",
            Self::BodyOnly => "body_only",
            Self::Neither => "neither",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
