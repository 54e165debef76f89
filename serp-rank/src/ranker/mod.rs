//! Tiered ranking: priority tiers first, then relevance buckets.
//!
//! Candidates are grouped by source priority (highest first). Inside a
//! tier they are split into [`Bucket`]s by where query terms matched and
//! emitted `Both`, `TitleOnly`, `BodyOnly`, `Neither`, each bucket keeping
//! input order. Wikimedia category pages are dropped up front.

pub mod bucket;
pub mod exclusion;
mod tiered;

pub use bucket::Bucket;
pub use exclusion::is_excluded;
pub use tiered::{rank, Ranked, Ranking, TieredRanker};

use crate::types::{CandidateRecord, Priority};

/// The view of a candidate the ranker needs.
///
/// Implemented for [`CandidateRecord`] and for references to any
/// implementor, so both owned records and borrowed slices can be ranked.
pub trait Rankable {
    /// Title text; `""` when absent.
    fn title(&self) -> &str;

    /// Text matched against query terms alongside the title.
    fn body_text(&self) -> &str;

    /// Trust rank of the originating engine.
    fn priority(&self) -> Priority;
}

impl Rankable for CandidateRecord {
    fn title(&self) -> &str {
        CandidateRecord::title(self)
    }

    fn body_text(&self) -> &str {
        CandidateRecord::body_text(self)
    }

    fn priority(&self) -> Priority {
        CandidateRecord::priority(self)
    }
}

impl<T: Rankable + ?Sized> Rankable for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn body_text(&self) -> &str {
        (**self).body_text()
    }

    fn priority(&self) -> Priority {
        (**self).priority()
    }
}
