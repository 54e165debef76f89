use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::tokenizer::{extract_terms, TermSet, DEFAULT_MIN_TOKEN_LENGTH};
use crate::types::Priority;

use super::bucket::Bucket;
use super::exclusion::is_excluded;
use super::Rankable;

/// Stateless tiered ranker.
///
/// Holds only the minimum query token length, so rankers with different
/// settings can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieredRanker {
    min_token_length: usize,
}

impl Default for TieredRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_LENGTH)
    }
}

impl TieredRanker {
    /// Create a ranker that ignores query tokens shorter than
    /// `min_token_length` characters. `0` behaves like `1`.
    pub fn new(min_token_length: usize) -> Self {
        Self { min_token_length }
    }

    /// Minimum query token length in characters.
    pub fn min_token_length(&self) -> usize {
        self.min_token_length
    }

    /// Terms this ranker would match for `query`.
    pub fn terms(&self, query: &str) -> TermSet {
        extract_terms(query, self.min_token_length)
    }

    /// Order `candidates` for `query`.
    ///
    /// Returns the surviving candidates, highest priority tier first,
    /// `Both`/`TitleOnly`/`BodyOnly`/`Neither` within each tier, input
    /// order within each bucket. Never fails.
    pub fn rank<T, I>(&self, candidates: I, query: &str) -> Vec<T>
    where
        T: Rankable,
        I: IntoIterator<Item = T>,
    {
        self.rank_explained(candidates, query).into_records()
    }

    /// Like [`TieredRanker::rank`], also reporting each record's tier and
    /// bucket and how many candidates were excluded.
    pub fn rank_explained<T, I>(&self, candidates: I, query: &str) -> Ranking<T>
    where
        T: Rankable,
        I: IntoIterator<Item = T>,
    {
        let terms = self.terms(query);
        tracing::trace!(query, terms = terms.len(), "ranking candidates");

        let mut groups: BTreeMap<TierKey, PriorityGroup<T>> = BTreeMap::new();
        let mut excluded = 0usize;

        for candidate in candidates {
            if is_excluded(candidate.title()) {
                excluded += 1;
                continue;
            }
            let priority = candidate.priority();
            let bucket = Bucket::classify(&terms, candidate.title(), candidate.body_text());
            groups
                .entry(TierKey(priority))
                .or_default()
                .push(Ranked {
                    record: candidate,
                    priority,
                    bucket,
                });
        }

        let tiers = groups.len();
        let entries: Vec<Ranked<T>> = groups
            .into_values()
            .rev()
            .flat_map(PriorityGroup::into_entries)
            .collect();

        tracing::debug!(
            ranked = entries.len(),
            excluded,
            tiers,
            "ranked candidates"
        );

        Ranking { entries, excluded }
    }

    /// Bucket `candidate` would land in for `query`, or `None` if it is
    /// excluded.
    pub fn classify<T: Rankable>(&self, candidate: &T, query: &str) -> Option<Bucket> {
        if is_excluded(candidate.title()) {
            return None;
        }
        let terms = self.terms(query);
        Some(Bucket::classify(
            &terms,
            candidate.title(),
            candidate.body_text(),
        ))
    }
}

/// Rank with the default minimum token length.
///
/// # Examples
///
/// ```
/// use serp_rank::CandidateRecord;
///
/// let results = vec![
///     CandidateRecord::new("Other", "https://b.example", "nothing").with_priority(1),
///     CandidateRecord::new("Rust", "https://a.example", "rust book").with_priority(2),
/// ];
/// let ranked = serp_rank::rank(results, "rust");
/// assert_eq!(ranked[0].href(), "https://a.example");
/// ```
pub fn rank<T, I>(candidates: I, query: &str) -> Vec<T>
where
    T: Rankable,
    I: IntoIterator<Item = T>,
{
    TieredRanker::default().rank(candidates, query)
}

/// A ranked candidate with the tier and bucket it was placed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    /// The candidate, unchanged.
    pub record: T,
    /// Its source priority.
    pub priority: Priority,
    /// Its relevance bucket within the tier.
    pub bucket: Bucket,
}

/// Output of [`TieredRanker::rank_explained`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<T> {
    entries: Vec<Ranked<T>>,
    excluded: usize,
}

impl<T> Ranking<T> {
    /// Ranked entries in output order.
    pub fn entries(&self) -> &[Ranked<T>] {
        &self.entries
    }

    /// Number of candidates dropped by the exclusion rule.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing survived.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the explanations and keep the records.
    pub fn into_records(self) -> Vec<T> {
        self.entries.into_iter().map(|r| r.record).collect()
    }
}

impl<T> IntoIterator for Ranking<T> {
    type Item = Ranked<T>;
    type IntoIter = std::vec::IntoIter<Ranked<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Group key with exact numeric equality and a total order.
#[derive(Debug, Clone, Copy)]
struct TierKey(Priority);

impl PartialEq for TierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TierKey {}

impl PartialOrd for TierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// All candidates of one priority, split by bucket.
struct PriorityGroup<T> {
    buckets: [Vec<Ranked<T>>; Bucket::COUNT],
}

impl<T> Default for PriorityGroup<T> {
    fn default() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl<T> PriorityGroup<T> {
    fn push(&mut self, entry: Ranked<T>) {
        self.buckets[entry.bucket.index()].push(entry);
    }

    fn into_entries(self) -> impl Iterator<Item = Ranked<T>> {
        self.buckets.into_iter().flatten()
    }
}
