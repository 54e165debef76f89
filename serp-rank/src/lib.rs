//! # serp-rank
//!
//! Deterministic ordering for search results merged from several engines.
//!
//! Each engine carries a trust rank (its priority). Results are ordered
//! highest priority first; within one priority, results whose title and
//! snippet both contain a query term come first, then title-only hits,
//! then snippet-only hits, then the rest. Ties keep their input order.
//!
//! ## Design
//!
//! - Pure and synchronous: no I/O, no shared state, no caching
//! - Query terms are matched as case-insensitive substrings
//! - Wikimedia category pages are dropped before ranking
//! - Unknown record fields pass through untouched
//!
//! The retrieval side assigns priorities through [`PriorityTable`] and
//! cleans per-engine junk through [`EnginePostProcess`]; the ranker only
//! reads the resulting numbers.

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod priority;
pub mod ranker;
pub mod tokenizer;
pub mod types;

pub use config::RankConfig;
pub use engine::EnginePostProcess;
pub use error::{RankError, Result};
pub use priority::PriorityTable;
pub use ranker::{rank, Bucket, Rankable, Ranked, Ranking, TieredRanker};
pub use tokenizer::{extract_terms, TermSet, DEFAULT_MIN_TOKEN_LENGTH};
pub use types::{parse_candidates, CandidateRecord, Priority, SearchEngine};

/// Rank `candidates` for `query` using `config`.
///
/// # Errors
///
/// Returns [`RankError::Config`] if `config` is invalid. Ranking itself
/// never fails.
///
/// # Examples
///
/// ```
/// let config = serp_rank::RankConfig::default();
/// let results = vec![serp_rank::CandidateRecord::new("Rust", "https://a.example", "")];
/// let ranked = serp_rank::rank_with(results, "rust", &config)?;
/// assert_eq!(ranked.len(), 1);
/// # Ok::<(), serp_rank::RankError>(())
/// ```
pub fn rank_with(
    candidates: Vec<CandidateRecord>,
    query: &str,
    config: &RankConfig,
) -> Result<Vec<CandidateRecord>> {
    config.validate()?;
    Ok(config.ranker().rank(candidates, query))
}
