//! Trait definition for per-engine result cleanup.
//!
//! Each engine's raw results can carry engine-specific junk (ads, links
//! back into the engine's own search pages, ragged whitespace). Engines
//! implement [`EnginePostProcess`] to strip it before results reach the
//! ranker, which only applies the generic Wikimedia category exclusion.

use crate::types::{CandidateRecord, Priority, SearchEngine};

/// Cleanup hook run on one engine's results before ranking.
///
/// All implementations must be `Send + Sync` so results from several
/// engines can be processed concurrently by the caller.
pub trait EnginePostProcess: Send + Sync {
    /// Returns which [`SearchEngine`] variant this implementation represents.
    fn engine_type(&self) -> SearchEngine;

    /// Returns the trust rank for this engine's results.
    ///
    /// Typically delegates to [`SearchEngine::priority()`].
    fn priority(&self) -> Priority {
        self.engine_type().priority()
    }

    /// Filter and normalise extracted results. The default keeps
    /// everything unchanged.
    fn post_extract(&self, results: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
        results
    }
}
