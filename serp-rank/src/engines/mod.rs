//! Engine implementations of [`crate::engine::EnginePostProcess`].
//!
//! Only engines with engine-specific junk to strip get their own module;
//! every other engine goes through [`GenericEngine`], which keeps its
//! results as they are.

pub mod naver;

pub use naver::NaverEngine;

use crate::engine::EnginePostProcess;
use crate::types::{CandidateRecord, SearchEngine};

/// Post-processing for engines with no cleanup rules of their own.
pub struct GenericEngine(pub SearchEngine);

impl EnginePostProcess for GenericEngine {
    fn engine_type(&self) -> SearchEngine {
        self.0
    }
}

/// Run `engine`'s cleanup over its extracted results.
pub fn post_process_for(engine: SearchEngine, results: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
    match engine {
        SearchEngine::Naver => NaverEngine.post_extract(results),
        other => GenericEngine(other).post_extract(results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    #[test]
    fn generic_engine_keeps_results() {
        let results = vec![CandidateRecord::new("", "", "  ragged   ")];
        let out = post_process_for(SearchEngine::Google, results.clone());
        assert_eq!(out, results);
    }

    #[test]
    fn naver_dispatch_applies_cleanup() {
        let results = vec![
            CandidateRecord::new("", "", ""),
            CandidateRecord::new("Kept", "https://example.com", "a  b"),
        ];
        let out = post_process_for(SearchEngine::Naver, results);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].body.as_deref(), Some("a b"));
    }

    #[test]
    fn generic_engine_priority_follows_registry() {
        assert_eq!(GenericEngine(SearchEngine::Wikipedia).priority(), Priority::Int(2));
        assert_eq!(GenericEngine(SearchEngine::Mojeek).priority(), Priority::DEFAULT);
    }
}
