//! Error types for the serp-rank crate.
//!
//! Ranking itself never fails. These errors cover configuration, engine
//! name parsing, and decoding of candidate records.

/// Errors that can occur around ranking operations.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    /// Invalid ranking configuration.
    #[error("config error: {0}")]
    Config(String),

    /// An engine identifier that is not in the registry.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// Candidate records could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for RankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Convenience type alias for serp-rank results.
pub type Result<T> = std::result::Result<T, RankError>;
