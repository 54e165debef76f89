//! Error types for the serp host.

/// Top-level error type for loading, ranking and writing results.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration file could not be parsed or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Candidate records could not be read or written as JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// Error from the ranking core.
    #[error(transparent)]
    Rank(#[from] serp_rank::RankError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
