//! Ranking configuration with sensible defaults.
//!
//! [`RankConfig`] holds the one ranking knob (minimum query token length)
//! and the engine priority overrides used when stamping records.

use std::collections::BTreeMap;

use crate::error::RankError;
use crate::priority::PriorityTable;
use crate::ranker::TieredRanker;
use crate::tokenizer::DEFAULT_MIN_TOKEN_LENGTH;
use crate::types::Priority;

/// Configuration for ranking.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    /// Query tokens shorter than this many characters are ignored.
    pub min_token_length: usize,
    /// Engine priorities that replace the built-in ones, keyed by engine
    /// identifier.
    pub priorities: BTreeMap<String, Priority>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            priorities: BTreeMap::new(),
        }
    }
}

impl RankConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `min_token_length` must be greater than 0
    /// - priority overrides must be finite and name an engine
    pub fn validate(&self) -> Result<(), RankError> {
        if self.min_token_length == 0 {
            return Err(RankError::Config(
                "min_token_length must be greater than 0".into(),
            ));
        }
        for (engine, priority) in &self.priorities {
            if engine.trim().is_empty() {
                return Err(RankError::Config(
                    "priority override needs an engine name".into(),
                ));
            }
            if !priority.value().is_finite() {
                return Err(RankError::Config(format!(
                    "priority for {engine} must be finite"
                )));
            }
        }
        Ok(())
    }

    /// The ranker described by this configuration.
    pub fn ranker(&self) -> TieredRanker {
        TieredRanker::new(self.min_token_length)
    }

    /// Built-in engine priorities with this configuration's overrides applied.
    pub fn priority_table(&self) -> PriorityTable {
        self.priorities
            .iter()
            .fold(PriorityTable::default(), |table, (engine, priority)| {
                table.with(engine, *priority)
            })
    }
}
