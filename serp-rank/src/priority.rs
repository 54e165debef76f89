//! Engine → priority mapping applied at collection time.
//!
//! The ranker only reads the numeric `engine_priority` on each record. This
//! table is how the retrieval side decides that number: built-in engine
//! priorities from [`SearchEngine::priority`], overridable per engine name.

use std::collections::HashMap;

use crate::types::{CandidateRecord, Priority, SearchEngine};

/// Priorities keyed by engine identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityTable {
    priorities: HashMap<String, Priority>,
}

impl Default for PriorityTable {
    fn default() -> Self {
        let priorities = SearchEngine::all()
            .iter()
            .map(|engine| (engine.name().to_string(), engine.priority()))
            .collect();
        Self { priorities }
    }
}

impl PriorityTable {
    /// A table with no entries: every engine gets [`Priority::DEFAULT`].
    pub fn empty() -> Self {
        Self {
            priorities: HashMap::new(),
        }
    }

    /// Set the priority for `engine`, replacing any existing entry.
    /// Engine names are matched case-insensitively.
    pub fn set(&mut self, engine: &str, priority: impl Into<Priority>) {
        self.priorities
            .insert(engine.trim().to_ascii_lowercase(), priority.into());
    }

    /// Builder form of [`PriorityTable::set`].
    pub fn with(mut self, engine: &str, priority: impl Into<Priority>) -> Self {
        self.set(engine, priority);
        self
    }

    /// Priority for `engine`, or [`Priority::DEFAULT`] if it has no entry.
    pub fn priority_of(&self, engine: &str) -> Priority {
        self.priorities
            .get(&engine.trim().to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Mark every record as produced by `engine` and give it that engine's
    /// priority. Existing priorities are overwritten.
    pub fn stamp(&self, records: &mut [CandidateRecord], engine: &str) {
        let priority = self.priority_of(engine);
        tracing::trace!(engine, %priority, count = records.len(), "stamping engine priority");
        for record in records.iter_mut() {
            record.engine = Some(engine.to_string());
            record.source_priority = Some(priority);
        }
    }

    /// Fill in a missing priority from each record's `engine_name`.
    ///
    /// Records that already carry a priority, or that name no engine, are
    /// left untouched. Returns how many records were assigned.
    pub fn assign(&self, records: &mut [CandidateRecord]) -> usize {
        let mut assigned = 0;
        for record in records.iter_mut() {
            if record.explicit_priority().is_some() {
                continue;
            }
            if let Some(engine) = record.engine.as_deref() {
                record.source_priority = Some(self.priority_of(engine));
                assigned += 1;
            }
        }
        assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_uses_builtin_priorities() {
        let table = PriorityTable::default();
        assert_eq!(table.priority_of("naver"), Priority::Int(3));
        assert_eq!(table.priority_of("google"), Priority::Int(2));
        assert_eq!(table.priority_of("bing"), Priority::Int(1));
    }

    #[test]
    fn unknown_engine_defaults_to_one() {
        let table = PriorityTable::default();
        assert_eq!(table.priority_of("altavista"), Priority::DEFAULT);
        assert_eq!(PriorityTable::empty().priority_of("naver"), Priority::DEFAULT);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = PriorityTable::default().with("Mojeek", 5);
        assert_eq!(table.priority_of("NAVER"), Priority::Int(3));
        assert_eq!(table.priority_of("mojeek"), Priority::Int(5));
    }

    #[test]
    fn overrides_replace_builtin() {
        let table = PriorityTable::default().with("naver", 0.5);
        assert_eq!(table.priority_of("naver"), Priority::Float(0.5));
    }

    #[test]
    fn stamp_sets_engine_and_priority() {
        let table = PriorityTable::default();
        let mut records = vec![
            CandidateRecord::new("a", "https://a", ""),
            CandidateRecord::new("b", "https://b", "").with_priority(9),
        ];
        table.stamp(&mut records, "google");
        for record in &records {
            assert_eq!(record.engine.as_deref(), Some("google"));
            assert_eq!(record.priority(), Priority::Int(2));
        }
    }

    #[test]
    fn assign_only_fills_missing() {
        let table = PriorityTable::default();
        let mut records = vec![
            CandidateRecord::new("a", "https://a", "").with_engine("naver"),
            CandidateRecord::new("b", "https://b", "")
                .with_engine("naver")
                .with_priority(7),
            CandidateRecord::new("c", "https://c", ""),
        ];
        let assigned = table.assign(&mut records);
        assert_eq!(assigned, 1);
        assert_eq!(records[0].priority(), Priority::Int(3));
        assert_eq!(records[1].priority(), Priority::Int(7));
        assert!(records[2].source_priority.is_none());
    }

    #[test]
    fn assign_respects_alias_priority_keys() {
        let table = PriorityTable::default();
        let mut records = vec![CandidateRecord::new("a", "https://a", "")
            .with_engine("naver")
            .with_field("sourcePriority", 1)];
        assert_eq!(table.assign(&mut records), 0);
        assert!(records[0].source_priority.is_none());
        assert_eq!(records[0].priority(), Priority::Int(1));
    }
}
