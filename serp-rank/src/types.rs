//! Core types for candidate records, source priorities and engine
//! identification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::RankError;

/// Trust rank of the engine a record came from. Higher sorts first.
///
/// Stored in the numeric form it was read in so that records round-trip
/// through JSON unchanged; `3` and `3.0` compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    /// Integer priority, the usual form set by engine definitions.
    Int(i64),
    /// Fractional priority.
    Float(f64),
}

impl Priority {
    /// Priority assumed for records that carry none.
    pub const DEFAULT: Priority = Priority::Int(1);

    /// Numeric value used for grouping and ordering.
    pub fn value(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Total order over priority values. `-0.0` and `0.0` are equal.
    /// Two integers compare exactly, even beyond `f64` precision.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(&b),
            _ => normalized(self.value()).total_cmp(&normalized(other.value())),
        }
    }

    /// Read a priority from a JSON number; anything else is `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        value
            .as_i64()
            .map(Self::Int)
            .or_else(|| value.as_f64().map(Self::Float))
    }
}

fn normalized(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }
}

impl From<i64> for Priority {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Priority {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Priority {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Retrieval engines known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// Naver — Korean portal, most trusted source.
    Naver,
    /// Google.
    Google,
    /// Wikipedia text search.
    Wikipedia,
    /// Bing.
    Bing,
    /// Brave Search.
    Brave,
    /// DuckDuckGo.
    DuckDuckGo,
    /// Mojeek — independent index.
    Mojeek,
    /// Yahoo.
    Yahoo,
    /// Yandex.
    Yandex,
}

impl SearchEngine {
    /// Returns the identifier stamped into `engine_name`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naver => "naver",
            Self::Google => "google",
            Self::Wikipedia => "wikipedia",
            Self::Bing => "bing",
            Self::Brave => "brave",
            Self::DuckDuckGo => "duckduckgo",
            Self::Mojeek => "mojeek",
            Self::Yahoo => "yahoo",
            Self::Yandex => "yandex",
        }
    }

    /// Returns the built-in trust rank for results from this engine.
    pub fn priority(&self) -> Priority {
        match self {
            Self::Naver => Priority::Int(3),
            Self::Google | Self::Wikipedia => Priority::Int(2),
            _ => Priority::DEFAULT,
        }
    }

    /// Returns all available engine variants.
    pub fn all() -> &'static [SearchEngine] {
        &[
            Self::Naver,
            Self::Google,
            Self::Wikipedia,
            Self::Bing,
            Self::Brave,
            Self::DuckDuckGo,
            Self::Mojeek,
            Self::Yahoo,
            Self::Yandex,
        ]
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchEngine {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|engine| engine.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RankError::UnknownEngine(wanted.to_string()))
    }
}

/// Alternate keys a priority may arrive under, in lookup order.
const PRIORITY_ALIASES: [&str; 2] = ["sourcePriority", "source_priority"];

/// A single retrieved search result, prior to ranking.
///
/// Every field is optional on the wire. Fields the ranker does not know
/// about are kept in [`CandidateRecord::extra`] and written back as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Result title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Result URL or other identifying reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Snippet text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Used in place of `body` when that is missing or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier of the engine that produced this record.
    #[serde(default, rename = "engine_name", skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// Trust rank of the originating engine, as stamped by the engine
    /// layer. Records from other producers may instead carry
    /// `sourcePriority` or `source_priority`; those stay in `extra` under
    /// their own key and are read by [`CandidateRecord::explicit_priority`].
    #[serde(
        default,
        rename = "engine_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_priority: Option<Priority>,
    /// Opaque pass-through fields, including alternate priority keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateRecord {
    /// Create a record with a title, href and body.
    pub fn new(
        title: impl Into<String>,
        href: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            href: Some(href.into()),
            body: Some(body.into()),
            ..Default::default()
        }
    }

    /// Set the source priority.
    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.source_priority = Some(priority.into());
        self
    }

    /// Set the description used when the body is empty.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the originating engine identifier.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Attach an opaque field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Title, or `""` when absent.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Href, or `""` when absent.
    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or("")
    }

    /// The text matched against query terms: `body` when non-empty,
    /// otherwise `description`, otherwise `""`.
    pub fn body_text(&self) -> &str {
        match self.body.as_deref() {
            Some(body) if !body.is_empty() => body,
            _ => self.description.as_deref().unwrap_or(""),
        }
    }

    /// The priority this record carries, if any: `engine_priority`, then
    /// `sourcePriority`, then `source_priority`. Null or non-numeric values
    /// are skipped.
    pub fn explicit_priority(&self) -> Option<Priority> {
        self.source_priority.or_else(|| {
            PRIORITY_ALIASES
                .iter()
                .filter_map(|key| self.extra.get(*key))
                .find_map(Priority::from_json)
        })
    }

    /// Source priority, defaulting to [`Priority::DEFAULT`].
    pub fn priority(&self) -> Priority {
        self.explicit_priority().unwrap_or_default()
    }
}

/// Decode a JSON array of candidate records.
///
/// # Errors
///
/// Returns [`crate::RankError::Parse`] if the input is not a JSON array of
/// objects with string/number fields where the record model expects them.
pub fn parse_candidates(json: &str) -> crate::Result<Vec<CandidateRecord>> {
    Ok(serde_json::from_str(json)?)
}
