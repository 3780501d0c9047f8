//! Common types used throughout pagekit
//!
//! Shared enums, cursor pairs, and filter values used by the request builder,
//! the page normalizer, the location codec, and the controller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Opaque cursor token handed out by a data source
pub type CursorToken = String;

/// Active filter set, ordered by key so query strings are stable
pub type Filters = BTreeMap<String, FilterValue>;

// ============================================================================
// Direction
// ============================================================================

/// Direction of a page turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Which end of the next slice the request cursor marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorType {
    #[default]
    Start,
    End,
}

// ============================================================================
// Pagination Mode
// ============================================================================

/// How a list is paged in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaginationMode {
    /// Numeric pager with prev/next buttons
    #[default]
    Pager,
    /// Single "load more" button that appends items
    LoadMore,
}

impl PaginationMode {
    /// Check if this is load-more mode
    pub fn is_load_more(self) -> bool {
        matches!(self, Self::LoadMore)
    }
}

// ============================================================================
// Cursors
// ============================================================================

/// Leading and trailing cursors of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    /// Cursor of the first item on the page
    pub start: Option<CursorToken>,
    /// Cursor of the last item on the page
    pub end: Option<CursorToken>,
}

impl Cursors {
    /// Create a cursor pair
    pub fn new(start: Option<CursorToken>, end: Option<CursorToken>) -> Self {
        Self { start, end }
    }

    /// Create a cursor pair with both ends set
    pub fn between(start: impl Into<CursorToken>, end: impl Into<CursorToken>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Check if neither end is set
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

// ============================================================================
// Filter Values
// ============================================================================

/// Scalar filter value carried in the location query
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

impl FilterValue {
    /// Interpret a typed-in value, such as a `key=value` CLI argument
    ///
    /// Only canonical integers become `Int`, so `"007"` stays text and
    /// re-encodes to the same characters. Location decoding never infers
    /// and always yields `Text`.
    pub fn infer(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => Self::Int(n),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Get the value as a string slice, if it is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Build a filter set from key/value pairs
pub fn filters<K, V, I>(pairs: I) -> Filters
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FilterValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
