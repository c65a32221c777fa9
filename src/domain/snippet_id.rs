//! Type-safe snippet identifier.
//!
//! [`SnippetId`] is a newtype wrapper around the `BIGSERIAL` key assigned by
//! the store, so that snippet identifiers cannot be confused with other
//! integers (day counts, limits, status codes).

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a snippet.
///
/// Assigned by the store at creation time, monotonically increasing and
/// never reused. Ordering by `SnippetId` is ordering by creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct SnippetId(i64);

impl SnippetId {
    /// Wraps a raw identifier as produced by the backing store.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Parses a caller-supplied identifier.
    ///
    /// Returns `None` unless `input` is a base-10 integer of at least 1.
    /// Surrounding whitespace and a leading `+` are rejected along with
    /// everything else that is not a plain positive number.
    #[must_use]
    pub fn parse_positive(input: &str) -> Option<Self> {
        if input.starts_with('+') {
            return None;
        }
        match input.parse::<i64>() {
            Ok(raw) if raw >= 1 => Some(Self(raw)),
            _ => None,
        }
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SnippetId> for i64 {
    fn from(id: SnippetId) -> Self {
        id.0
    }
}
