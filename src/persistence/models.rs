//! Row shape of the `snippets` table.

use chrono::{DateTime, Utc};

use crate::domain::{Snippet, SnippetId};

/// Column list shared by every `SELECT` against `snippets`.
pub(crate) const SNIPPET_COLUMNS: &str = "id, title, content, created, expires";

/// A raw `snippets` row as decoded by `sqlx`, in [`SNIPPET_COLUMNS`] order.
pub(crate) type SnippetRow = (i64, String, String, DateTime<Utc>, DateTime<Utc>);

/// Converts a decoded row into a domain snapshot.
pub(crate) fn snippet_from_row(
    (id, title, content, created_at, expires_at): SnippetRow,
) -> Snippet {
    Snippet {
        id: SnippetId::new(id),
        title,
        content,
        created_at,
        expires_at,
    }
}
