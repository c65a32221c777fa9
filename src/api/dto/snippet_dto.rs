//! Snippet DTOs for the view, list, and create endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Snippet, SnippetId};

/// Maximum title length accepted by `POST /snippet/create`, in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// Longest lifetime accepted by `POST /snippet/create`, in days.
pub const MAX_EXPIRES_DAYS: i32 = 3650;

/// A single snippet as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SnippetDto {
    /// Snippet identifier.
    pub id: SnippetId,
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: DateTime<Utc>,
    /// Expiry timestamp (RFC 3339, UTC).
    pub expires_at: DateTime<Utc>,
}

impl From<Snippet> for SnippetDto {
    fn from(snippet: Snippet) -> Self {
        Self {
            id: snippet.id,
            title: snippet.title,
            content: snippet.content,
            created_at: snippet.created_at,
            expires_at: snippet.expires_at,
        }
    }
}

/// Response body for `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SnippetListResponse {
    /// Most recent visible snippets, newest first.
    pub data: Vec<SnippetDto>,
}

/// Query string for `GET /snippet/view`.
///
/// `id` is kept as raw text so that a malformed value is reported as
/// "not found" rather than as an extractor rejection.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ViewSnippetParams {
    /// Snippet identifier; must be a positive integer.
    #[param(value_type = Option<i64>, minimum = 1)]
    pub id: Option<String>,
}

/// Form body for `POST /snippet/create`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSnippetForm {
    /// Title, 1 to 100 characters.
    pub title: String,
    /// Body text, non-empty.
    pub content: String,
    /// Days until the snippet expires, 1 to 3650.
    pub expires: i32,
}

impl CreateSnippetForm {
    /// Checks the form before anything is stored.
    ///
    /// Returns `false` for a blank or over-long title, blank content, text
    /// containing a NUL character (which PostgreSQL cannot store), or a
    /// lifetime outside `1..=MAX_EXPIRES_DAYS`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let title = self.title.trim();
        !title.is_empty()
            && self.title.chars().count() <= MAX_TITLE_CHARS
            && !self.content.trim().is_empty()
            && !self.title.contains('\0')
            && !self.content.contains('\0')
            && (1..=MAX_EXPIRES_DAYS).contains(&self.expires)
    }
}
