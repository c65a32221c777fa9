//! The snippet entity and its visibility rule.

use chrono::{DateTime, Duration, Utc};

use super::SnippetId;

/// A stored text snippet with a bounded visibility window.
///
/// Values of this type are snapshots: the store hands out owned copies
/// and never exposes its own records. A snippet is never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Store-assigned identifier.
    pub id: SnippetId,
    /// Caller-supplied title.
    pub title: String,
    /// Caller-supplied body text.
    pub content: String,
    /// Insertion time (UTC).
    pub created_at: DateTime<Utc>,
    /// Time after which the snippet is no longer visible (UTC).
    pub expires_at: DateTime<Utc>,
}

impl Snippet {
    /// Returns `true` if the snippet is visible at `now`, i.e. its expiry
    /// lies strictly in the future.
    #[must_use]
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Length of the visibility window.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.expires_at - self.created_at
    }
}

/// Computes the expiry for a snippet created at `created_at` that lives
/// for `days` days.
///
/// Returns `None` when the result falls outside the representable
/// timestamp range.
#[must_use]
pub fn expiry_after(created_at: DateTime<Utc>, days: i32) -> Option<DateTime<Utc>> {
    let window = Duration::try_days(i64::from(days))?;
    created_at.checked_add_signed(window)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        let Some(ts) = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single() else {
            panic!("valid timestamp");
        };
        ts
    }

    fn snippet(created: DateTime<Utc>, expires: DateTime<Utc>) -> Snippet {
        Snippet {
            id: SnippetId::new(1),
            title: "O snail".to_string(),
            content: "Climb Mount Fuji".to_string(),
            created_at: created,
            expires_at: expires,
        }
    }

    #[test]
    fn visible_strictly_before_expiry() {
        let s = snippet(at(2024, 1, 1), at(2024, 1, 8));
        assert!(s.is_visible_at(at(2024, 1, 7)));
        assert!(!s.is_visible_at(at(2024, 1, 8)));
        assert!(!s.is_visible_at(at(2024, 2, 1)));
    }

    #[test]
    fn expiry_adds_whole_days() {
        let created = at(2024, 2, 27);
        let Some(expires) = expiry_after(created, 7) else {
            panic!("expiry in range");
        };
        assert_eq!(expires, at(2024, 3, 5));
        assert_eq!(snippet(created, expires).lifetime(), Duration::days(7));
    }

    #[test]
    fn non_positive_days_produce_already_expired_windows() {
        let created = at(2024, 1, 1);
        let Some(expires) = expiry_after(created, 0) else {
            panic!("expiry in range");
        };
        assert!(!snippet(created, expires).is_visible_at(created));

        let Some(past) = expiry_after(created, -1) else {
            panic!("expiry in range");
        };
        assert!(past < created);
    }

    #[test]
    fn expiry_out_of_range_is_none() {
        assert!(expiry_after(at(2024, 1, 1), i32::MAX).is_none());
    }
}
