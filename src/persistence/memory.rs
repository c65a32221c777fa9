//! In-process snippet store.
//!
//! [`MemorySnippetStore`] keeps every record in a `BTreeMap` keyed by id
//! behind a single [`tokio::sync::RwLock`]. Reads share the lock; inserts
//! take it exclusively, which also serializes id assignment.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::{InfrastructureError, StoreError};
use super::{RECENT_LIMIT, SnippetStore};
use crate::domain::snippet::expiry_after;
use crate::domain::{Clock, Snippet, SnippetId, SystemClock};

#[derive(Debug)]
struct Records {
    next_id: i64,
    by_id: BTreeMap<SnippetId, Snippet>,
}

/// Snippet store backed by process memory.
///
/// Expiry is evaluated against the injected [`Clock`], so tests can
/// advance time with [`crate::domain::ManualClock`] instead of waiting.
#[derive(Debug)]
pub struct MemorySnippetStore {
    records: RwLock<Records>,
    clock: Arc<dyn Clock>,
}

impl MemorySnippetStore {
    /// Creates an empty store on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store that reads time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(Records {
                next_id: 1,
                by_id: BTreeMap::new(),
            }),
            clock,
        }
    }

    /// Number of stored records, expired ones included.
    pub async fn len(&self) -> usize {
        self.records.read().await.by_id.len()
    }

    /// Returns `true` if nothing has ever been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.by_id.is_empty()
    }
}

impl Default for MemorySnippetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnippetStore for MemorySnippetStore {
    async fn create(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i32,
    ) -> Result<SnippetId, StoreError> {
        let created_at = self.clock.now();
        let expires_at = expiry_after(created_at, expires_in_days).ok_or_else(|| {
            InfrastructureError::Backend(format!(
                "expiry of {expires_in_days} days is out of timestamp range"
            ))
        })?;

        let mut records = self.records.write().await;
        let id = SnippetId::new(records.next_id);
        records.next_id = records
            .next_id
            .checked_add(1)
            .ok_or_else(|| InfrastructureError::Backend("snippet id space exhausted".into()))?;
        records.by_id.insert(
            id,
            Snippet {
                id,
                title: title.to_string(),
                content: content.to_string(),
                created_at,
                expires_at,
            },
        );
        Ok(id)
    }

    async fn get_by_id(&self, id: SnippetId) -> Result<Snippet, StoreError> {
        let now = self.clock.now();
        let records = self.records.read().await;
        records
            .by_id
            .get(&id)
            .filter(|snippet| snippet.is_visible_at(now))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_recent(&self) -> Result<Vec<Snippet>, StoreError> {
        let now = self.clock.now();
        let records = self.records.read().await;
        Ok(records
            .by_id
            .values()
            .rev()
            .filter(|snippet| snippet.is_visible_at(now))
            .take(RECENT_LIMIT)
            .cloned()
            .collect())
    }
}
