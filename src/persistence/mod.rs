//! Persistence layer: the snippet store contract and its backends.
//!
//! [`SnippetStore`] is the only way the rest of the service touches
//! snippet records. The production backend is [`PostgresSnippetStore`];
//! [`MemorySnippetStore`] keeps records in-process and evaluates expiry
//! against an injectable [`crate::domain::Clock`].
//!
//! Stores never log. They classify failures into [`StoreError`] and leave
//! reporting to the caller.

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Snippet, SnippetId};

pub use error::{InfrastructureError, StoreError};
pub use memory::MemorySnippetStore;
pub use postgres::PostgresSnippetStore;

/// Maximum number of snippets returned by [`SnippetStore::list_recent`].
pub const RECENT_LIMIT: usize = 10;

/// Durable storage for snippets with expiry-aware reads.
///
/// Implementations must be safe to call concurrently from many request
/// tasks. Reads only ever see snippets whose expiry lies in the future;
/// expired records are left in place but are unreachable.
#[async_trait]
pub trait SnippetStore: std::fmt::Debug + Send + Sync {
    /// Persists a new snippet that expires `expires_in_days` days from now
    /// and returns its identifier.
    ///
    /// The day count is not validated: zero or negative values produce a
    /// record that is already invisible.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Infrastructure`] if the write fails. No record
    /// exists after a failed call.
    async fn create(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i32,
    ) -> Result<SnippetId, StoreError>;

    /// Returns the snippet with the given id if it is currently visible.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such snippet exists or it has
    /// expired, and [`StoreError::Infrastructure`] on any other failure.
    async fn get_by_id(&self, id: SnippetId) -> Result<Snippet, StoreError>;

    /// Returns up to [`RECENT_LIMIT`] visible snippets, newest id first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Infrastructure`] if the read fails. Partial
    /// results are never returned.
    async fn list_recent(&self) -> Result<Vec<Snippet>, StoreError>;
}
