//! Store error taxonomy.
//!
//! Every store operation fails with exactly one [`StoreError`] kind.
//! Absence and expiry are the same kind; everything else the backing
//! resource can do wrong is [`StoreError::Infrastructure`].

use std::time::Duration;

/// Failure of a [`super::SnippetStore`] operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No visible snippet with the requested id (never created, or expired).
    #[error("snippet not found")]
    NotFound,

    /// The backing resource failed for a reason unrelated to absence.
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

/// Cause of an infrastructure failure.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// The database driver reported an error (connection, constraint,
    /// decode, pool exhaustion).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A single store interaction did not complete within its deadline.
    #[error("{operation} exceeded its {timeout:?} deadline")]
    DeadlineExceeded {
        /// Store operation that timed out.
        operation: &'static str,
        /// Deadline that was applied.
        timeout: Duration,
    },

    /// The backend refused the operation.
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Infrastructure(InfrastructureError::Database(err))
    }
}
