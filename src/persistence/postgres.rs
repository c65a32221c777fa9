//! PostgreSQL implementation of the snippet store.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::error::{InfrastructureError, StoreError};
use super::models::{SNIPPET_COLUMNS, SnippetRow, snippet_from_row};
use super::{RECENT_LIMIT, SnippetStore};
use crate::config::AppConfig;
use crate::domain::{Snippet, SnippetId};

/// Embedded schema migrations from `migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Opens the shared connection pool described by `config`.
///
/// # Errors
///
/// Returns the driver error if the URL is invalid or the initial
/// connections cannot be established within the connect timeout.
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await
}

/// PostgreSQL-backed snippet store using `sqlx::PgPool`.
///
/// Visibility is evaluated by the database against its own `NOW()`, so
/// all replicas of the service agree on which snippets have expired.
/// Each operation is a single statement on a connection borrowed from
/// the pool for the duration of that statement.
#[derive(Debug, Clone)]
pub struct PostgresSnippetStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresSnippetStore {
    /// Creates a store over an existing pool. Every store call is bounded
    /// by `query_timeout`.
    #[must_use]
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Applies pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns the migration error if a migration fails or the applied
    /// history does not match the embedded one.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        MIGRATOR.run(&self.pool).await
    }

    /// Closes the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Runs one database interaction under the store's deadline.
    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(InfrastructureError::DeadlineExceeded {
                operation,
                timeout: self.query_timeout,
            }
            .into()),
        }
    }
}

#[async_trait]
impl SnippetStore for PostgresSnippetStore {
    async fn create(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i32,
    ) -> Result<SnippetId, StoreError> {
        let id = self
            .bounded(
                "create",
                sqlx::query_scalar::<_, i64>(
                    "INSERT INTO snippets (title, content, created, expires) \
                     VALUES ($1, $2, NOW(), NOW() + make_interval(days => $3)) \
                     RETURNING id",
                )
                .bind(title)
                .bind(content)
                .bind(expires_in_days)
                .fetch_one(&self.pool),
            )
            .await?;

        Ok(SnippetId::new(id))
    }

    async fn get_by_id(&self, id: SnippetId) -> Result<Snippet, StoreError> {
        let sql =
            format!("SELECT {SNIPPET_COLUMNS} FROM snippets WHERE expires > NOW() AND id = $1");
        let row = self
            .bounded(
                "get_by_id",
                sqlx::query_as::<_, SnippetRow>(&sql)
                    .bind(id.get())
                    .fetch_optional(&self.pool),
            )
            .await?;

        row.map(snippet_from_row).ok_or(StoreError::NotFound)
    }

    async fn list_recent(&self) -> Result<Vec<Snippet>, StoreError> {
        let sql = format!(
            "SELECT {SNIPPET_COLUMNS} FROM snippets WHERE expires > NOW() \
             ORDER BY id DESC LIMIT $1"
        );
        let rows = self
            .bounded(
                "list_recent",
                sqlx::query_as::<_, SnippetRow>(&sql)
                    .bind(RECENT_LIMIT as i64)
                    .fetch_all(&self.pool),
            )
            .await?;

        Ok(rows.into_iter().map(snippet_from_row).collect())
    }
}
