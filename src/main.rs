//! snippetbox server entry point.
//!
//! Connects to PostgreSQL, applies migrations, and serves the HTTP API
//! until Ctrl-C or SIGTERM, then closes the connection pool.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use snippetbox::app_state::AppState;
use snippetbox::config::{AppConfig, LogFormat};
use snippetbox::persistence::{PostgresSnippetStore, SnippetStore, postgres};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(addr = %config.listen_addr, "starting snippetbox");

    // Build persistence layer
    let pool = postgres::connect(&config)
        .await
        .context("failed to connect to PostgreSQL")?;
    let store = Arc::new(PostgresSnippetStore::new(
        pool,
        config.store_query_timeout(),
    ));
    if config.run_migrations {
        store.migrate().await.context("failed to run migrations")?;
        tracing::info!("database migrations applied");
    }

    // Build router
    let state = AppState::new(Arc::clone(&store) as Arc<dyn SnippetStore>);
    let app = snippetbox::app(state, config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped; closing database pool");
    store.close().await;

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
