//! # snippetbox
//!
//! HTTP service for sharing short-lived text snippets.
//!
//! A snippet is created with a lifetime in days. Until that lifetime runs
//! out it can be fetched by id and shows up in the list of recent
//! snippets; afterwards it behaves exactly as if it had never existed.
//! Expired rows stay in the database; visibility is decided at read time.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Handlers + AppError (api/, error)
//!     │
//!     ├── SnippetStore trait (persistence/)
//!     │     ├── PostgresSnippetStore
//!     │     └── MemorySnippetStore
//!     │
//!     └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::handle_middleware_error;

/// Builds the fully layered application router over `state`.
///
/// Every request is traced and bounded by `request_timeout`; a request
/// that runs out of time gets the usual JSON error body with status 408.
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    api::build_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
        .with_state(state)
}
