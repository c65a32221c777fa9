//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::SnippetStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Snippet store used by every snippet endpoint.
    pub snippets: Arc<dyn SnippetStore>,
}

impl AppState {
    /// Creates state over the given store.
    #[must_use]
    pub fn new(snippets: Arc<dyn SnippetStore>) -> Self {
        Self { snippets }
    }
}
