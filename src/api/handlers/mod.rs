//! HTTP endpoint handlers organized by resource.

pub mod snippet;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(snippet::routes())
        .merge(system::routes())
        .fallback(system::not_found_handler)
}
