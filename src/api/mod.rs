//! HTTP layer: route handlers, DTOs, OpenAPI document, and router
//! composition.

pub mod docs;
pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete router with all endpoints.
///
/// With the `swagger-ui` feature the OpenAPI document is served at
/// `/api-docs/openapi.json` and browsable at `/swagger-ui`.
pub fn build_router() -> Router<AppState> {
    let router = handlers::routes();

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
    };

    router
}
