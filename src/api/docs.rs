//! OpenAPI document for the HTTP surface.

use utoipa::OpenApi;

use crate::api::dto::{CreateSnippetForm, SnippetDto, SnippetListResponse};
use crate::api::handlers::{snippet, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every route.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "snippetbox",
        description = "Create, view, and list short-lived text snippets."
    ),
    paths(
        snippet::home,
        snippet::view_snippet,
        snippet::create_snippet,
        system::health_handler,
    ),
    components(schemas(
        SnippetDto,
        SnippetListResponse,
        CreateSnippetForm,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Snippets", description = "Snippet storage and retrieval"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;
