//! Snippet handlers: home listing, view, and create.

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use crate::api::dto::{CreateSnippetForm, SnippetDto, SnippetListResponse, ViewSnippetParams};
use crate::app_state::AppState;
use crate::domain::SnippetId;
use crate::error::{AppError, ErrorResponse};

/// `GET /`: Most recent visible snippets.
///
/// # Errors
///
/// Returns [`AppError::ServerError`] if the store read fails.
#[utoipa::path(
    get,
    path = "/",
    tag = "Snippets",
    summary = "List recent snippets",
    description = "Returns up to ten unexpired snippets, newest first.",
    responses(
        (status = 200, description = "Recent snippets", body = SnippetListResponse),
        (status = 405, description = "Method other than GET", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse),
    )
)]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let snippets = state.snippets.list_recent().await?;
    Ok(Json(SnippetListResponse {
        data: snippets.into_iter().map(SnippetDto::from).collect(),
    }))
}

/// `GET /snippet/view?id=N`: A single visible snippet.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] for a missing, malformed, non-positive,
/// unknown, or expired id, and [`AppError::ServerError`] if the store
/// read fails.
#[utoipa::path(
    get,
    path = "/snippet/view",
    tag = "Snippets",
    summary = "View a snippet",
    description = "Returns the snippet with the given id if it has not expired.",
    params(ViewSnippetParams),
    responses(
        (status = 200, description = "Snippet", body = SnippetDto),
        (status = 404, description = "No visible snippet with that id", body = ErrorResponse),
        (status = 405, description = "Method other than GET", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse),
    )
)]
pub async fn view_snippet(
    State(state): State<AppState>,
    params: Result<Query<ViewSnippetParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = params
        .ok()
        .and_then(|Query(params)| params.id)
        .and_then(|raw| SnippetId::parse_positive(&raw))
        .ok_or(AppError::NotFound)?;

    let snippet = state.snippets.get_by_id(id).await?;
    Ok(Json(SnippetDto::from(snippet)))
}

/// `POST /snippet/create`: Store a new snippet and redirect to it.
///
/// # Errors
///
/// Returns [`AppError::ClientError`] if the form cannot be decoded or
/// fails validation, and [`AppError::ServerError`] if the store write
/// fails.
#[utoipa::path(
    post,
    path = "/snippet/create",
    tag = "Snippets",
    summary = "Create a snippet",
    description = "Stores a snippet that expires after the given number of days and redirects to its view URL.",
    request_body(content = CreateSnippetForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; `Location` points at the new snippet"),
        (status = 405, description = "Method other than POST", body = ErrorResponse),
        (status = 422, description = "Form failed validation", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse),
    )
)]
pub async fn create_snippet(
    State(state): State<AppState>,
    form: Result<Form<CreateSnippetForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = form.map_err(|rejection| AppError::ClientError(rejection.status()))?;
    if !form.is_valid() {
        return Err(AppError::ClientError(StatusCode::UNPROCESSABLE_ENTITY));
    }

    let id = state
        .snippets
        .create(&form.title, &form.content, form.expires)
        .await?;

    Ok(Redirect::to(&format!("/snippet/view?id={id}")))
}

/// Any non-POST request to `/snippet/create`.
pub async fn create_method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed {
        method,
        allowed: Method::POST,
    }
}

/// Any request to a read-only route other than `GET` or `HEAD`.
pub async fn read_method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed {
        method,
        allowed: Method::GET,
    }
}

/// Snippet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home).fallback(read_method_not_allowed))
        .route(
            "/snippet/view",
            get(view_snippet).fallback(read_method_not_allowed),
        )
        .route(
            "/snippet/create",
            post(create_snippet).fallback(create_method_not_allowed),
        )
}
