//! Request-boundary error types with HTTP status code mapping.
//!
//! [`AppError`] sorts every failed request into one of three outcomes:
//!
//! | Outcome         | Variants                                   | Logged          |
//! |-----------------|--------------------------------------------|-----------------|
//! | not found       | [`AppError::NotFound`]                     | `debug`         |
//! | client error    | [`AppError::ClientError`], [`AppError::MethodNotAllowed`] | `debug` |
//! | server error    | [`AppError::ServerError`]                  | `error` + trace |
//!
//! The response body only ever carries the status code and its canonical
//! reason phrase. Internal detail stays in the log.

use std::backtrace::Backtrace;
use std::fmt;

use axum::BoxError;
use axum::http::header::ALLOW;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::persistence::StoreError;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 404,
///     "message": "Not Found"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with the HTTP status and its reason phrase.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// HTTP status code.
    pub code: u16,
    /// Canonical reason phrase for `code`.
    pub message: String,
}

/// A failure not attributable to the caller.
///
/// Captures a backtrace at the point the failure was classified, which is
/// where the request handler gave up.
pub struct ServerFault {
    error: anyhow::Error,
    backtrace: Backtrace,
}

impl ServerFault {
    /// Wraps `error`, capturing the current call stack.
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: error.into(),
            backtrace: Backtrace::force_capture(),
        }
    }

    /// The underlying error.
    #[must_use]
    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }

    /// Call stack captured when the fault was created.
    #[must_use]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Debug for ServerFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerFault")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ServerFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.error)
    }
}

/// Request-boundary error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested resource does not exist or is no longer visible.
    #[error("not found")]
    NotFound,

    /// The request is malformed or not acceptable in its current form.
    #[error("client error: {0}")]
    ClientError(StatusCode),

    /// The request used a method the resource does not accept.
    #[error("method {method} not allowed; allowed: {allowed}")]
    MethodNotAllowed {
        /// Method the client sent.
        method: Method,
        /// Method the resource accepts, echoed in the `Allow` header.
        allowed: Method,
    },

    /// Internal failure. Logged with full detail; the client sees 500.
    #[error("internal error: {0}")]
    ServerError(ServerFault),
}

impl AppError {
    /// Wraps any error as a [`AppError::ServerError`].
    pub fn server(error: impl Into<anyhow::Error>) -> Self {
        Self::ServerError(ServerFault::new(error))
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ClientError(status) => *status,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts a failure raised by the middleware stack into an [`AppError`].
///
/// A request that outlives the configured timeout answers `408`; anything
/// else the layers report is a server fault.
pub async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::ClientError(StatusCode::REQUEST_TIMEOUT)
    } else {
        AppError::server(anyhow::anyhow!(err))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            StoreError::Infrastructure(cause) => Self::server(cause),
        }
    }
}

/// Builds the generic response for `status`: the code and its reason
/// phrase, nothing else.
fn status_response(status: StatusCode) -> Response {
    let body = ErrorResponse {
        error: ErrorBody {
            code: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        },
    };
    (status, axum::Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::NotFound => {
                tracing::debug!("resource not found");
                status_response(status)
            }
            Self::ClientError(status) => {
                tracing::debug!(status = status.as_u16(), "client error");
                status_response(status)
            }
            Self::MethodNotAllowed { method, allowed } => {
                tracing::debug!(%method, %allowed, "method not allowed");
                let mut response = status_response(status);
                if let Ok(value) = HeaderValue::from_str(allowed.as_str()) {
                    response.headers_mut().insert(ALLOW, value);
                }
                response
            }
            Self::ServerError(fault) => {
                tracing::error!(
                    error = %fault,
                    backtrace = %fault.backtrace(),
                    "internal server error"
                );
                status_response(status)
            }
        }
    }
}
