#![allow(dead_code, clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use chrono::Utc;
use tower::ServiceExt;

use snippetbox::app_state::AppState;
use snippetbox::domain::{Clock, ManualClock, Snippet, SnippetId};
use snippetbox::persistence::{InfrastructureError, MemorySnippetStore, SnippetStore, StoreError};

/// Text planted in every `FailingStore` error; must never reach a client.
pub const SECRET: &str = "password=hunter2 host=db.internal";

/// A store whose backend is permanently down.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn failure() -> StoreError {
        InfrastructureError::Backend(format!("connection refused ({SECRET})")).into()
    }
}

#[async_trait]
impl SnippetStore for FailingStore {
    async fn create(&self, _: &str, _: &str, _: i32) -> Result<SnippetId, StoreError> {
        Err(Self::failure())
    }

    async fn get_by_id(&self, _: SnippetId) -> Result<Snippet, StoreError> {
        Err(Self::failure())
    }

    async fn list_recent(&self) -> Result<Vec<Snippet>, StoreError> {
        Err(Self::failure())
    }
}

/// A store that answers every call far later than any test waits.
#[derive(Debug, Default)]
pub struct SlowStore;

impl SlowStore {
    async fn stall() {
        tokio::time::sleep(Duration::from_secs(30)).await;
    }
}

#[async_trait]
impl SnippetStore for SlowStore {
    async fn create(&self, _: &str, _: &str, _: i32) -> Result<SnippetId, StoreError> {
        Self::stall().await;
        Ok(SnippetId::new(1))
    }

    async fn get_by_id(&self, _: SnippetId) -> Result<Snippet, StoreError> {
        Self::stall().await;
        Err(StoreError::NotFound)
    }

    async fn list_recent(&self) -> Result<Vec<Snippet>, StoreError> {
        Self::stall().await;
        Ok(Vec::new())
    }
}

/// An app over an empty memory store with a controllable clock.
#[derive(Debug)]
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemorySnippetStore>,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let store = Arc::new(MemorySnippetStore::with_clock(
            Arc::clone(&clock) as Arc<dyn Clock>
        ));
        let state = AppState::new(Arc::clone(&store) as Arc<dyn SnippetStore>);
        Self {
            router: snippetbox::app(state, Duration::from_secs(5)),
            store,
            clock,
        }
    }
}

pub fn failing_app() -> Router {
    let state = AppState::new(Arc::new(FailingStore) as Arc<dyn SnippetStore>);
    snippetbox::app(state, Duration::from_secs(5))
}

pub fn slow_app(request_timeout: Duration) -> Router {
    let state = AppState::new(Arc::new(SlowStore) as Arc<dyn SnippetStore>);
    snippetbox::app(state, request_timeout)
}

/// Response parts collected for assertions.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        let Ok(value) = serde_json::from_slice(&self.body) else {
            panic!("body is not JSON: {:?}", self.body);
        };
        value
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let Ok(response) = router.clone().oneshot(request).await;
    let status = response.status();
    let headers = response.headers().clone();
    let Ok(body) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("failed to read body");
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    request(router, Method::GET, uri, Body::empty()).await
}

pub async fn request(router: &Router, method: Method, uri: &str, body: Body) -> TestResponse {
    let Ok(request) = Request::builder().method(method).uri(uri).body(body) else {
        panic!("invalid request for {uri}");
    };
    send(router, request).await
}

pub async fn post_form(router: &Router, uri: &str, form: &str) -> TestResponse {
    let Ok(request) = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
    else {
        panic!("invalid request for {uri}");
    };
    send(router, request).await
}
