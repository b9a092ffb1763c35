#![allow(dead_code)]

use acronyms::AcronymStore;
use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{HeaderMap, Request, StatusCode},
};
use serde_json::Value;
use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

pub const SECRET: &str = "secretword";

/// A schema-initialized SQLite file under the system temp dir.
pub struct TestDb {
    pub store: AcronymStore,
    path: PathBuf,
}

impl TestDb {
    pub async fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "acronyms-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", path.display());
        let store = AcronymStore::connect(&database_url)
            .await
            .expect("failed to open test database");
        store.apply_schema().await.expect("failed to apply schema");

        Self { store, path }
    }

    pub async fn seeded(tag: &str) -> Self {
        let db = Self::new(tag).await;
        acronyms::db::seed::apply(db.store.pool())
            .await
            .expect("failed to apply seed");
        db
    }

    pub fn router(&self) -> Router {
        let state =
            acronyms::server::router::AppState::with_shared_secret(self.store.clone(), SECRET);
        acronyms::server::router::acronyms_router(state)
    }

    pub async fn cleanup(self) {
        self.store.pool().close().await;
        let base = self.path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(format!("{base}-wal"));
        let _ = std::fs::remove_file(format!("{base}-shm"));
        let _ = std::fs::remove_file(&self.path);
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body was not JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn put_json(uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("Authentication", auth);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn delete(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("Authentication", auth);
    }
    builder.body(Body::empty()).expect("failed to build request")
}
