#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh, migrated in-memory database.
pub async fn build_app() -> anyhow::Result<Router> {
    let mut cfg = configs::AppConfig::default();
    cfg.database = configs::DatabaseConfig::in_memory();
    cfg.auth.session_secret = "test-secret".into();
    let db = models::db::connect_and_migrate(&cfg.database).await?;
    Ok(server::startup::build_app(db, &cfg))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// `name=value` of the first Set-Cookie header for `name`.
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .find(|kv| kv.starts_with(&format!("{}=", name)))
            .map(str::to_string)
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> anyhow::Result<TestResponse> {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    let req = match body {
        Some(json) => req.header(header::CONTENT_TYPE, "application/json").body(Body::from(serde_json::to_vec(&json)?))?,
        None => req.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok(TestResponse { status, headers, body })
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<TestResponse> { send(app, Method::GET, uri, None, None).await }

pub async fn post(app: &Router, uri: &str, body: Value) -> anyhow::Result<TestResponse> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> anyhow::Result<TestResponse> {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn delete(app: &Router, uri: &str) -> anyhow::Result<TestResponse> {
    send(app, Method::DELETE, uri, None, None).await
}

/// POST and return the new row's id, failing unless the status is 201.
pub async fn create(app: &Router, uri: &str, body: Value) -> anyhow::Result<i64> {
    let resp = post(app, uri, body).await?;
    anyhow::ensure!(resp.status == StatusCode::CREATED, "POST {} -> {} {}", uri, resp.status, resp.body);
    resp.body["id"].as_i64().ok_or_else(|| anyhow::anyhow!("no id in {}", resp.body))
}
