//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full application router (same middleware stack as
//! production) on top of a per-test database, with media and template
//! directories pointed at test locations. The OpenAI client is configured
//! without an API key so studio calls fail fast at the adapter boundary
//! instead of reaching the network.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use owly_api::config::ServerConfig;
use owly_api::router::build_app_router;
use owly_api::state::AppState;
use owly_openai::{OpenAiConfig, StudioClient};

/// Build a test `ServerConfig` rooted at the given public directory.
pub fn test_config(public_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        request_timeout_secs: 30,
        public_dir,
        // The workspace templates, relative to the api crate root.
        templates_dir: PathBuf::from("../../templates"),
        admin_username: "admin".to_string(),
        admin_password: "computer".to_string(),
    }
}

/// An OpenAI client with no API key and an unroutable base URL: every
/// adapter call fails with `MissingApiKey` before any request is sent.
fn offline_studio_client() -> StudioClient {
    StudioClient::new(OpenAiConfig {
        api_key: String::new(),
        base_url: "http://127.0.0.1:9".to_string(),
        text_model: "gpt-4o-mini".to_string(),
        tts_model: "gpt-4o-mini-tts".to_string(),
        request_timeout_secs: 1,
    })
    .expect("client construction should succeed")
}

/// Build the application router plus the temp dir backing its public
/// directory. Keep the `TempDir` alive for the duration of the test.
pub fn build_test_app(pool: PgPool) -> (Router, TempDir) {
    let public = TempDir::new().expect("temp dir");
    std::fs::create_dir_all(public.path().join("studio-audio")).expect("audio dir");

    let config = test_config(public.path().to_path_buf());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        studio: Arc::new(offline_studio_client()),
    };

    (build_app_router(state, &config), public)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request construction should succeed");

    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(cookie)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(cookie)).await
}

pub async fn post_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(cookie)).await
}

pub async fn delete_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(cookie)).await
}

/// Collect the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Collect the response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Log in with the test credentials and return the session cookie in
/// `name=value` form, ready for a `Cookie` header.
pub async fn login(app: Router) -> String {
    let body = serde_json::json!({ "username": "admin", "password": "computer" });
    let response = post_json(app, "/api/admin/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a session cookie")
        .to_str()
        .expect("cookie header should be valid UTF-8");

    // Keep only the name=value pair, dropping attributes.
    set_cookie
        .split(';')
        .next()
        .expect("cookie header should be non-empty")
        .to_string()
}
