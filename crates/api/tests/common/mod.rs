use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use obramap_api::config::ServerConfig;
use obramap_api::router::build_app_router;
use obramap_api::state::AppState;
use obramap_ingest::{IngestConfig, IngestionPipeline};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The ingestion pipeline carries no
/// external sources, so `/ingest/run` only inserts the static fallback list.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let pipeline = Arc::new(IngestionPipeline::new(Vec::new(), IngestConfig::default()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        pipeline,
    };

    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    identity: Option<(i64, &str)>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((user_id, role)) = identity {
        builder = builder
            .header("x-user-id", user_id.to_string())
            .header("x-user-role", role);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Anonymous GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// POST with a JSON body, sending resolved-identity headers.
pub async fn post_json_as(
    app: Router,
    uri: &str,
    user_id: i64,
    role: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some((user_id, role)), Some(body)).await
}

/// POST with an empty body (moderation transitions), sending identity headers.
pub async fn post_as(app: Router, uri: &str, user_id: i64, role: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some((user_id, role)), None).await
}

/// Anonymous POST with a JSON body (for testing missing-identity rejection).
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

/// PUT with a JSON body, sending resolved-identity headers.
pub async fn put_json_as(
    app: Router,
    uri: &str,
    user_id: i64,
    role: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some((user_id, role)), Some(body)).await
}

/// DELETE, sending resolved-identity headers.
pub async fn delete_as(app: Router, uri: &str, user_id: i64, role: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some((user_id, role)), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project through the API as an editor, returning its id.
///
/// Shared setup for child-resource and moderation tests.
pub async fn create_project(
    pool: PgPool,
    name: &str,
    districts: &[&str],
) -> i64 {
    let app = build_test_app(pool);
    let response = post_json_as(
        app,
        "/api/v1/projects",
        1,
        "editor",
        serde_json::json!({"name": name, "districts": districts}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_i64().unwrap()
}
