//! Integration tests for the manual ingestion trigger.
//!
//! The test app's pipeline has no external sources, so a run collects only
//! the static fallback list of known metropolitan projects.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_as};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_ingest_run_inserts_known_projects(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_as(app, "/api/v1/ingest/run", 2, "admin").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["sources_failed"], 0);
    assert_eq!(json["collected"], 5);
    assert_eq!(json["inserted"], 5);

    // Ingested candidates land with the pipeline-reserved status, unverified.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects").await;
    let projects = body_json(response).await;
    let arr = projects.as_array().unwrap();
    assert_eq!(arr.len(), 5);
    assert!(arr.iter().all(|p| p["status"] == "scraped"));
    assert!(arr.iter().all(|p| p["verified"] == false));
    assert!(arr
        .iter()
        .all(|p| !p["districts"].as_array().unwrap().is_empty()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_ingest_run_is_additive_across_runs(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_as(app, "/api/v1/ingest/run", 2, "admin").await;

    // Per-run dedup only: a second run re-inserts the same candidates.
    let app = common::build_test_app(pool.clone());
    let response = post_as(app, "/api/v1/ingest/run", 2, "admin").await;
    let json = body_json(response).await;
    assert_eq!(json["inserted"], 5);

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 10);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_ingest_run_requires_admin(pool: PgPool) {
    for role in ["viewer", "editor", "verified"] {
        let app = common::build_test_app(pool.clone());
        let response = post_as(app, "/api/v1/ingest/run", 1, role).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "role {role}");
    }
}
