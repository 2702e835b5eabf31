//! Integration tests for project-scoped drawings and annotations.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_as, get, post_json_as};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Drawings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_drawings(pool: PgPool) {
    let project_id = common::create_project(pool.clone(), "Obra", &["Lima"]).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_as(
        app,
        &format!("/api/v1/projects/{project_id}/drawings"),
        1,
        "editor",
        serde_json::json!({
            "geojson": {"type": "LineString", "coordinates": [[-77.0, -12.0], [-77.1, -12.1]]},
            "drawing_type": "route"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["drawing_type"], "route");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project_id}/drawings")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_drawing_requires_editor(pool: PgPool) {
    let project_id = common::create_project(pool.clone(), "Obra", &["Lima"]).await;

    let app = common::build_test_app(pool);
    let response = post_json_as(
        app,
        &format!("/api/v1/projects/{project_id}/drawings"),
        1,
        "viewer",
        serde_json::json!({"geojson": {"type": "Point", "coordinates": [0.0, 0.0]}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_drawing_for_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/999999/drawings").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_drawing_scoped_to_project(pool: PgPool) {
    let project_a = common::create_project(pool.clone(), "Obra A", &["Lima"]).await;
    let project_b = common::create_project(pool.clone(), "Obra B", &["Callao"]).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_as(
        app,
        &format!("/api/v1/projects/{project_a}/drawings"),
        1,
        "editor",
        serde_json::json!({"geojson": {"type": "Point", "coordinates": [0.0, 0.0]}}),
    )
    .await;
    let drawing = body_json(response).await;
    let drawing_id = drawing["id"].as_i64().unwrap();

    // Deleting through the wrong project does not touch the drawing.
    let app = common::build_test_app(pool.clone());
    let response = delete_as(
        app,
        &format!("/api/v1/projects/{project_b}/drawings/{drawing_id}"),
        1,
        "editor",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete_as(
        app,
        &format!("/api/v1/projects/{project_a}/drawings/{drawing_id}"),
        1,
        "editor",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Annotations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_annotations(pool: PgPool) {
    let project_id = common::create_project(pool.clone(), "Obra", &["Lima"]).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_as(
        app,
        &format!("/api/v1/projects/{project_id}/annotations"),
        1,
        "editor",
        serde_json::json!({
            "distrito_name": "Lima",
            "title": "Avance de obra",
            "content": "El tramo norte ya está habilitado."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["title"], "Avance de obra");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project_id}/annotations")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_annotation_with_blank_title_returns_400(pool: PgPool) {
    let project_id = common::create_project(pool.clone(), "Obra", &["Lima"]).await;

    let app = common::build_test_app(pool);
    let response = post_json_as(
        app,
        &format!("/api/v1/projects/{project_id}/annotations"),
        1,
        "editor",
        serde_json::json!({"distrito_name": "Lima", "title": "  ", "content": "texto"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
