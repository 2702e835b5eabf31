pub mod district;
pub mod health;
pub mod ingest;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                  list, create
/// /projects/{id}                             get, update, delete
/// /projects/{id}/history                     audit trail
/// /projects/{id}/drawings[...]               drawings CRUD
/// /projects/{id}/annotations[...]            annotations CRUD
/// /projects/{id}/suggestions                 list, create
///
/// /suggestions/{id}/approve                  moderation (verified/admin)
/// /suggestions/{id}/reject                   moderation (verified/admin)
///
/// /districts/{names}/projects                multi-district project query
/// /districts/{names}/stats                   multi-district aggregates
///
/// /ingest/run                                trigger ingestion (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/suggestions", project::suggestion_router())
        .nest("/districts", district::router())
        .nest("/ingest", ingest::router())
}
