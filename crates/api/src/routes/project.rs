//! Route definitions for the `/projects` resource.
//!
//! Also nests drawings, annotations, suggestions, and the audit trail
//! under `/projects/{project_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{annotation, drawing, project, suggestion};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                        -> list
/// POST   /                                        -> create (editor+)
/// GET    /{id}                                    -> get_by_id
/// PUT    /{id}                                    -> update (editor+)
/// DELETE /{id}                                    -> delete (admin)
/// GET    /{id}/history                            -> audit trail
///
/// GET    /{project_id}/drawings                   -> list
/// POST   /{project_id}/drawings                   -> create (editor+)
/// DELETE /{project_id}/drawings/{drawing_id}      -> delete (editor+)
///
/// GET    /{project_id}/annotations                -> list
/// POST   /{project_id}/annotations                -> create (editor+)
/// DELETE /{project_id}/annotations/{annotation_id} -> delete (editor+)
///
/// GET    /{project_id}/suggestions                -> list
/// POST   /{project_id}/suggestions                -> create (editor+)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/history", get(project::history))
        .route(
            "/{project_id}/drawings",
            get(drawing::list).post(drawing::create),
        )
        .route(
            "/{project_id}/drawings/{drawing_id}",
            axum::routing::delete(drawing::delete),
        )
        .route(
            "/{project_id}/annotations",
            get(annotation::list).post(annotation::create),
        )
        .route(
            "/{project_id}/annotations/{annotation_id}",
            axum::routing::delete(annotation::delete),
        )
        .route(
            "/{project_id}/suggestions",
            get(suggestion::list_for_project).post(suggestion::create),
        )
}

/// Routes mounted at `/suggestions` (moderation transitions).
///
/// ```text
/// POST /{id}/approve   -> approve (verified/admin)
/// POST /{id}/reject    -> reject (verified/admin)
/// ```
pub fn suggestion_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/approve", post(suggestion::approve))
        .route("/{id}/reject", post(suggestion::reject))
}
