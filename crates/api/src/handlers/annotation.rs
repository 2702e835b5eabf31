//! Handlers for the `/projects/{id}/annotations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use obramap_core::error::CoreError;
use obramap_core::types::DbId;
use obramap_db::models::annotation::{Annotation, CreateAnnotation};
use obramap_db::repositories::AnnotationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project_exists;
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/annotations
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Annotation>>> {
    ensure_project_exists(&state, project_id).await?;
    let annotations = AnnotationRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(annotations))
}

/// POST /api/v1/projects/{project_id}/annotations
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateAnnotation>,
) -> AppResult<(StatusCode, Json<Annotation>)> {
    if input.title.trim().is_empty() || input.content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Annotation title and content must not be empty".into(),
        )));
    }
    ensure_project_exists(&state, project_id).await?;
    let annotation = AnnotationRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(annotation)))
}

/// DELETE /api/v1/projects/{project_id}/annotations/{annotation_id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path((project_id, annotation_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = AnnotationRepo::delete(&state.pool, project_id, annotation_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Annotation",
            id: annotation_id,
        }))
    }
}
