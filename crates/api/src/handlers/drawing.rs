//! Handlers for the `/projects/{id}/drawings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use obramap_core::error::CoreError;
use obramap_core::types::DbId;
use obramap_db::models::drawing::{CreateDrawing, Drawing};
use obramap_db::repositories::DrawingRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project_exists;
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/drawings
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Drawing>>> {
    ensure_project_exists(&state, project_id).await?;
    let drawings = DrawingRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(drawings))
}

/// POST /api/v1/projects/{project_id}/drawings
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateDrawing>,
) -> AppResult<(StatusCode, Json<Drawing>)> {
    ensure_project_exists(&state, project_id).await?;
    let drawing = DrawingRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(drawing)))
}

/// DELETE /api/v1/projects/{project_id}/drawings/{drawing_id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path((project_id, drawing_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = DrawingRepo::delete(&state.pool, project_id, drawing_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Drawing",
            id: drawing_id,
        }))
    }
}
