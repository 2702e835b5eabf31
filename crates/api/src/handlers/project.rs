//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use obramap_core::error::CoreError;
use obramap_core::status::validate_manual_status;
use obramap_core::types::DbId;
use obramap_db::models::history::EditHistory;
use obramap_db::models::project::{
    CreateProject, ProjectWithDistricts, UpdateProject,
};
use obramap_db::repositories::{DistrictRepo, HistoryRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireEditor};
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectWithDistricts>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project name must not be empty".into(),
        )));
    }
    if input.districts.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A project must be associated with at least one district".into(),
        )));
    }
    if let Some(status) = &input.status {
        validate_manual_status(status)?;
    }

    let project = ProjectRepo::create(&state.pool, &input, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithDistricts>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
    let mut districts_by_project = DistrictRepo::names_for_projects(&state.pool, &ids).await?;

    let result = projects
        .into_iter()
        .map(|project| {
            let districts = districts_by_project.remove(&project.id).unwrap_or_default();
            ProjectWithDistricts { project, districts }
        })
        .collect();
    Ok(Json(result))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithDistricts>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let districts = DistrictRepo::names_for(&state.pool, id).await?;
    Ok(Json(ProjectWithDistricts { project, districts }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectWithDistricts>> {
    if let Some(status) = &input.status {
        validate_manual_status(status)?;
    }
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Project name must not be empty".into(),
            )));
        }
    }
    if let Some(districts) = &input.districts {
        if districts.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "A project must be associated with at least one district".into(),
            )));
        }
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Hard delete: removes the project and every owned row (districts, drawings,
/// annotations, history, suggestions) in one transaction.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete_cascade(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// GET /api/v1/projects/{id}/history
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<EditHistory>>> {
    ensure_project_exists(&state, id).await?;
    let entries = HistoryRepo::list_for_project(&state.pool, id).await?;
    Ok(Json(entries))
}

/// Shared existence check for project-scoped child resources.
pub(crate) async fn ensure_project_exists(state: &AppState, id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(())
}
