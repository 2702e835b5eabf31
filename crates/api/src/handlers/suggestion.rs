//! Handlers for edit suggestions and their moderation transitions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use obramap_core::moderation::validate_changes;
use obramap_core::types::DbId;
use obramap_db::models::project::ProjectWithDistricts;
use obramap_db::models::suggestion::{CreateSuggestion, EditSuggestion};
use obramap_db::repositories::SuggestionRepo;

use crate::error::AppResult;
use crate::handlers::project::ensure_project_exists;
use crate::middleware::rbac::{RequireEditor, RequireModerator};
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/suggestions
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateSuggestion>,
) -> AppResult<(StatusCode, Json<EditSuggestion>)> {
    validate_changes(&input.changes)?;
    ensure_project_exists(&state, project_id).await?;
    let suggestion =
        SuggestionRepo::create(&state.pool, project_id, user.user_id, &input.changes).await?;
    Ok((StatusCode::CREATED, Json(suggestion)))
}

/// GET /api/v1/projects/{project_id}/suggestions
pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<EditSuggestion>>> {
    ensure_project_exists(&state, project_id).await?;
    let suggestions = SuggestionRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(suggestions))
}

/// POST /api/v1/suggestions/{id}/approve
///
/// Applies the suggested changes to the project and appends the audit rows
/// in one transaction. Returns the updated project.
pub async fn approve(
    State(state): State<AppState>,
    RequireModerator(user): RequireModerator,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithDistricts>> {
    let project = SuggestionRepo::approve(&state.pool, id, user.user_id).await?;
    Ok(Json(project))
}

/// POST /api/v1/suggestions/{id}/reject
///
/// Records the rejection in the audit trail; the project is never mutated.
pub async fn reject(
    State(state): State<AppState>,
    RequireModerator(user): RequireModerator,
    Path(id): Path<DbId>,
) -> AppResult<Json<EditSuggestion>> {
    let suggestion = SuggestionRepo::reject(&state.pool, id, user.user_id).await?;
    Ok(Json(suggestion))
}
