//! Handlers for district-scoped queries.
//!
//! `{names}` path segments are comma-delimited district sets; axum URL-decodes
//! them before they reach the handler.

use axum::extract::{Path, State};
use axum::Json;
use obramap_core::error::CoreError;
use obramap_core::extract::parse_district_list;
use obramap_core::types::DbId;
use obramap_db::models::district::DistrictStats;
use obramap_db::models::project::ProjectWithDistricts;
use obramap_db::repositories::DistrictRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DistrictStatsResponse {
    pub districts: Vec<String>,
    #[serde(flatten)]
    pub stats: DistrictStats,
}

/// GET /api/v1/districts/{names}/projects
///
/// Union semantics: a project matches if it is associated with ANY of the
/// given districts. Deduplicated by project id, newest first.
pub async fn projects_in(
    State(state): State<AppState>,
    Path(names): Path<String>,
) -> AppResult<Json<Vec<ProjectWithDistricts>>> {
    let districts = parse_non_empty_district_set(&names)?;

    let projects = DistrictRepo::projects_in(&state.pool, &districts).await?;
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

/// GET /api/v1/districts/{names}/stats
///
/// Districts with no matching projects yield all-zero counts, not an error.
pub async fn stats(
    State(state): State<AppState>,
    Path(names): Path<String>,
) -> AppResult<Json<DistrictStatsResponse>> {
    let districts = parse_non_empty_district_set(&names)?;
    let stats = DistrictRepo::stats_for(&state.pool, &districts).await?;
    Ok(Json(DistrictStatsResponse { districts, stats }))
}

fn parse_non_empty_district_set(names: &str) -> Result<Vec<String>, AppError> {
    let districts = parse_district_list(names);
    if districts.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "District set must contain at least one name".into(),
        )));
    }
    Ok(districts)
}
