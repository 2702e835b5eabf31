//! Handler for manually triggering an ingestion run.

use axum::extract::State;
use axum::Json;
use obramap_ingest::IngestError;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IngestRunResponse {
    /// Newly inserted candidate projects.
    pub inserted: u32,
    /// Candidates collected after dedup.
    pub collected: usize,
    /// Sources that failed or timed out this run.
    pub sources_failed: usize,
}

/// POST /api/v1/ingest/run
///
/// Runs the pipeline synchronously. Per-source failures are absorbed inside
/// the pipeline; only a storage failure surfaces here.
pub async fn run(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
) -> AppResult<Json<IngestRunResponse>> {
    let report = state.pipeline.run(&state.pool).await.map_err(|e| match e {
        IngestError::Storage(db) => AppError::Database(db),
        other => AppError::InternalError(other.to_string()),
    })?;

    Ok(Json(IngestRunResponse {
        inserted: report.inserted,
        collected: report.collected,
        sources_failed: report.sources_failed,
    }))
}
