//! Map drawing model and DTO.

use obramap_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `drawings` table. `geojson` is stored as serialized text.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Drawing {
    pub id: DbId,
    pub project_id: DbId,
    pub geojson: String,
    pub drawing_type: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for attaching a drawing to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDrawing {
    pub geojson: serde_json::Value,
    pub drawing_type: Option<String>,
}
