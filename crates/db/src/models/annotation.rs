//! Project annotation model and DTO.

use obramap_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `annotations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Annotation {
    pub id: DbId,
    pub project_id: DbId,
    pub distrito_name: String,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for attaching an annotation to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnotation {
    pub distrito_name: String,
    pub title: String,
    pub content: String,
}
