//! Edit-suggestion model and DTO.

use obramap_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `edit_suggestions` table.
///
/// `changes` is a JSONB field→value map; `status` is one of
/// `pending`/`approved`/`rejected` (see `obramap_core::moderation`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EditSuggestion {
    pub id: DbId,
    pub project_id: DbId,
    pub suggested_by: DbId,
    pub changes: serde_json::Value,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for proposing an edit to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSuggestion {
    pub changes: serde_json::Map<String, serde_json::Value>,
}
