//! Edit-history audit model.

use obramap_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `edit_history` table.
///
/// `approved` holds the tri-state review outcome
/// (`pending`/`approved`/`rejected`), mapped to
/// `obramap_core::moderation::ReviewState` in application code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EditHistory {
    pub id: DbId,
    pub project_id: DbId,
    pub edited_by: Option<DbId>,
    pub field_changed: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub approved: String,
    pub created_at: Timestamp,
}
