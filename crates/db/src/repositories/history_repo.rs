//! Repository for the append-only `edit_history` table.

use obramap_core::moderation::ReviewState;
use obramap_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::history::EditHistory;

const COLUMNS: &str =
    "id, project_id, edited_by, field_changed, old_value, new_value, approved, created_at";

pub struct HistoryRepo;

impl HistoryRepo {
    /// Audit trail for a project, oldest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<EditHistory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM edit_history WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, EditHistory>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Append one audit row inside the caller's transaction.
    ///
    /// Used by the moderation workflow so history rows commit atomically with
    /// the project mutation they describe.
    pub async fn append_tx(
        conn: &mut PgConnection,
        project_id: DbId,
        edited_by: DbId,
        field_changed: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
        outcome: ReviewState,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO edit_history
                 (project_id, edited_by, field_changed, old_value, new_value, approved)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(project_id)
        .bind(edited_by)
        .bind(field_changed)
        .bind(old_value)
        .bind(new_value)
        .bind(outcome.as_str())
        .execute(conn)
        .await?;
        Ok(())
    }
}
