//! Repository and moderation workflow for the `edit_suggestions` table.
//!
//! Approval and rejection are single-transaction operations: the suggestion
//! row, the project mutation (approval only), and the audit rows commit or
//! roll back together.

use obramap_core::moderation::{
    district_names_from_change, validate_changes, ReviewState, SuggestionStatus,
};
use obramap_core::types::DbId;
use serde_json::{Map, Value};
use sqlx::{PgConnection, PgPool};

use crate::models::project::{Project, ProjectWithDistricts};
use crate::models::suggestion::EditSuggestion;
use crate::repositories::history_repo::HistoryRepo;
use crate::repositories::project_repo::PROJECT_COLUMNS;
use crate::repositories::DistrictRepo;

const COLUMNS: &str = "id, project_id, suggested_by, changes, status, created_at";

/// Failures specific to the moderation workflow.
#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    #[error("Suggestion with id {0} not found")]
    SuggestionNotFound(DbId),

    #[error("Project with id {0} not found")]
    ProjectNotFound(DbId),

    #[error("Suggestion {id} is already {status}; only pending suggestions can be moderated")]
    NotPending { id: DbId, status: String },

    #[error("Invalid suggestion changes: {0}")]
    InvalidChanges(String),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

pub struct SuggestionRepo;

impl SuggestionRepo {
    /// Record a new pending suggestion. The change-set must already have
    /// passed `obramap_core::moderation::validate_changes`.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        suggested_by: DbId,
        changes: &Map<String, Value>,
    ) -> Result<EditSuggestion, sqlx::Error> {
        let query = format!(
            "INSERT INTO edit_suggestions (project_id, suggested_by, changes)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EditSuggestion>(&query)
            .bind(project_id)
            .bind(suggested_by)
            .bind(Value::Object(changes.clone()))
            .fetch_one(pool)
            .await
    }

    /// Suggestions for a project, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<EditSuggestion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM edit_suggestions WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, EditSuggestion>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Approve a pending suggestion.
    ///
    /// In one transaction: applies every change to the project (district
    /// changes revalidated through the association store), appends one
    /// `edit_history` row per changed field with outcome `approved`, bumps
    /// `updated_at`, and marks the suggestion approved. Returns the updated
    /// project.
    ///
    /// Concurrent approvals touching the same field are last-write-wins at
    /// the project-field level; no conflict detection is attempted.
    pub async fn approve(
        pool: &PgPool,
        suggestion_id: DbId,
        reviewer: DbId,
    ) -> Result<ProjectWithDistricts, ModerationError> {
        let mut tx = pool.begin().await?;

        let (suggestion, changes) =
            Self::lock_pending(&mut tx, suggestion_id, SuggestionStatus::Approved).await?;
        let project = Self::lock_project(&mut tx, suggestion.project_id).await?;

        for (field, value) in &changes {
            match field.as_str() {
                "districts" => {
                    let old_names = sqlx::query_scalar::<_, String>(
                        "SELECT distrito_name FROM project_districts
                         WHERE project_id = $1 ORDER BY id",
                    )
                    .bind(project.id)
                    .fetch_all(&mut *tx)
                    .await?;
                    let new_names = DistrictRepo::set_districts(
                        &mut tx,
                        project.id,
                        &district_names_from_change(value),
                    )
                    .await?;
                    HistoryRepo::append_tx(
                        &mut tx,
                        project.id,
                        suggestion.suggested_by,
                        field,
                        Some(&old_names.join(", ")),
                        Some(&new_names.join(", ")),
                        ReviewState::Approved,
                    )
                    .await?;
                }
                _ => {
                    let old_value = Self::scalar_field(&project, field);
                    let new_value = value.as_str().map(str::to_string);
                    let query = format!("UPDATE projects SET {field} = $2 WHERE id = $1");
                    sqlx::query(&query)
                        .bind(project.id)
                        .bind(&new_value)
                        .execute(&mut *tx)
                        .await?;
                    HistoryRepo::append_tx(
                        &mut tx,
                        project.id,
                        suggestion.suggested_by,
                        field,
                        old_value.as_deref(),
                        new_value.as_deref(),
                        ReviewState::Approved,
                    )
                    .await?;
                }
            }
        }

        sqlx::query("UPDATE projects SET updated_at = NOW() WHERE id = $1")
            .bind(project.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE edit_suggestions SET status = $2 WHERE id = $1")
            .bind(suggestion_id)
            .bind(SuggestionStatus::Approved.as_str())
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        let updated = sqlx::query_as::<_, Project>(&query)
            .bind(project.id)
            .fetch_one(&mut *tx)
            .await?;
        let districts = sqlx::query_scalar::<_, String>(
            "SELECT distrito_name FROM project_districts WHERE project_id = $1 ORDER BY id",
        )
        .bind(project.id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(
            suggestion_id,
            project_id = updated.id,
            reviewer,
            fields = changes.len(),
            "Edit suggestion approved"
        );
        Ok(ProjectWithDistricts {
            project: updated,
            districts,
        })
    }

    /// Reject a pending suggestion.
    ///
    /// Appends one `edit_history` row per proposed field with outcome
    /// `rejected` and marks the suggestion rejected. The project itself is
    /// never mutated.
    pub async fn reject(
        pool: &PgPool,
        suggestion_id: DbId,
        reviewer: DbId,
    ) -> Result<EditSuggestion, ModerationError> {
        let mut tx = pool.begin().await?;

        let (suggestion, changes) =
            Self::lock_pending(&mut tx, suggestion_id, SuggestionStatus::Rejected).await?;
        let project = Self::lock_project(&mut tx, suggestion.project_id).await?;

        for (field, value) in &changes {
            let old_value = if field == "districts" {
                let names = sqlx::query_scalar::<_, String>(
                    "SELECT distrito_name FROM project_districts
                     WHERE project_id = $1 ORDER BY id",
                )
                .bind(project.id)
                .fetch_all(&mut *tx)
                .await?;
                Some(names.join(", "))
            } else {
                Self::scalar_field(&project, field)
            };
            let new_value = if field == "districts" {
                Some(district_names_from_change(value).join(", "))
            } else {
                value.as_str().map(str::to_string)
            };
            HistoryRepo::append_tx(
                &mut tx,
                project.id,
                suggestion.suggested_by,
                field,
                old_value.as_deref(),
                new_value.as_deref(),
                ReviewState::Rejected,
            )
            .await?;
        }

        let query = format!(
            "UPDATE edit_suggestions SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let rejected = sqlx::query_as::<_, EditSuggestion>(&query)
            .bind(suggestion_id)
            .bind(SuggestionStatus::Rejected.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(
            suggestion_id,
            project_id = project.id,
            reviewer,
            "Edit suggestion rejected"
        );
        Ok(rejected)
    }

    /// Lock a suggestion row and verify the state machine permits moving it
    /// to `to`, with a valid change-set.
    async fn lock_pending(
        tx: &mut PgConnection,
        suggestion_id: DbId,
        to: SuggestionStatus,
    ) -> Result<(EditSuggestion, Map<String, Value>), ModerationError> {
        let query = format!("SELECT {COLUMNS} FROM edit_suggestions WHERE id = $1 FOR UPDATE");
        let suggestion = sqlx::query_as::<_, EditSuggestion>(&query)
            .bind(suggestion_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(ModerationError::SuggestionNotFound(suggestion_id))?;

        match SuggestionStatus::parse(&suggestion.status) {
            Some(current) if current.can_transition(to) => {}
            _ => {
                return Err(ModerationError::NotPending {
                    id: suggestion_id,
                    status: suggestion.status.clone(),
                })
            }
        }

        let changes = suggestion
            .changes
            .as_object()
            .cloned()
            .ok_or_else(|| ModerationError::InvalidChanges("changes is not an object".into()))?;
        // Validated at creation; re-checked so a bad row can never drive
        // arbitrary column updates.
        validate_changes(&changes).map_err(|e| ModerationError::InvalidChanges(e.to_string()))?;

        Ok((suggestion, changes))
    }

    async fn lock_project(
        tx: &mut PgConnection,
        project_id: DbId,
    ) -> Result<Project, ModerationError> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(ModerationError::ProjectNotFound(project_id))
    }

    fn scalar_field(project: &Project, field: &str) -> Option<String> {
        match field {
            "name" => Some(project.name.clone()),
            "description" => project.description.clone(),
            "status" => Some(project.status.clone()),
            _ => None,
        }
    }
}
