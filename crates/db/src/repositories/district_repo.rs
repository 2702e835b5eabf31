//! Repository for the `project_districts` association and district queries.

use std::collections::HashMap;

use obramap_core::extract::distinct_names;
use obramap_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::district::DistrictStats;
use crate::models::project::Project;
use crate::repositories::project_repo::PROJECT_COLUMNS;

/// Owns the many-to-many relation between projects and district names.
pub struct DistrictRepo;

impl DistrictRepo {
    /// Replace a project's full district set inside the caller's transaction.
    ///
    /// Delete-all-then-insert-all semantics; callers (project create/update,
    /// suggestion approval) compose the replacement with their other writes,
    /// so a concurrent reader never observes the project without districts.
    /// Duplicate names within the call are silently dropped (first occurrence
    /// wins) before the unique constraint can fire. Returns the stored set.
    pub async fn set_districts(
        conn: &mut PgConnection,
        project_id: DbId,
        names: &[String],
    ) -> Result<Vec<String>, sqlx::Error> {
        let distinct = distinct_names(names);

        sqlx::query("DELETE FROM project_districts WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;

        for name in &distinct {
            sqlx::query(
                "INSERT INTO project_districts (project_id, distrito_name) VALUES ($1, $2)",
            )
            .bind(project_id)
            .bind(name)
            .execute(&mut *conn)
            .await?;
        }

        Ok(distinct)
    }

    /// District names for one project, in insertion order.
    pub async fn names_for(pool: &PgPool, project_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT distrito_name FROM project_districts WHERE project_id = $1 ORDER BY id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;
        Ok(names)
    }

    /// District names for a batch of projects, keyed by project id.
    ///
    /// One round-trip instead of N, for list endpoints.
    pub async fn names_for_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<String>>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = sqlx::query_as::<_, (DbId, String)>(
            "SELECT project_id, distrito_name FROM project_districts
             WHERE project_id = ANY($1) ORDER BY id",
        )
        .bind(project_ids)
        .fetch_all(pool)
        .await?;

        let mut by_project: HashMap<DbId, Vec<String>> = HashMap::new();
        for (project_id, name) in rows {
            by_project.entry(project_id).or_default().push(name);
        }
        Ok(by_project)
    }

    /// Projects associated with ANY of the given district names (union
    /// semantics), deduplicated by project id, newest first.
    pub async fn projects_in(
        pool: &PgPool,
        names: &[String],
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects
             WHERE id IN (
                 SELECT project_id FROM project_districts WHERE distrito_name = ANY($1)
             )
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(names)
            .fetch_all(pool)
            .await
    }

    /// Aggregate per-status counts over the same matching set as
    /// [`projects_in`](Self::projects_in). Districts with no matches yield
    /// all-zero counts.
    pub async fn stats_for(
        pool: &PgPool,
        names: &[String],
    ) -> Result<DistrictStats, sqlx::Error> {
        sqlx::query_as::<_, DistrictStats>(
            "SELECT
                 COUNT(*) AS total,
                 COUNT(*) FILTER (WHERE status = 'active') AS active,
                 COUNT(*) FILTER (WHERE status = 'inactive') AS inactive,
                 COUNT(*) FILTER (WHERE status = 'completed') AS completed,
                 COUNT(*) FILTER (WHERE status = 'archived') AS archived
             FROM projects
             WHERE id IN (
                 SELECT project_id FROM project_districts WHERE distrito_name = ANY($1)
             )",
        )
        .bind(names)
        .fetch_one(pool)
        .await
    }
}
