//! Repository for the `projects` table.

use chrono::Utc;
use obramap_core::status::STATUS_SCRAPED;
use obramap_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{
    CreateProject, NewCandidate, Project, ProjectWithDistricts, UpdateProject,
};
use crate::repositories::DistrictRepo;

/// Column list shared across queries to avoid repetition.
pub(crate) const PROJECT_COLUMNS: &str = "id, name, description, status, verified, verified_by, \
     created_by, source_url, scraped_at, created_at, updated_at";

/// Provides CRUD operations for projects, including the district association
/// writes that must share the project's transaction.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with its district set, in one transaction.
    ///
    /// District validation (non-empty list, status vocabulary) happens at the
    /// handler; duplicates are dropped here via the association store.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        created_by: DbId,
    ) -> Result<ProjectWithDistricts, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (name, description, status, created_by)
             VALUES ($1, $2, COALESCE($3, 'active'), $4)
             RETURNING {PROJECT_COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;

        let districts =
            DistrictRepo::set_districts(&mut tx, project.id, &input.districts).await?;

        tx.commit().await?;
        Ok(ProjectWithDistricts { project, districts })
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields are applied; a present
    /// district list replaces the full association set in the same
    /// transaction. `updated_at` is bumped on every call.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<ProjectWithDistricts>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {PROJECT_COLUMNS}"
        );
        let Some(project) = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let districts = match &input.districts {
            Some(names) => DistrictRepo::set_districts(&mut tx, id, names).await?,
            None => {
                sqlx::query_scalar::<_, String>(
                    "SELECT distrito_name FROM project_districts WHERE project_id = $1 ORDER BY id",
                )
                .bind(id)
                .fetch_all(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        Ok(Some(ProjectWithDistricts { project, districts }))
    }

    /// Hard-delete a project and every owned row in one transaction.
    ///
    /// Children are removed before the parent so the cascade also holds on
    /// backends without FK cascade support; a failure at any step rolls the
    /// whole operation back. Returns `true` if the project existed.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for table in [
            "project_districts",
            "drawings",
            "annotations",
            "edit_history",
            "edit_suggestions",
        ] {
            let query = format!("DELETE FROM {table} WHERE project_id = $1");
            sqlx::query(&query).bind(id).execute(&mut *tx).await?;
        }

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert ingested candidates with their district rows, all in one
    /// transaction. Additive-only: existing rows are never touched. Returns
    /// the number of projects inserted.
    pub async fn insert_candidates(
        pool: &PgPool,
        candidates: &[NewCandidate],
    ) -> Result<u32, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let scraped_at = Utc::now();
        let mut inserted = 0u32;

        for candidate in candidates {
            let project_id = sqlx::query_scalar::<_, DbId>(
                "INSERT INTO projects (name, description, status, verified, source_url, scraped_at)
                 VALUES ($1, $2, $3, FALSE, $4, $5)
                 RETURNING id",
            )
            .bind(&candidate.name)
            .bind(&candidate.description)
            .bind(STATUS_SCRAPED)
            .bind(&candidate.source_url)
            .bind(scraped_at)
            .fetch_one(&mut *tx)
            .await?;

            DistrictRepo::set_districts(&mut tx, project_id, &candidate.districts).await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
