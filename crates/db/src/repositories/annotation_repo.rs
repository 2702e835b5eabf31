//! Repository for the `annotations` table.

use obramap_core::types::DbId;
use sqlx::PgPool;

use crate::models::annotation::{Annotation, CreateAnnotation};

const COLUMNS: &str = "id, project_id, distrito_name, title, content, created_at";

pub struct AnnotationRepo;

impl AnnotationRepo {
    /// All annotations attached to a project.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Annotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotations WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Annotation>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Attach an annotation to a project.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateAnnotation,
    ) -> Result<Annotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO annotations (project_id, distrito_name, title, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(project_id)
            .bind(&input.distrito_name)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Delete an annotation scoped to its project. Returns `true` if a row
    /// was removed.
    pub async fn delete(
        pool: &PgPool,
        project_id: DbId,
        annotation_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM annotations WHERE id = $1 AND project_id = $2")
            .bind(annotation_id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
