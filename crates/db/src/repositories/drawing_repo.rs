//! Repository for the `drawings` table.

use obramap_core::types::DbId;
use sqlx::PgPool;

use crate::models::drawing::{CreateDrawing, Drawing};

const COLUMNS: &str = "id, project_id, geojson, drawing_type, created_at";

pub struct DrawingRepo;

impl DrawingRepo {
    /// All drawings attached to a project.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Drawing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drawings WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Drawing>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Attach a drawing to a project. The GeoJSON payload is stored as text.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateDrawing,
    ) -> Result<Drawing, sqlx::Error> {
        let query = format!(
            "INSERT INTO drawings (project_id, geojson, drawing_type)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drawing>(&query)
            .bind(project_id)
            .bind(input.geojson.to_string())
            .bind(&input.drawing_type)
            .fetch_one(pool)
            .await
    }

    /// Delete a drawing scoped to its project. Returns `true` if a row was
    /// removed.
    pub async fn delete(
        pool: &PgPool,
        project_id: DbId,
        drawing_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drawings WHERE id = $1 AND project_id = $2")
            .bind(drawing_id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
