//! Project entity model and DTOs.

use obramap_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub verified: bool,
    pub verified_by: Option<DbId>,
    pub created_by: Option<DbId>,
    pub source_url: Option<String>,
    pub scraped_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with its district names, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithDistricts {
    #[serde(flatten)]
    pub project: Project,
    pub districts: Vec<String>,
}

/// DTO for creating a new project through the API.
///
/// `districts` must be non-empty; duplicate names are silently dropped
/// (first occurrence wins) before insertion.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `active` if omitted.
    pub status: Option<String>,
    pub districts: Vec<String>,
}

/// DTO for updating an existing project. All fields are optional; a present
/// `districts` list replaces the full association set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub districts: Option<Vec<String>>,
}

/// An ingested candidate project awaiting human review.
///
/// Stored with `verified = false`, `status = 'scraped'`, and `scraped_at`
/// set to the pipeline run time.
#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub name: String,
    pub description: Option<String>,
    pub districts: Vec<String>,
    pub source_url: Option<String>,
}
