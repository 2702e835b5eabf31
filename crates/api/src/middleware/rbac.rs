//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role fails
//! the policy table in `obramap_core::policy`. Use these in route handlers
//! to enforce authorization at the type level; rejection messages state the
//! required role.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use obramap_core::error::CoreError;
use obramap_core::policy::{is_allowed, Action};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a role allowed to create and edit content (`editor` or above).
///
/// ```ignore
/// async fn create(RequireEditor(user): RequireEditor) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireEditor(pub AuthUser);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_allowed(user.role, Action::SuggestEdit) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Editor role or higher required".into(),
            )));
        }
        Ok(RequireEditor(user))
    }
}

/// Requires a role allowed to approve or reject edit suggestions
/// (`verified` or `admin`).
pub struct RequireModerator(pub AuthUser);

impl FromRequestParts<AppState> for RequireModerator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_allowed(user.role, Action::ModerateSuggestion) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Verified or Admin role required".into(),
            )));
        }
        Ok(RequireModerator(user))
    }
}

/// Requires the `admin` role (hard delete, ingestion runs).
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_allowed(user.role, Action::DeleteProject) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
