//! Resolved-identity extractor for Axum handlers.
//!
//! Token verification is owned by the upstream identity provider; by the time
//! a request reaches this service the gateway has already validated it and
//! attached the resolved identity as `x-user-id` / `x-user-role` headers.
//! This extractor only parses that pair; role enforcement happens in the
//! RBAC extractors on top of it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use obramap_core::error::CoreError;
use obramap_core::policy::Role;
use obramap_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved by the external identity provider.
///
/// Use this as an extractor parameter in any handler that requires an
/// identity:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: Role,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id: DbId = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing or invalid x-user-id header".into(),
                ))
            })?;

        let role = parts
            .headers
            .get("x-user-role")
            .and_then(|v| v.to_str().ok())
            .and_then(Role::parse)
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing or unknown x-user-role header".into(),
                ))
            })?;

        Ok(AuthUser { user_id, role })
    }
}
