//! Route definitions for district-scoped queries.

use axum::routing::get;
use axum::Router;

use crate::handlers::district;
use crate::state::AppState;

/// Routes mounted at `/districts`.
///
/// `{names}` is a comma-delimited, URL-encoded district set.
///
/// ```text
/// GET /{names}/projects   -> union of projects across the set
/// GET /{names}/stats      -> aggregate per-status counts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{names}/projects", get(district::projects_in))
        .route("/{names}/stats", get(district::stats))
}
