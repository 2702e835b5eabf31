//! Route definitions for ingestion control.

use axum::routing::post;
use axum::Router;

use crate::handlers::ingest;
use crate::state::AppState;

/// Routes mounted at `/ingest`.
///
/// ```text
/// POST /run   -> trigger a pipeline run (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/run", post(ingest::run))
}
