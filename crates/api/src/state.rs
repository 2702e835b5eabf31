use std::sync::Arc;

use obramap_ingest::IngestionPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: obramap_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Ingestion pipeline, shared between the manual-trigger endpoint and
    /// the periodic scheduler.
    pub pipeline: Arc<IngestionPipeline>,
}
