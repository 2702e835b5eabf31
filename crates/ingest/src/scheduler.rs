//! Periodic ingestion scheduler.
//!
//! Runs the pipeline on a fixed interval on its own tokio task, outside the
//! request path. The pipeline's writes are additive-only inserts, so it is
//! safe to run concurrently with request traffic.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crate::pipeline::IngestionPipeline;

/// Run the pipeline every `interval_secs` until cancelled.
///
/// An `interval_secs` of `0` disables scheduling and returns immediately.
/// The first tick fires after one full interval, not at startup.
pub async fn run(
    pipeline: Arc<IngestionPipeline>,
    pool: PgPool,
    interval_secs: u64,
    cancel: CancellationToken,
) {
    if interval_secs == 0 {
        tracing::info!("Ingestion scheduler disabled (INGEST_INTERVAL_SECS=0)");
        return;
    }

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.tick().await; // consume the immediate first tick

    tracing::info!(interval_secs, "Ingestion scheduler started");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Ingestion scheduler stopping");
                return;
            }
            _ = interval.tick() => {
                match pipeline.run(&pool).await {
                    Ok(report) => tracing::info!(
                        inserted = report.inserted,
                        sources_failed = report.sources_failed,
                        "Scheduled ingestion run complete"
                    ),
                    Err(err) => tracing::error!(error = %err, "Scheduled ingestion run failed"),
                }
            }
        }
    }
}
