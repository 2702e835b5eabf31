use std::time::Duration;

/// Ingestion job configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Seconds between scheduled pipeline runs; `0` disables the scheduler.
    pub interval_secs: u64,
    /// Fixed per-source timeout. A hung source forfeits its run.
    pub source_timeout: Duration,
    /// District assigned to a candidate when extraction finds none.
    pub fallback_district: String,
}

impl IngestConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default |
    /// |-----------------------------|---------|
    /// | `INGEST_INTERVAL_SECS`      | `3600`  |
    /// | `INGEST_SOURCE_TIMEOUT_SECS`| `15`    |
    /// | `INGEST_FALLBACK_DISTRICT`  | `Lima`  |
    pub fn from_env() -> Self {
        let interval_secs: u64 = std::env::var("INGEST_INTERVAL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("INGEST_INTERVAL_SECS must be a valid u64");

        let source_timeout_secs: u64 = std::env::var("INGEST_SOURCE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .expect("INGEST_SOURCE_TIMEOUT_SECS must be a valid u64");

        let fallback_district =
            std::env::var("INGEST_FALLBACK_DISTRICT").unwrap_or_else(|_| "Lima".into());

        Self {
            interval_secs,
            source_timeout: Duration::from_secs(source_timeout_secs),
            fallback_district,
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3600,
            source_timeout: Duration::from_secs(15),
            fallback_district: "Lima".into(),
        }
    }
}
