#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A single source failed to fetch or parse. Recoverable: the pipeline
    /// logs it and continues with the remaining sources.
    #[error("Source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// The candidate batch could not be stored. Rolls back the whole insert.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
