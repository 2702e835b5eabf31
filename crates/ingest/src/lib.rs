//! Candidate-project discovery: source fetchers, the static fallback list,
//! the deduplicating ingestion pipeline, and its periodic scheduler.

pub mod config;
pub mod error;
pub mod known;
pub mod pipeline;
pub mod scheduler;
pub mod source;

pub use config::IngestConfig;
pub use error::IngestError;
pub use pipeline::{IngestReport, IngestionPipeline};
pub use source::{GobPeSource, ProjectSource};
