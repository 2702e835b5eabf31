//! The ingestion pipeline: fetch all sources, merge with the fallback list,
//! dedupe, and store the surviving candidates.

use obramap_core::dedupe::{dedup_key, dedupe_by_key};
use obramap_db::models::project::NewCandidate;
use obramap_db::repositories::ProjectRepo;
use sqlx::PgPool;

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::known::known_projects;
use crate::source::ProjectSource;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Candidates after dedup, before storage.
    pub collected: usize,
    /// Projects actually inserted.
    pub inserted: u32,
    /// Sources that failed or timed out this run.
    pub sources_failed: usize,
}

pub struct IngestionPipeline {
    sources: Vec<Box<dyn ProjectSource>>,
    config: IngestConfig,
}

impl IngestionPipeline {
    pub fn new(sources: Vec<Box<dyn ProjectSource>>, config: IngestConfig) -> Self {
        Self { sources, config }
    }

    /// Fetch every source and merge with the static fallback list.
    ///
    /// A failing or hanging source is logged and contributes nothing; it can
    /// never abort the run or affect other sources. The fallback list is
    /// always appended, so the result is never empty. The merged set is
    /// deduplicated by normalised name, first seen wins.
    pub async fn collect(&self) -> (Vec<NewCandidate>, usize) {
        let mut candidates = Vec::new();
        let mut sources_failed = 0usize;

        for source in &self.sources {
            let fetched =
                tokio::time::timeout(self.config.source_timeout, source.fetch()).await;
            match fetched {
                Ok(Ok(batch)) => candidates.extend(batch),
                Ok(Err(err)) => {
                    sources_failed += 1;
                    tracing::warn!(source = source.name(), error = %err, "Source failed, skipping");
                }
                Err(_) => {
                    sources_failed += 1;
                    tracing::warn!(
                        source = source.name(),
                        timeout_secs = self.config.source_timeout.as_secs(),
                        "Source timed out, skipping"
                    );
                }
            }
        }

        candidates.extend(known_projects());

        let unique = dedupe_by_key(candidates, |c| dedup_key(&c.name));
        (unique, sources_failed)
    }

    /// Run the full pipeline: collect, then insert all candidates (with
    /// their district rows) in one transaction. Additive-only; existing
    /// projects are never modified. Reconciling candidates against existing
    /// rows across runs is out of scope.
    pub async fn run(&self, pool: &PgPool) -> Result<IngestReport, IngestError> {
        let (candidates, sources_failed) = self.collect().await;
        let collected = candidates.len();
        let inserted = ProjectRepo::insert_candidates(pool, &candidates).await?;

        tracing::info!(collected, inserted, sources_failed, "Ingestion run finished");
        Ok(IngestReport {
            collected,
            inserted,
            sources_failed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl ProjectSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }
        async fn fetch(&self) -> Result<Vec<NewCandidate>, IngestError> {
            Err(IngestError::SourceUnavailable {
                source_name: "failing".into(),
                reason: "connection refused".into(),
            })
        }
    }

    struct HangingSource;

    #[async_trait]
    impl ProjectSource for HangingSource {
        fn name(&self) -> &str {
            "hanging"
        }
        async fn fetch(&self) -> Result<Vec<NewCandidate>, IngestError> {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
            Ok(Vec::new())
        }
    }

    struct FixedSource(Vec<NewCandidate>);

    #[async_trait]
    impl ProjectSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }
        async fn fetch(&self) -> Result<Vec<NewCandidate>, IngestError> {
            Ok(self.0.clone())
        }
    }

    fn short_timeout_config() -> IngestConfig {
        IngestConfig {
            source_timeout: std::time::Duration::from_millis(50),
            ..IngestConfig::default()
        }
    }

    #[tokio::test]
    async fn all_sources_failing_still_yields_fallback_set() {
        let pipeline = IngestionPipeline::new(
            vec![Box::new(FailingSource), Box::new(FailingSource)],
            short_timeout_config(),
        );
        let (candidates, failed) = pipeline.collect().await;
        assert_eq!(failed, 2);
        assert_eq!(candidates.len(), crate::known::known_projects().len());
    }

    #[tokio::test]
    async fn hanging_source_is_bounded_by_timeout() {
        let pipeline =
            IngestionPipeline::new(vec![Box::new(HangingSource)], short_timeout_config());
        let start = std::time::Instant::now();
        let (candidates, failed) = pipeline.collect().await;
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
        assert_eq!(failed, 1);
        assert!(!candidates.is_empty());
    }

    #[tokio::test]
    async fn duplicates_across_source_and_fallback_collapse() {
        // Same name as a fallback entry, different casing.
        let dup = NewCandidate {
            name: "ampliación norte del metropolitano".into(),
            description: None,
            districts: vec!["San Miguel".into()],
            source_url: None,
        };
        let fresh = NewCandidate {
            name: "Puente peatonal Rímac".into(),
            description: None,
            districts: vec!["Rímac".into()],
            source_url: None,
        };
        let pipeline = IngestionPipeline::new(
            vec![Box::new(FixedSource(vec![dup, fresh]))],
            short_timeout_config(),
        );
        let (candidates, failed) = pipeline.collect().await;
        assert_eq!(failed, 0);
        // 2 from the source + 5 fallback, minus the cross-set duplicate.
        assert_eq!(candidates.len(), 6);
        // First seen wins: the source's casing survives.
        assert!(candidates
            .iter()
            .any(|c| c.name == "ampliación norte del metropolitano"));
        assert!(!candidates
            .iter()
            .any(|c| c.name == "Ampliación Norte del Metropolitano"));
    }
}
