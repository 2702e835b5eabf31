//! External candidate-project sources.
//!
//! Each source fetches one upstream page and parses it into candidate
//! records. Failures are isolated per source by the pipeline; a source must
//! never take the whole run down.

use async_trait::async_trait;
use obramap_core::extract::{extract_districts, looks_like_project};
use obramap_db::models::project::NewCandidate;
use scraper::{ElementRef, Html, Selector};

use crate::error::IngestError;

/// Max candidates taken from one source page per run.
const MAX_ITEMS_PER_SOURCE: usize = 10;
/// Candidate name/description length caps (chars, not bytes).
const MAX_NAME_CHARS: usize = 200;
const MAX_DESCRIPTION_CHARS: usize = 500;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// A pluggable external source of candidate projects.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self) -> Result<Vec<NewCandidate>, IngestError>;
}

/// Scrapes project announcements from the gob.pe news search for the
/// Municipalidad de Lima.
pub struct GobPeSource {
    client: reqwest::Client,
    search_url: String,
    fallback_district: String,
}

impl GobPeSource {
    pub const DEFAULT_SEARCH_URL: &'static str =
        "https://www.gob.pe/busquedas?contenido%5B%5D=noticias&institucion%5B%5D=munilima&term=obra+proyecto";

    pub fn new(timeout: std::time::Duration, fallback_district: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            search_url: Self::DEFAULT_SEARCH_URL.to_string(),
            fallback_district,
        }
    }

    /// Override the search URL (tests point this at a local fixture server).
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }
}

#[async_trait]
impl ProjectSource for GobPeSource {
    fn name(&self) -> &str {
        "gob_pe"
    }

    async fn fetch(&self) -> Result<Vec<NewCandidate>, IngestError> {
        let response = self
            .client
            .get(&self.search_url)
            .send()
            .await
            .map_err(|e| IngestError::SourceUnavailable {
                source_name: self.name().to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(IngestError::SourceUnavailable {
                source_name: self.name().to_string(),
                reason: format!("HTTP status {}", response.status()),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| IngestError::SourceUnavailable {
                source_name: self.name().to_string(),
                reason: e.to_string(),
            })?;

        let candidates =
            parse_search_results(&html, &self.search_url, &self.fallback_district);
        tracing::info!(
            source = self.name(),
            count = candidates.len(),
            "Scraped candidate projects"
        );
        Ok(candidates)
    }
}

/// Parse a gob.pe search-results page into candidate project records.
///
/// Per item: title from the first heading/link, summary from the first
/// paragraph (falling back to the title), link resolved against `base_url`.
/// Items whose title does not read like a project announcement are dropped;
/// items without a recognisable district default to `fallback_district`.
pub fn parse_search_results(
    html: &str,
    base_url: &str,
    fallback_district: &str,
) -> Vec<NewCandidate> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse(".list-group-item, .card, article").unwrap();
    let title_selector = Selector::parse("h2, h3, .title, a").unwrap();
    let summary_selector = Selector::parse("p, .description, .summary").unwrap();
    let link_selector = Selector::parse("a[href]").unwrap();

    let mut candidates = Vec::new();

    for item in document.select(&item_selector).take(MAX_ITEMS_PER_SOURCE) {
        let Some(title) = item.select(&title_selector).next().map(element_text) else {
            continue;
        };
        if title.is_empty() || !looks_like_project(&title) {
            continue;
        }

        let description = item
            .select(&summary_selector)
            .next()
            .map(element_text)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| title.clone());

        let source_url = item
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| resolve_link(base_url, href))
            .unwrap_or_else(|| base_url.to_string());

        let full_text = format!("{title} {description}");
        let mut districts: Vec<String> = extract_districts(&full_text)
            .into_iter()
            .map(str::to_string)
            .collect();
        if districts.is_empty() {
            districts.push(fallback_district.to_string());
        }

        candidates.push(NewCandidate {
            name: truncate_chars(&title, MAX_NAME_CHARS),
            description: Some(truncate_chars(&description, MAX_DESCRIPTION_CHARS)),
            districts,
            source_url: Some(source_url),
        });
    }

    candidates
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn resolve_link(base_url: &str, href: &str) -> Option<String> {
    let base = url::Url::parse(base_url).ok()?;
    let resolved = base.join(href).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved.to_string()),
        _ => None,
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
