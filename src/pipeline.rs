//! End-to-end harvest pipeline
//!
//! Ties the crawl to the ingestion boundary: build the HTTP client, crawl
//! the site, report what was gathered, then hand the aggregated document to
//! the ingestion service exactly once. Ingestion runs even when the
//! document is short or empty; shortness only raises a warning.

use crate::config::Config;
use crate::crawler::{build_http_client, Coordinator, CrawlOptions};
use crate::ingest::{IngestedDocument, Ingestor};
use crate::url::derive_document_name;
use crate::{DistillError, Result};
use url::Url;

/// Minimum trimmed aggregate length below which a low-content warning is
/// raised
const LOW_CONTENT_THRESHOLD: usize = 100;

/// One harvest invocation: what to crawl and what to call the result
#[derive(Debug, Clone)]
pub struct HarvestRequest {
    /// Start URL for the crawl
    pub start_url: String,
    /// Overrides the configured page limit when set
    pub max_pages: Option<usize>,
    /// Overrides the derived document name when set
    pub document_name: Option<String>,
}

/// Crawls the site and ingests the aggregated document
///
/// Per-page failures are absorbed inside the crawl; errors returned from
/// here are fatal to the whole run: an unparseable start URL, a client that
/// cannot be built, or a failure at the ingestion boundary. The fetch
/// client is released before ingestion begins, on every path.
pub async fn run_pipeline<I: Ingestor>(
    config: &Config,
    request: &HarvestRequest,
    ingestor: &I,
) -> Result<Vec<IngestedDocument>> {
    let seed = Url::parse(&request.start_url).map_err(|source| DistillError::StartUrl {
        url: request.start_url.clone(),
        source,
    })?;

    let document_name = request
        .document_name
        .clone()
        .unwrap_or_else(|| derive_document_name(&seed));

    let options = CrawlOptions {
        max_pages: request.max_pages.unwrap_or(config.crawl.max_pages),
        max_pending: config.crawl.max_pending,
    };

    let client = build_http_client(&config.http).map_err(DistillError::Client)?;

    tracing::info!("Starting crawl at {}", seed);
    let summary = Coordinator::new(&client, seed, &options).run().await;
    drop(client);

    tracing::info!(
        "Crawled {} page(s) ({} skipped), {} characters of text",
        summary.pages_fetched,
        summary.pages_failed,
        summary.document.len()
    );

    if summary.document.trim().len() < LOW_CONTENT_THRESHOLD {
        tracing::warn!(
            "Aggregated text is under {} characters; the site may require \
             JavaScript or block crawlers",
            LOW_CONTENT_THRESHOLD
        );
    }

    tracing::info!("Ingesting document as '{}'", document_name);
    let documents = ingestor.ingest(&document_name, &summary.document).await?;

    tracing::info!("Ingested {} document(s)", documents.len());
    for document in &documents {
        tracing::info!("  Document ID: {}", document.doc_id);
    }

    Ok(documents)
}
