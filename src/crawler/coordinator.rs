//! Crawl coordinator - main crawl loop
//!
//! Drives the frontier through fetch, extraction, and aggregation. Link
//! discovery runs once, against the seed page's already-fetched body, and
//! feeds the frontier; every later page is fetched and extracted only.
//!
//! Per-page failures never abort the crawl: the URL is logged at warning
//! level and the loop continues with the next frontier entry.

use crate::crawler::aggregator::{aggregate, ExtractedPage};
use crate::crawler::extractor::extract_text;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::frontier::{CrawlPhase, Frontier};
use crate::crawler::links::discover_links;
use crate::CrawlError;
use reqwest::Client;
use url::Url;

/// Bounds for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Maximum number of pages visited
    pub max_pages: usize,
    /// Maximum number of URLs waiting in the frontier
    pub max_pending: usize,
}

/// Outcome of a completed crawl
#[derive(Debug)]
pub struct CrawlSummary {
    /// The aggregated document, provenance headers included
    pub document: String,
    /// Pages fetched and extracted successfully
    pub pages_fetched: usize,
    /// Pages skipped because of a per-page error
    pub pages_failed: usize,
}

/// Sequential crawl driver for one run
pub struct Coordinator<'a> {
    client: &'a Client,
    frontier: Frontier,
    pages: Vec<ExtractedPage>,
    pages_failed: usize,
}

impl<'a> Coordinator<'a> {
    /// Creates a coordinator for one crawl starting at `seed`
    pub fn new(client: &'a Client, seed: Url, options: &CrawlOptions) -> Self {
        Self {
            client,
            frontier: Frontier::new(seed, options.max_pages, options.max_pending),
            pages: Vec::new(),
            pages_failed: 0,
        }
    }

    /// Runs the crawl to exhaustion and returns the aggregated result
    pub async fn run(mut self) -> CrawlSummary {
        while let Some(url) = self.frontier.next_target() {
            tracing::info!("Fetching {}", url);

            if let Err(e) = self.process_page(&url).await {
                tracing::warn!("Skipping {}: {}", url, e);
                self.pages_failed += 1;
            }
        }

        let pages_fetched = self.pages.len();
        let document = aggregate(&self.pages);

        tracing::debug!(
            "Crawl finished: {} page(s) aggregated, {} skipped",
            pages_fetched,
            self.pages_failed
        );

        CrawlSummary {
            document,
            pages_fetched,
            pages_failed: self.pages_failed,
        }
    }

    /// Fetches, expands (seed only), and extracts a single page
    async fn process_page(&mut self, url: &Url) -> Result<(), CrawlError> {
        let body = fetch_page(self.client, url).await?;

        // The seed body is reused for link discovery; the page is not
        // fetched a second time. A discovery failure is logged and the
        // seed's own text is still kept.
        if self.frontier.phase() == CrawlPhase::Expanding {
            match discover_links(&body, url) {
                Ok(links) => {
                    let enqueued = self.frontier.expand(links);
                    tracing::debug!("Queued {} link(s) from {}", enqueued, url);
                }
                Err(e) => {
                    tracing::warn!("Could not extract links from {}: {}", url, e);
                }
            }
        }

        self.pages.push(ExtractedPage {
            url: url.clone(),
            text: extract_text(&body),
        });

        Ok(())
    }
}
