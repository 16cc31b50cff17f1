//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with typed failure classification
//! - Plain-text extraction from HTML
//! - Same-domain link discovery
//! - Frontier management with one-hop expansion
//! - Aggregation of per-page text into one document

mod aggregator;
mod coordinator;
mod extractor;
mod fetcher;
mod frontier;
mod links;

pub use aggregator::{aggregate, ExtractedPage};
pub use coordinator::{Coordinator, CrawlOptions, CrawlSummary};
pub use extractor::extract_text;
pub use fetcher::{build_http_client, fetch_page};
pub use frontier::{CrawlPhase, Frontier};
pub use links::discover_links;
