//! Site-Distill: a single-site text harvester
//!
//! This crate crawls one website shallowly (the seed page plus the
//! same-domain links it references), extracts the readable text from every
//! fetched page, and hands the combined document to a text-ingestion service.

pub mod config;
pub mod crawler;
pub mod ingest;
pub mod pipeline;
pub mod url;

use thiserror::Error;

/// Main error type for a harvest run
#[derive(Debug, Error)]
pub enum DistillError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid start URL '{url}': {source}")]
    StartUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Ingestion error: {0}")]
    Ingest(#[from] IngestError),
}

/// Per-page crawl errors
///
/// Each variant is recoverable: the offending page is logged and skipped,
/// and the crawl continues with the next frontier entry.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("transport error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("parse error for {url}: {message}")]
    Parse { url: String, message: String },
}

/// Failures at the ingestion boundary; fatal to the run
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("ingestion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ingestion service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid ingestion endpoint: {0}")]
    Endpoint(#[from] ::url::ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, DistillError>;

// Re-export commonly used types
pub use self::url::derive_document_name;
pub use config::Config;
pub use crawler::{CrawlOptions, CrawlSummary};
pub use ingest::{HttpIngestClient, IngestedDocument, Ingestor};
pub use pipeline::{run_pipeline, HarvestRequest};
