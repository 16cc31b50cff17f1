//! Site-Distill main entry point
//!
//! Command-line interface for harvesting one website's text into the
//! ingestion service.

use anyhow::Result;
use clap::Parser;
use site_distill::config::{load_config, Config};
use site_distill::ingest::HttpIngestClient;
use site_distill::pipeline::{run_pipeline, HarvestRequest};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Site-Distill: crawl one website and ingest its text content
///
/// Fetches the start URL, follows the same-domain links found on it,
/// extracts readable text from every visited page, and hands the combined
/// document to the configured ingestion service.
#[derive(Parser, Debug)]
#[command(name = "site-distill")]
#[command(version)]
#[command(about = "Crawl a website and ingest its text content", long_about = None)]
struct Cli {
    /// Start URL of the website to harvest (e.g. https://example.com/)
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum number of pages to visit
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Document name for the ingested text (default: derived from the host)
    #[arg(long, value_name = "NAME")]
    file_name: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append log output to this file in addition to the console
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    if let Some(max_pages) = cli.max_pages {
        anyhow::ensure!(max_pages >= 1, "--max-pages must be a positive integer");
    }

    let config = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    // The ingest base URL is validated on config load; the default always
    // parses.
    let ingest_base = Url::parse(&config.ingest.base_url)?;
    let ingestor = HttpIngestClient::new(reqwest::Client::builder().build()?, &ingest_base)?;

    let request = HarvestRequest {
        start_url: cli.url,
        max_pages: cli.max_pages,
        document_name: cli.file_name,
    };

    match run_pipeline(&config, &request, &ingestor).await {
        Ok(documents) => {
            tracing::info!(
                "Harvest complete: {} document(s) ingested",
                documents.len()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the tracing subscriber based on verbosity level
///
/// When a log file is given, a second plain-text layer appends to it in
/// addition to the console output.
fn setup_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_distill=info,warn"),
            1 => EnvFilter::new("site_distill=debug,info"),
            2 => EnvFilter::new("site_distill=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let file_layer = match log_file {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    Ok(())
}
