//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the shared HTTP client with the identifying user agent
//! - GET requests to fetch page bodies
//! - Classifying failures into transport and status errors
//!
//! There is no retry logic: a failed fetch is reported to the caller, which
//! decides between skip-and-continue and abort.

use crate::config::HttpConfig;
use crate::CrawlError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REDIRECT_LIMIT: usize = 10;

/// Builds the HTTP client shared by the whole crawl
///
/// The client follows redirects (up to 10 hops), applies the configured
/// request timeout, and sends the configured User-Agent with every request.
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use site_distill::config::HttpConfig;
/// use site_distill::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(CONNECT_TIMEOUT)
        .redirect(Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the raw response body
///
/// A single GET with no retries. Failures are classified into:
/// - [`CrawlError::Transport`] - network-level failure (connection refused,
///   timeout, body read error)
/// - [`CrawlError::HttpStatus`] - the server answered with a non-2xx status
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, CrawlError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| CrawlError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|source| CrawlError::Transport {
            url: url.to_string(),
            source,
        })
}
