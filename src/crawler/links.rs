//! Same-domain link discovery
//!
//! Parses anchor hrefs out of one page and resolves them against the base
//! URL. Only links that stay on the base URL's authority survive; everything
//! else is silently dropped and never fetched.

use crate::url::same_authority;
use crate::CrawlError;
use scraper::{Html, Selector};
use url::Url;

/// Schemes that are never crawlable and are skipped before resolution
const SKIPPED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Extracts the in-scope links from an HTML body
///
/// Every `<a href="...">` is considered in document order. Hrefs are
/// resolved against `base_url`, so relative links land on the base authority
/// by construction. Resolved URLs pointing at a different authority are
/// dropped. Fragments are stripped so anchor variants of one page collapse
/// to a single target.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The base URL for resolving relative links
pub fn discover_links(html: &str, base_url: &Url) -> Result<Vec<Url>, CrawlError> {
    let anchor_selector = Selector::parse("a[href]").map_err(|e| CrawlError::Parse {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for element in document.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(resolved) = resolve_href(href, base_url) {
                links.push(resolved);
            }
        }
    }

    Ok(links)
}

/// Resolves a single href to an absolute, in-scope URL
///
/// Returns None for hrefs that must be dropped:
/// - empty or fragment-only values
/// - `javascript:`, `mailto:`, `tel:`, `data:` schemes
/// - values that fail to resolve against the base
/// - non-HTTP(S) resolutions
/// - resolutions whose authority differs from the base URL's
fn resolve_href(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if SKIPPED_SCHEMES
        .iter()
        .any(|scheme| href.starts_with(scheme))
    {
        return None;
    }

    let mut resolved = base_url.join(href).ok()?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    resolved.set_fragment(None);

    if !same_authority(&resolved, base_url) {
        return None;
    }

    Some(resolved)
}
