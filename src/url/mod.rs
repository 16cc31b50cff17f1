//! URL helpers: crawl scoping and document naming

use url::Url;

/// Suffix appended to document names derived from a host
const DOCUMENT_NAME_SUFFIX: &str = "_scraped_content";

/// Returns true if two URLs share an authority (host plus effective port)
///
/// This is the same-domain rule for crawl expansion: a discovered link is
/// only followed when it points at the host and port the crawl started on.
/// Explicit default ports compare equal to their implied form, so
/// `https://example.com/` and `https://example.com:443/` match.
pub fn same_authority(candidate: &Url, base: &Url) -> bool {
    candidate.host_str() == base.host_str()
        && candidate.port_or_known_default() == base.port_or_known_default()
}

/// Derives a document name from a URL's host
///
/// A leading `www.` is stripped and a fixed suffix appended.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_distill::url::derive_document_name;
///
/// let url = Url::parse("https://www.example.com/").unwrap();
/// assert_eq!(derive_document_name(&url), "example.com_scraped_content");
/// ```
pub fn derive_document_name(url: &Url) -> String {
    let host = url.host_str().unwrap_or("site");
    let host = host.strip_prefix("www.").unwrap_or(host);
    format!("{}{}", host, DOCUMENT_NAME_SUFFIX)
}
