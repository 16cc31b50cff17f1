//! Aggregation of per-page text into one document

use url::Url;

/// Text extracted from a single fetched page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// The URL the text came from
    pub url: Url,
    /// Normalized plain text of the page; may be empty
    pub text: String,
}

/// Combines extracted pages into one document, in fetch order
///
/// Each page becomes a block headed by a provenance line naming its source
/// URL; blocks are joined with a blank line. A page whose text is empty
/// contributes nothing, not even a header. Zero pages yield the empty
/// string.
pub fn aggregate(pages: &[ExtractedPage]) -> String {
    let blocks: Vec<String> = pages
        .iter()
        .filter(|page| !page.text.is_empty())
        .map(|page| format!("--- Content from {} ---\n\n{}", page.url, page.text))
        .collect();

    blocks.join("\n\n")
}
