//! Plain-text extraction from HTML
//!
//! Converts a raw HTML body into normalized text: non-content subtrees are
//! removed wholesale, remaining text nodes are separated by line breaks,
//! every line is trimmed, and blank lines are dropped.

use scraper::{Html, Node};

/// Elements whose entire subtree is excluded from extraction, regardless of
/// any visible content inside them.
const EXCLUDED_ELEMENTS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// Extracts the readable text from an HTML body
///
/// Pure function: no side effects, no network. Output lines are trimmed and
/// never empty; blocks of text from different elements are separated by a
/// single newline.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut chunks: Vec<String> = Vec::new();
    let mut stack = vec![document.tree.root()];

    // Depth-first walk in document order; excluded elements are not
    // descended into, which drops their whole subtree.
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(element) => {
                if EXCLUDED_ELEMENTS.contains(&element.name()) {
                    continue;
                }
            }
            Node::Text(text) => {
                chunks.push(text.to_string());
            }
            _ => {}
        }

        let children: Vec<_> = node.children().collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    chunks
        .join("\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
