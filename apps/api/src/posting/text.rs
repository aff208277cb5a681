//! Turns a fetched job posting page into plain text.

use scraper::{node::Node, ElementRef, Html};

/// Elements whose text never belongs to the posting body.
const SKIPPED_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Visible text of an HTML page, one fragment per line.
///
/// Text nodes are joined with a single space, each line is trimmed and split
/// again on double spaces, and empty fragments are dropped.
pub fn clean_html(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut fragments = Vec::new();
    collect_text(document.root_element(), &mut fragments);
    normalize_lines(&fragments.join(" "))
}

fn collect_text<'a>(element: ElementRef<'a>, out: &mut Vec<&'a str>) {
    if SKIPPED_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push(text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}

/// Trims each line, splits it on runs of two spaces, and keeps the non-empty
/// pieces joined by newlines.
pub fn normalize_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
