// ABOUTME: HTML sanitizer that strips non-content elements before extraction.
// ABOUTME: Removes a fixed denylist of structural/media/script tags and captures the page title.

use dom_query::Document;

/// Title used when the document has no usable `<title>` element.
pub const DEFAULT_TITLE: &str = "No title found";

/// Element kinds that never carry article content. Every match is removed
/// together with its subtree, so denylisted elements nested inside other
/// elements (denylisted or not) are removed as well.
pub const DENYLIST: &[&str] = &[
    "footer", "header", "nav", "script", "style", "link", "meta", "noscript", "img", "picture",
    "video", "audio", "iframe", "object", "embed", "param", "track", "source", "canvas", "map",
    "area", "svg", "math",
];

/// A document with all denylisted elements removed, plus its page title.
#[derive(Debug, Clone)]
pub struct SanitizedPage {
    pub title: String,
    pub html: String,
}

/// Strip every denylisted element from `html` and capture the page title.
///
/// Never fails: empty or malformed input yields a minimal document. The
/// operation is idempotent — sanitizing already-sanitized output returns
/// the same document.
pub fn sanitize(html: &str) -> SanitizedPage {
    let doc = Document::from(html);

    let title = doc
        .select("title")
        .iter()
        .next()
        .map(|t| t.text().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    for tag in DENYLIST {
        doc.select(tag).remove();
    }

    SanitizedPage {
        title,
        html: doc.html().to_string(),
    }
}
