// ABOUTME: Extractor that isolates the main article text from a sanitized document.
// ABOUTME: Applies readability scoring and converts the winning region to trimmed plain text.

use scraper::{Html, Selector};
use url::Url;

use crate::article::{word_count, Article};
use crate::dom::scoring::extract_best_content;
use crate::error::ReadError;
use crate::formats::html_to_text;
use crate::sanitize::SanitizedPage;

/// Inner HTML of the `<body>` element, used as the last-resort content region.
fn body_inner_html(doc: &Html) -> Option<String> {
    let selector = Selector::parse("body").ok()?;
    doc.select(&selector).next().map(|body| body.inner_html())
}

/// Extract the main article from a sanitized page.
///
/// Re-parses the sanitized HTML, scores block-level regions, and converts
/// the winning region to plain text. An empty result is an explicit
/// `NoContent` failure, never an empty-string success.
pub fn extract(page: &SanitizedPage, url: &Url) -> Result<Article, ReadError> {
    let doc = Html::parse_document(&page.html);

    let content_html = extract_best_content(&doc)
        .or_else(|| body_inner_html(&doc))
        .unwrap_or_default();

    let content = html_to_text(&content_html);
    if content.is_empty() {
        return Err(ReadError::no_content(
            url.as_str(),
            "Extract",
            Some(anyhow::anyhow!("no viable content region in document")),
        ));
    }

    let words = word_count(&content);
    Ok(Article {
        url: url.to_string(),
        title: page.title.clone(),
        content,
        word_count: words,
    })
}
