// ABOUTME: Text conversion helpers for extracted content.
// ABOUTME: Handles HTML to plain text conversion and whitespace normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

static BR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?\s*>").unwrap());
static HORIZONTAL_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());
static MULTI_NEWLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Replace `<br>` tag variants with newlines before parsing.
fn preprocess_br_tags(html: &str) -> String {
    BR_RE.replace_all(html, "\n").to_string()
}

/// Convert HTML to plain text by collecting text nodes.
///
/// Treats `<br>` as newline, collapses horizontal whitespace while
/// preserving line breaks, collapses runs of newlines to one, and trims
/// leading/trailing whitespace.
pub fn html_to_text(html: &str) -> String {
    let preprocessed = preprocess_br_tags(html);

    let document = Html::parse_document(&preprocessed);
    let raw_text: String = document.root_element().text().collect::<Vec<_>>().join(" ");

    let normalized = HORIZONTAL_WS_RE.replace_all(&raw_text, " ");
    let collapsed = MULTI_NEWLINE_RE.replace_all(&normalized, "\n");

    collapsed.trim().to_string()
}

/// Collapse all whitespace runs in text into single spaces.
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
