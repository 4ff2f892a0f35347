// ABOUTME: Readability scoring heuristics for locating the main article region.
// ABOUTME: Scores blocks by text density, link density and tag/class semantics, then merges siblings.

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

use crate::formats::normalize_spaces;

static PARAGRAPH_TAGS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(p|li|span|pre)$").unwrap());
static CHILD_CONTENT_TAGS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(td|blockquote|ol|ul|dl)$").unwrap());
static BAD_TAGS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(address|form)$").unwrap());
pub static NON_CANDIDATE_TAGS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(br|b|i|label|hr|area|base|basefont|input|img|link|meta)$").unwrap()
});

static POSITIVE_HINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)article|blog|body|content|entry|hentry|main|page|post|story|text").unwrap()
});
static NEGATIVE_HINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)advert|banner|breadcrumb|byline|combx|comment|contact|credit|crumb|foot|footer|info|masthead|media|meta|modal|outbrain|promo|related|scroll|share|shopping|shoutbox|sidebar|sponsor|tags|tools|widget").unwrap()
});

// Class/id patterns deciding whether a block may be a top candidate at all.
static UNLIKELY_CANDIDATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ad-break|adbox|advert|agegate|aux|combx|comment|disqus|extra|foot|header|hidden|loader|login|menu|meta|nav|outbrain|pager|pagination|popup|related|remark|rss|share|shoutbox|sidebar|sponsor|taboola|tools").unwrap()
});
static LIKELY_CANDIDATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)and|article|body|column|content|entry|hentry|main|page|posts|shadow").unwrap()
});

/// Score storage keyed by node id.
pub type NodeScores = HashMap<NodeId, i32>;

fn get_score(node_id: NodeId, scores: &NodeScores) -> i32 {
    *scores.get(&node_id).unwrap_or(&0)
}

/// Count commas in text (more commas correlates with prose).
fn score_commas(text: &str) -> i32 {
    text.matches(',').count() as i32
}

/// Bonus for text length, one point per 50-character chunk.
fn score_length(text: &str) -> i32 {
    (text.len() / 50) as i32
}

/// Multi-factor paragraph scoring: commas, length, short-text penalty.
fn score_paragraph(text: &str) -> i32 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    let mut score = score_commas(text) + score_length(text);

    if text.len() < 20 {
        score -= 10;
    }
    if text.len() >= 50 && text.len() <= 200 {
        score += 5;
    }

    score
}

/// Score a node from its tag semantics.
fn score_node(element: &ElementRef) -> i32 {
    let tag = element.value().name().to_lowercase();

    if PARAGRAPH_TAGS_RE.is_match(&tag) {
        let text = element.text().collect::<String>();
        return score_paragraph(&text);
    }
    if tag == "div" {
        return 5;
    }
    if CHILD_CONTENT_TAGS_RE.is_match(&tag) {
        return 3;
    }
    if BAD_TAGS_RE.is_match(&tag) {
        return -3;
    }
    if tag == "th" {
        return -5;
    }

    0
}

/// Weight from class and id hints.
pub fn class_weight(element: &ElementRef) -> i32 {
    let class = element.value().attr("class").unwrap_or("");
    let id = element.value().attr("id").unwrap_or("");
    let mut score = 0i32;

    if !id.is_empty() {
        if POSITIVE_HINT_RE.is_match(id) {
            score += 25;
        }
        if NEGATIVE_HINT_RE.is_match(id) {
            score -= 25;
        }
    }

    if !class.is_empty() && score == 0 {
        if POSITIVE_HINT_RE.is_match(class) {
            score += 25;
        }
        if NEGATIVE_HINT_RE.is_match(class) {
            score -= 25;
        }
    }

    score
}

/// Ratio of link text to total text within an element.
pub fn link_density(element: &ElementRef) -> f64 {
    let total_text = element.text().collect::<String>();
    let total_len = total_text.len();
    if total_len == 0 {
        return 0.0;
    }

    let a_selector = Selector::parse("a").unwrap();
    let link_text_len: usize = element
        .select(&a_selector)
        .map(|a| a.text().collect::<String>().len())
        .sum();

    link_text_len as f64 / total_len as f64
}

/// Check if text ends with sentence-ending punctuation.
fn has_sentence_end(text: &str) -> bool {
    matches!(
        text.trim().chars().last(),
        Some('.' | '!' | '?' | ':' | ';')
    )
}

/// Check whether class/id hints rule an element out as a top candidate.
pub fn is_unlikely_candidate(element: &ElementRef) -> bool {
    // Links are handled by link density, not class hints.
    if element.value().name().eq_ignore_ascii_case("a") {
        return false;
    }

    let class = element.value().attr("class").unwrap_or("");
    let id = element.value().attr("id").unwrap_or("");
    if class.is_empty() && id.is_empty() {
        return false;
    }

    let class_and_id = format!("{} {}", class, id);
    if LIKELY_CANDIDATE_RE.is_match(&class_and_id) {
        return false;
    }
    UNLIKELY_CANDIDATE_RE.is_match(&class_and_id)
}

/// Score every paragraph-like block in the document, propagating a share of
/// each score to its parent and grandparent so container elements accumulate
/// the score of the prose they hold.
pub fn score_content(doc: &Html) -> NodeScores {
    fn init_score(element: &ElementRef, scores: &mut NodeScores) -> i32 {
        let existing = get_score(element.id(), scores);
        if existing != 0 {
            return existing;
        }

        let score = score_node(element) + class_weight(element);
        if let Some(parent) = element.parent().and_then(ElementRef::wrap) {
            let addition = (score as f64 * 0.25) as i32;
            let parent_score = get_score(parent.id(), scores);
            scores.insert(parent.id(), parent_score + addition);
        }
        score
    }

    fn add_score(element: &ElementRef, amount: i32, scores: &mut NodeScores) {
        let base = init_score(element, scores);
        scores.insert(element.id(), base + amount);
    }

    let mut scores: NodeScores = HashMap::new();

    let p_pre_selector = Selector::parse("p, pre").unwrap();
    for element in doc.select(&p_pre_selector) {
        if scores.contains_key(&element.id()) {
            continue;
        }

        let score = init_score(&element, &mut scores);
        scores.insert(element.id(), score);

        let raw_score = score_node(&element);
        if let Some(parent) = element.parent().and_then(ElementRef::wrap) {
            add_score(&parent, raw_score, &mut scores);
            if let Some(grandparent) = parent.parent().and_then(ElementRef::wrap) {
                add_score(&grandparent, raw_score / 2, &mut scores);
            }
        }
    }

    scores
}

/// Pick the highest-scoring candidate, penalizing link-heavy blocks and
/// skipping elements whose class/id hints mark them as chrome. Falls back
/// to `<body>` when nothing scores above zero.
pub fn find_top_candidate<'a>(doc: &'a Html, scores: &NodeScores) -> Option<ElementRef<'a>> {
    let mut best: Option<ElementRef<'a>> = None;
    let mut top_score = 0i32;

    let all_selector = Selector::parse("*").unwrap();
    for element in doc.select(&all_selector) {
        let Some(&score) = scores.get(&element.id()) else {
            continue;
        };

        let tag = element.value().name().to_lowercase();
        if tag == "body" || tag == "html" || NON_CANDIDATE_TAGS_RE.is_match(&tag) {
            continue;
        }
        if is_unlikely_candidate(&element) {
            continue;
        }

        let density = link_density(&element);
        let adjusted = if density > 0.5 {
            ((score as f64) * (1.0 - density)).round() as i32
        } else {
            score
        };

        if adjusted > top_score {
            top_score = adjusted;
            best = Some(element);
        }
    }

    best.or_else(|| {
        Selector::parse("body")
            .ok()
            .and_then(|sel| doc.select(&sel).next())
    })
}

/// Merge qualifying siblings around the top candidate. Siblings join when
/// their score clears a threshold derived from the top score, or when they
/// are substantial low-link-density paragraphs.
pub fn merge_siblings(candidate: ElementRef, top_score: i32, scores: &NodeScores) -> String {
    let parent_node = match candidate.parent() {
        Some(p) => p,
        None => return candidate.html(),
    };

    let sibling_threshold = 10i32.max((top_score as f64 * 0.25) as i32);
    let candidate_class = candidate.value().attr("class").unwrap_or("");

    let mut included: Vec<ElementRef> = Vec::new();

    for child in parent_node.children() {
        let Some(sibling) = ElementRef::wrap(child) else {
            continue;
        };

        let tag = sibling.value().name().to_lowercase();
        if NON_CANDIDATE_TAGS_RE.is_match(&tag) {
            continue;
        }

        if sibling.id() == candidate.id() {
            included.push(sibling);
            continue;
        }

        let sibling_score = get_score(sibling.id(), scores);
        if sibling_score <= 0 {
            continue;
        }

        let density = link_density(&sibling);
        let mut content_bonus = 0i32;
        if density < 0.05 {
            content_bonus += 20;
        }
        if density >= 0.5 {
            continue;
        }

        let sibling_class = sibling.value().attr("class").unwrap_or("");
        if !sibling_class.is_empty() && sibling_class == candidate_class {
            content_bonus += (top_score as f64 * 0.2) as i32;
        }

        if sibling_score + content_bonus >= sibling_threshold {
            included.push(sibling);
            continue;
        }

        if tag == "p" {
            let sibling_text = sibling.text().collect::<String>();
            let text_len = normalize_spaces(&sibling_text).len();

            if text_len > 80 && density < 0.25 {
                included.push(sibling);
            } else if text_len <= 80 && density == 0.0 && has_sentence_end(&sibling_text) {
                included.push(sibling);
            }
        }
    }

    if included.len() <= 1 {
        return candidate.html();
    }

    let mut output = String::from("<div>");
    for node in included {
        output.push_str(&node.html());
    }
    output.push_str("</div>");
    output
}

/// Full candidate selection: score the document, pick the top block, merge
/// its qualifying siblings, and return the resulting HTML.
pub fn extract_best_content(doc: &Html) -> Option<String> {
    let scores = score_content(doc);
    let candidate = find_top_candidate(doc, &scores)?;
    let top_score = get_score(candidate.id(), &scores);
    Some(merge_siblings(candidate, top_score, &scores))
}
