// ABOUTME: Article struct holding the extracted title and plain-text content.
// ABOUTME: Includes the word count helper and convenience predicates.

use serde::{Deserialize, Serialize};

/// The result of reading a page: the extracted article.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub content: String,
    pub word_count: i32,
}

impl Article {
    /// Returns true if the article has no meaningful content.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

/// Count words in a text string using whitespace splitting.
pub fn word_count(text: &str) -> i32 {
    text.split_whitespace().count() as i32
}
