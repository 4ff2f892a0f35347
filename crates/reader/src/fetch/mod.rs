// ABOUTME: Fetcher abstraction for retrieving page HTML.
// ABOUTME: Defines the Fetch trait, the strategy selector, and the browser-impersonating headers.

pub mod browser;
pub mod http;

use std::fmt;

use async_trait::async_trait;
use url::Url;

use crate::error::ReadError;

/// Desktop Chrome user agent sent by both fetch variants to reduce bot-blocking.
pub const IMPERSONATE_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub(crate) const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub(crate) const REFERER: &str = "https://www.google.com";

/// Decoded page HTML together with the final URL it was fetched from.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    pub html: String,
}

/// Which fetch variant the reader uses, chosen at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStrategy {
    /// One HTTP GET of the raw page body. Fast, no script execution.
    #[default]
    Static,
    /// Headless browser navigation capturing the rendered DOM. Slower,
    /// handles client-rendered pages.
    Rendered,
}

impl fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FetchStrategy::Static => "static",
            FetchStrategy::Rendered => "rendered",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for FetchStrategy {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "rendered" | "browser" => FetchStrategy::Rendered,
            _ => FetchStrategy::Static,
        }
    }
}

/// The fetch capability: given a URL, produce page HTML or fail.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, ReadError>;
}
