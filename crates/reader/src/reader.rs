// ABOUTME: The pipeline orchestrator composing fetch, sanitize, and extract stages.
// ABOUTME: Provides async read() for URLs and read_html() for pre-fetched documents.

use tracing::debug;
use url::Url;

use crate::article::Article;
use crate::error::ReadError;
use crate::extract::extract;
use crate::fetch::browser::BrowserFetcher;
use crate::fetch::http::HttpFetcher;
use crate::fetch::{Fetch, FetchStrategy};
use crate::options::{Options, ReaderBuilder};
use crate::sanitize::sanitize;

/// The reader pipeline: validate → fetch → sanitize → extract.
///
/// Holds the fetch variant chosen at construction time. Stateless across
/// calls; safe to share behind an `Arc` between concurrent requests.
pub struct Reader {
    fetcher: Box<dyn Fetch>,
}

impl Reader {
    /// Create a new ReaderBuilder for configuring the reader.
    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::new()
    }

    /// Create a new Reader with the given options.
    pub fn new(opts: Options) -> Self {
        let fetcher: Box<dyn Fetch> = match opts.fetch_strategy {
            FetchStrategy::Static => Box::new(HttpFetcher::new(&opts)),
            FetchStrategy::Rendered => Box::new(BrowserFetcher::new(&opts)),
        };
        Self { fetcher }
    }

    /// Read an article from a URL.
    ///
    /// Validation happens before any I/O; the fetch is the only suspension
    /// point. Any stage failure surfaces as a single `ReadError`.
    pub async fn read(&self, url: &str) -> Result<Article, ReadError> {
        let parsed = validate_url(url)?;

        let page = self.fetcher.fetch(&parsed).await?;
        debug!(url = %page.url, bytes = page.html.len(), "fetched page");

        let sanitized = sanitize(&page.html);
        debug!(title = %sanitized.title, "sanitized document");

        extract(&sanitized, &page.url)
    }

    /// Read an article from already-fetched HTML, using `url` as the
    /// document's source context. No network I/O is performed.
    pub async fn read_html(&self, html: &str, url: &str) -> Result<Article, ReadError> {
        let parsed = validate_url(url)?;
        let sanitized = sanitize(html);
        extract(&sanitized, &parsed)
    }
}

fn validate_url(url: &str) -> Result<Url, ReadError> {
    if url.is_empty() {
        return Err(ReadError::invalid_url(url, "Read", None));
    }

    let parsed = Url::parse(url).map_err(|e| {
        ReadError::invalid_url(url, "Read", Some(anyhow::anyhow!("malformed URL: {}", e)))
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ReadError::invalid_url(
            url,
            "Read",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    Ok(parsed)
}
