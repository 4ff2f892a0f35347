// ABOUTME: Rendered fetcher driving an isolated headless Chrome instance per call.
// ABOUTME: Captures the fully rendered DOM and releases the browser on every exit path.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tracing::debug;
use url::Url;

use crate::error::ReadError;
use crate::fetch::{Fetch, FetchedPage};
use crate::options::Options;

const BROWSER_ARGS: &[&str] = &[
    "--disable-blink-features=AutomationControlled",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--no-sandbox",
    "--window-size=1920,1080",
];

/// Rendered fetch variant: launches a fresh headless browser per call,
/// trading latency for correctness on client-rendered pages. No instance
/// is reused across requests.
pub struct BrowserFetcher {
    user_agent: String,
    timeout: Duration,
}

impl BrowserFetcher {
    pub fn new(opts: &Options) -> Self {
        Self {
            user_agent: opts.user_agent.clone(),
            timeout: opts.timeout,
        }
    }
}

#[async_trait]
impl Fetch for BrowserFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, ReadError> {
        let config = BrowserConfig::builder()
            .args(BROWSER_ARGS.iter().copied())
            .arg(format!("--user-agent={}", self.user_agent))
            .build()
            .map_err(|e| {
                ReadError::fetch(
                    url.as_str(),
                    "Render",
                    Some(anyhow::anyhow!("browser config error: {}", e)),
                )
            })?;

        let (mut browser, mut handler) = Browser::launch(config).await.map_err(|e| {
            ReadError::fetch(
                url.as_str(),
                "Render",
                Some(anyhow::anyhow!("failed to launch browser: {}", e)),
            )
        })?;
        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

        debug!(url = %url, "navigating headless browser");
        let outcome = tokio::time::timeout(self.timeout, capture_page(&browser, url)).await;

        // The instance is released on every exit path, success or not,
        // before the capture outcome is inspected.
        let _ = browser.close().await;
        let _ = browser.wait().await;
        handler_task.abort();

        match outcome {
            Err(_) => Err(ReadError::timeout(
                url.as_str(),
                "Render",
                Some(anyhow::anyhow!(
                    "navigation did not settle within {:?}",
                    self.timeout
                )),
            )),
            Ok(Ok(html)) => Ok(FetchedPage {
                url: url.clone(),
                html,
            }),
            Ok(Err(e)) => Err(ReadError::fetch(url.as_str(), "Render", Some(e))),
        }
    }
}

/// Open a fresh page, navigate, wait for the navigation to settle, and
/// serialize the rendered DOM.
async fn capture_page(browser: &Browser, url: &Url) -> anyhow::Result<String> {
    let page = browser.new_page("about:blank").await?;
    page.goto(url.as_str()).await?;
    page.wait_for_navigation().await?;
    let html = page.content().await?;
    Ok(html)
}
