// ABOUTME: Configuration options for the reader including Options and ReaderBuilder.
// ABOUTME: ReaderBuilder provides a fluent API for constructing Reader instances.

use std::time::Duration;

use crate::fetch::{FetchStrategy, IMPERSONATE_USER_AGENT};
use crate::reader::Reader;

/// Configuration options for the reader pipeline.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub fetch_strategy: FetchStrategy,
    pub allow_private_networks: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: IMPERSONATE_USER_AGENT.to_string(),
            fetch_strategy: FetchStrategy::Static,
            allow_private_networks: false,
        }
    }
}

/// Builder for constructing Reader instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ReaderBuilder {
    opts: Options,
}

impl ReaderBuilder {
    /// Create a new ReaderBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-fetch timeout (HTTP request or browser navigation).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent sent by both fetch variants.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Select the fetch variant (static GET or rendered browser capture).
    pub fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.opts.fetch_strategy = strategy;
        self
    }

    /// Allow or disallow requests to private networks.
    pub fn allow_private_networks(mut self, allow: bool) -> Self {
        self.opts.allow_private_networks = allow;
        self
    }

    /// Build the Reader with the configured options.
    pub fn build(self) -> Reader {
        Reader::new(self.opts)
    }
}
