// ABOUTME: Composition root for the lectern HTTP service.
// ABOUTME: Wires config, logging, the reader pipeline, and the router, then serves.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lectern_reader::{FetchStrategy, Reader};
use lectern_server::routes::AppState;
use lectern_server::{openapi_document, router};

#[derive(Parser, Debug)]
#[command(name = "lectern-server")]
#[command(about = "HTTP service extracting readable article content from URLs")]
struct Config {
    /// Address to bind
    #[arg(long, env = "LECTERN_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "LECTERN_PORT", default_value_t = 8080)]
    port: u16,

    /// Fetch strategy: "static" (single GET) or "rendered" (headless browser)
    #[arg(long, env = "LECTERN_FETCH_STRATEGY", default_value = "static")]
    fetch_strategy: String,

    /// Per-fetch timeout in seconds
    #[arg(long, env = "LECTERN_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Allow fetching from private/local networks
    #[arg(long, env = "LECTERN_ALLOW_PRIVATE_NETWORKS")]
    allow_private_networks: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let strategy = FetchStrategy::from(config.fetch_strategy.as_str());

    let reader = Reader::builder()
        .fetch_strategy(strategy)
        .timeout(Duration::from_secs(config.timeout_secs))
        .allow_private_networks(config.allow_private_networks)
        .build();

    let state = AppState {
        reader: Arc::new(reader),
        openapi: Arc::new(openapi_document()),
    };
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, strategy = %strategy, "lectern listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
