// ABOUTME: CLI binary for the lectern article reader.
// ABOUTME: Extracts article text from URLs or local HTML files and prints it as text or JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use lectern_reader::{Article, FetchStrategy, Reader};

#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(about = "Extract readable article content from web pages")]
struct Args {
    /// Use a headless browser to render the page before extraction
    #[arg(long = "rendered")]
    rendered: bool,

    /// Output the full article as JSON instead of plain content text
    #[arg(long = "json")]
    json_output: bool,

    /// HTML file to read instead of fetching (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// URL context for HTML file mode (required with --html)
    #[arg(long = "url")]
    url: Option<String>,

    /// Per-fetch timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = 10)]
    timeout_secs: u64,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// URLs to read (fetch mode)
    #[arg()]
    urls: Vec<String>,
}

/// Format output: full JSON or just the content text.
fn format_output(articles: &[Article], json_output: bool) -> String {
    if json_output {
        if articles.len() == 1 {
            serde_json::to_string_pretty(&articles[0]).unwrap()
        } else {
            serde_json::to_string_pretty(articles).unwrap()
        }
    } else {
        articles
            .iter()
            .map(|a| a.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.html.is_some() && args.url.is_none() {
        eprintln!("error: --url is required when using --html");
        return ExitCode::from(1);
    }

    if args.html.is_none() && args.urls.is_empty() {
        eprintln!("error: at least one URL is required, or use --html with --url");
        return ExitCode::from(1);
    }

    if args.html.is_some() && !args.urls.is_empty() {
        eprintln!("error: cannot use both --html and positional URLs");
        return ExitCode::from(1);
    }

    let strategy = if args.rendered {
        FetchStrategy::Rendered
    } else {
        FetchStrategy::Static
    };
    let reader = Reader::builder()
        .fetch_strategy(strategy)
        .timeout(Duration::from_secs(args.timeout_secs))
        .allow_private_networks(args.allow_private_networks)
        .build();

    let start = Instant::now();
    let mut articles: Vec<Article> = Vec::new();
    let mut had_error = false;

    if let Some(html_path) = &args.html {
        let url = args.url.as_ref().unwrap();
        match fs::read_to_string(html_path) {
            Ok(html) => match reader.read_html(&html, url).await {
                Ok(article) => articles.push(article),
                Err(e) => {
                    eprintln!("error extracting from HTML: {}", e);
                    had_error = true;
                }
            },
            Err(e) => {
                eprintln!("error reading file {:?}: {}", html_path, e);
                had_error = true;
            }
        }
    } else {
        for url in &args.urls {
            match reader.read(url).await {
                Ok(article) => articles.push(article),
                Err(e) => {
                    eprintln!("error reading {}: {}", url, e);
                    had_error = true;
                }
            }
        }
    }

    let elapsed = start.elapsed();

    if !articles.is_empty() {
        println!("{}", format_output(&articles, args.json_output));
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
