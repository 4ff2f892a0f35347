// ABOUTME: Static fetcher issuing a single browser-impersonating HTTP GET.
// ABOUTME: Guards against private-network targets, caps body size, and decodes charsets.

use std::net::{IpAddr, ToSocketAddrs};

use async_trait::async_trait;
use ipnet::{Ipv4Net, Ipv6Net};
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, REFERER};
use url::Url;

use crate::error::ReadError;
use crate::fetch::{Fetch, FetchedPage};
use crate::options::Options;

/// Maximum allowed response body size (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

static PRIVATE_V4_NETS: Lazy<Vec<Ipv4Net>> = Lazy::new(|| {
    [
        // RFC1918 private ranges
        "10.0.0.0/8",
        "172.16.0.0/12",
        "192.168.0.0/16",
        // Loopback and link-local
        "127.0.0.0/8",
        "169.254.0.0/16",
    ]
    .iter()
    .map(|net| net.parse().unwrap())
    .collect()
});

static PRIVATE_V6_NETS: Lazy<Vec<Ipv6Net>> = Lazy::new(|| {
    // Unique local fc00::/7, link-local fe80::/10
    ["fc00::/7", "fe80::/10"]
        .iter()
        .map(|net| net.parse().unwrap())
        .collect()
});

/// Check if an IP address is in a private/reserved range.
fn is_private_ip(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(ip) => PRIVATE_V4_NETS.iter().any(|net| net.contains(ip)),
        IpAddr::V6(ip) => ip.is_loopback() || PRIVATE_V6_NETS.iter().any(|net| net.contains(ip)),
    }
}

/// Extract the charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        if let Some(charset) = part.trim().strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Decode body bytes to a String using the header charset or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Verify that a URL's host does not resolve to a private/reserved address.
async fn ensure_public_host(url: &Url) -> Result<(), ReadError> {
    let blocked = |ip: &IpAddr| {
        ReadError::blocked(
            url.as_str(),
            "Fetch",
            Some(anyhow::anyhow!("{} is a private address", ip)),
        )
    };

    match url.host() {
        Some(url::Host::Ipv4(ip)) => {
            let ip = IpAddr::V4(ip);
            if is_private_ip(&ip) {
                return Err(blocked(&ip));
            }
        }
        Some(url::Host::Ipv6(ip)) => {
            let ip = IpAddr::V6(ip);
            if is_private_ip(&ip) {
                return Err(blocked(&ip));
            }
        }
        Some(url::Host::Domain(host)) => {
            let port = url.port_or_known_default().unwrap_or(80);
            let addrs = tokio::net::lookup_host((host, port)).await.map_err(|e| {
                ReadError::fetch(
                    url.as_str(),
                    "Fetch",
                    Some(anyhow::anyhow!("DNS lookup failed: {}", e)),
                )
            })?;
            for addr in addrs {
                if is_private_ip(&addr.ip()) {
                    return Err(blocked(&addr.ip()));
                }
            }
        }
        None => {}
    }

    Ok(())
}

/// Static fetch variant: one outbound GET, no retries, no script execution.
pub struct HttpFetcher {
    client: reqwest::Client,
    allow_private_networks: bool,
}

impl HttpFetcher {
    pub fn new(opts: &Options) -> Self {
        let allow_private = opts.allow_private_networks;
        let redirect_policy = reqwest::redirect::Policy::custom(move |attempt| {
            if !allow_private {
                if let Some(host) = attempt.url().host_str() {
                    let port = attempt.url().port_or_known_default().unwrap_or(80);
                    if let Ok(ip) = host.parse::<IpAddr>() {
                        if is_private_ip(&ip) {
                            return attempt.error("redirect to private address blocked");
                        }
                    } else {
                        // The redirect policy is synchronous, so resolve with std.
                        match (host, port).to_socket_addrs() {
                            Ok(addrs) => {
                                for sa in addrs {
                                    if is_private_ip(&sa.ip()) {
                                        return attempt
                                            .error("redirect to private address blocked");
                                    }
                                }
                            }
                            Err(_) => {
                                return attempt.error("DNS lookup failed during redirect");
                            }
                        }
                    }
                }
            }
            attempt.follow()
        });

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(super::ACCEPT_HTML));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(super::ACCEPT_LANGUAGE),
        );
        headers.insert(REFERER, HeaderValue::from_static(super::REFERER));

        let client = reqwest::Client::builder()
            .redirect(redirect_policy)
            .user_agent(&opts.user_agent)
            .default_headers(headers)
            .timeout(opts.timeout)
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            allow_private_networks: opts.allow_private_networks,
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, ReadError> {
        if !self.allow_private_networks {
            ensure_public_host(url).await?;
        }

        let response = self.client.get(url.as_str()).send().await.map_err(|e| {
            if e.is_timeout() {
                ReadError::timeout(url.as_str(), "Fetch", Some(anyhow::anyhow!("{}", e)))
            } else {
                ReadError::fetch(
                    url.as_str(),
                    "Fetch",
                    Some(anyhow::anyhow!("request failed: {}", e)),
                )
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReadError::fetch(
                url.as_str(),
                "Fetch",
                Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
            ));
        }

        if let Some(len) = response.content_length() {
            if len as usize > MAX_CONTENT_LENGTH {
                return Err(ReadError::fetch(
                    url.as_str(),
                    "Fetch",
                    Some(anyhow::anyhow!("content too large")),
                ));
            }
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_lowercase());

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                ReadError::timeout(url.as_str(), "Fetch", Some(anyhow::anyhow!("{}", e)))
            } else {
                ReadError::fetch(
                    url.as_str(),
                    "Fetch",
                    Some(anyhow::anyhow!("failed to read body: {}", e)),
                )
            }
        })?;

        if body.len() > MAX_CONTENT_LENGTH {
            return Err(ReadError::fetch(
                url.as_str(),
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }

        let html = decode_body(&body, content_type.as_deref());
        Ok(FetchedPage {
            url: final_url,
            html,
        })
    }
}
