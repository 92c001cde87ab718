use reqwest::header::{HeaderMap, HeaderValue};
use sift_core::{Error, Query, Result};
use std::time::Duration;

/// DuckDuckGo's no-JS HTML results endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Upstream requests can hang indefinitely without an explicit timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header set a desktop Chrome would send for a top-level navigation.
/// The upstream serves a captcha (or a 403) to anything that looks
/// like a bot, so every request carries the full set.
fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        reqwest::header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        ),
    );
    h.insert(
        reqwest::header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    h.insert(
        reqwest::header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.5"),
    );
    h.insert(
        reqwest::header::ACCEPT_ENCODING,
        HeaderValue::from_static("gzip, deflate, br"),
    );
    h.insert("DNT", HeaderValue::from_static("1"));
    h.insert(
        reqwest::header::CONNECTION,
        HeaderValue::from_static("keep-alive"),
    );
    h.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
    h.insert("Sec-Fetch-Dest", HeaderValue::from_static("document"));
    h.insert("Sec-Fetch-Mode", HeaderValue::from_static("navigate"));
    h.insert("Sec-Fetch-Site", HeaderValue::from_static("none"));
    h.insert(
        reqwest::header::CACHE_CONTROL,
        HeaderValue::from_static("max-age=0"),
    );
    h
}

/// Classify a non-200 upstream status into its error kind.
fn classify_status(status: u16) -> Error {
    match status {
        // 202 is the upstream's "come back later" while it queues work.
        202 => Error::UpstreamUnavailable,
        429 => Error::RateLimited,
        403 => Error::UpstreamForbidden,
        other => Error::UpstreamStatus(other),
    }
}

fn network_error(e: &reqwest::Error) -> Error {
    if e.is_timeout() {
        return Error::Network("request timed out".to_string());
    }
    Error::Network(e.to_string())
}

/// Issue one GET to the upstream results endpoint and return the HTML
/// body on 200, or the classified error otherwise.
///
/// The client is built here and dropped on every exit path, so the
/// connection resources never outlive the call.
pub async fn fetch_results_page(
    endpoint: &str,
    query: &Query,
    timeout: Duration,
) -> Result<String> {
    let client = reqwest::Client::builder()
        .default_headers(browser_headers())
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Network(e.to_string()))?;

    let resp = client
        .get(endpoint)
        .query(&[("q", query.as_str())])
        .send()
        .await
        .map_err(|e| network_error(&e))?;

    let status = resp.status().as_u16();
    tracing::debug!(status, "upstream response");
    if status != 200 {
        return Err(classify_status(status));
    }
    resp.text().await.map_err(|e| network_error(&e))
}
