use crate::{extract, fetch, rank};
use sift_core::{Query, Result, SearchProvider, SearchResponse};
use std::time::Duration;

fn endpoint_from_env() -> Option<String> {
    std::env::var("SIFT_UPSTREAM_ENDPOINT")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Search provider backed by DuckDuckGo's HTML results page.
///
/// Each `search` call performs one scoped upstream fetch; nothing is
/// shared or cached across calls.
#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    endpoint: String,
    timeout: Duration,
    /// Pause before each upstream request. The upstream rate-limits
    /// aggressively, so the default keeps a polite gap.
    courtesy_delay: Duration,
}

impl DuckDuckGoProvider {
    pub fn new(endpoint: String, timeout: Duration, courtesy_delay: Duration) -> Self {
        Self {
            endpoint,
            timeout,
            courtesy_delay,
        }
    }

    /// Default provider, honoring the `SIFT_UPSTREAM_ENDPOINT` override.
    pub fn from_env() -> Self {
        Self::new(
            endpoint_from_env().unwrap_or_else(|| fetch::DEFAULT_ENDPOINT.to_string()),
            fetch::DEFAULT_TIMEOUT,
            Duration::from_millis(1000),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for DuckDuckGoProvider {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait::async_trait]
impl SearchProvider for DuckDuckGoProvider {
    fn name(&self) -> &'static str {
        "duckduckgo"
    }

    async fn search(&self, query: &Query) -> Result<SearchResponse> {
        if !self.courtesy_delay.is_zero() {
            tokio::time::sleep(self.courtesy_delay).await;
        }
        tracing::debug!(query = %query, "dispatching upstream search");
        let html = fetch::fetch_results_page(&self.endpoint, query, self.timeout).await?;
        let extracted = extract::extract_results(&html)?;
        Ok(SearchResponse {
            results: rank::rank_results(extracted),
        })
    }
}
