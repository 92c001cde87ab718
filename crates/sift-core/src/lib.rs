use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Caller error: the query was missing or blank after trimming.
    #[error("Query is empty")]
    InvalidQuery,
    /// Upstream answered 202: it is throttling or queuing requests.
    #[error("Search service is temporarily unavailable. Please try again in a few moments.")]
    UpstreamUnavailable,
    /// Upstream answered 429.
    #[error("Too many requests. Please wait before searching again.")]
    RateLimited,
    /// Upstream answered 403, usually bot detection.
    #[error("Access denied by search service. Please try again later.")]
    UpstreamForbidden,
    /// Any upstream status not classified above.
    #[error("Search service returned HTTP {0}")]
    UpstreamStatus(u16),
    /// Transport-level failure, including the request timeout.
    #[error("Search failed: {0}")]
    Network(String),
    /// The result-page markup could not be processed.
    #[error("Failed to parse search results: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A validated, trimmed, non-empty search query.
///
/// Owned for the duration of one request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One result card as pulled from the upstream markup.
///
/// Extraction is tolerant: missing sub-fields come back as empty
/// strings, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedResult {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

/// An extracted result plus its deprioritization score.
///
/// Lower `ranking` sorts earlier; 0 means no keyword matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredResult {
    pub title: String,
    pub snippet: String,
    pub url: String,
    pub ranking: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub results: Vec<ScoredResult>,
}

#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn search(&self, query: &Query) -> Result<SearchResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parse_trims_surrounding_whitespace() {
        let q = Query::parse("  golang tutorial \n").unwrap();
        assert_eq!(q.as_str(), "golang tutorial");
    }

    #[test]
    fn query_parse_rejects_empty_and_blank() {
        assert!(matches!(Query::parse(""), Err(Error::InvalidQuery)));
        assert!(matches!(Query::parse("   \t\n"), Err(Error::InvalidQuery)));
    }

    #[test]
    fn query_parse_keeps_interior_whitespace() {
        let q = Query::parse(" a  b ").unwrap();
        assert_eq!(q.as_str(), "a  b");
    }

    #[test]
    fn error_messages_are_distinguishable() {
        let msgs = [
            Error::InvalidQuery.to_string(),
            Error::UpstreamUnavailable.to_string(),
            Error::RateLimited.to_string(),
            Error::UpstreamForbidden.to_string(),
            Error::UpstreamStatus(500).to_string(),
            Error::Network("timed out".to_string()).to_string(),
            Error::Parse("bad selector".to_string()).to_string(),
        ];
        for (i, a) in msgs.iter().enumerate() {
            for b in msgs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn upstream_status_message_carries_the_code() {
        assert_eq!(
            Error::UpstreamStatus(418).to_string(),
            "Search service returned HTTP 418"
        );
    }

    #[test]
    fn scored_result_serializes_with_ranking_field() {
        let r = ScoredResult {
            title: "Golang Docs".to_string(),
            snippet: "official docs".to_string(),
            url: "go.dev".to_string(),
            ranking: 0,
        };
        let js = serde_json::to_value(SearchResponse { results: vec![r] }).unwrap();
        assert_eq!(js["results"][0]["ranking"], 0);
        assert_eq!(js["results"][0]["title"], "Golang Docs");
    }
}
