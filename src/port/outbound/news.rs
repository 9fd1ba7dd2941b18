//! News-feed port.
//!
//! The feed's HTTP transport and authentication are external collaborators;
//! only the query shape and the trait live here.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::news::Article;
use crate::domain::window::TimeWindow;
use crate::error::Result;

/// Feed sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Newest first.
    #[default]
    Latest,
    /// Oldest first.
    Earliest,
    /// Feed relevance ranking.
    Relevance,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.to_ascii_uppercase().as_str() {
            "LATEST" => Ok(Self::Latest),
            "EARLIEST" => Ok(Self::Earliest),
            "RELEVANCE" => Ok(Self::Relevance),
            other => Err(format!(
                "unknown sort order '{other}', expected LATEST, EARLIEST, or RELEVANCE"
            )),
        }
    }
}

/// Maximum article count the feed will return per query.
pub const MAX_LIMIT: usize = 1000;

/// A news query: ticker/topic filters over a time window.
#[derive(Debug, Clone)]
pub struct NewsQuery {
    /// Ticker filter; an article matches when it mentions any of these.
    pub tickers: Vec<String>,
    /// Topic filter; an article matches when tagged with any of these.
    pub topics: Vec<String>,
    /// Publication window.
    pub window: TimeWindow,
    /// Result ordering.
    pub sort: SortOrder,
    /// Maximum number of articles, clamped to [`MAX_LIMIT`].
    pub limit: usize,
}

impl NewsQuery {
    /// Effective limit after clamping.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.limit.min(MAX_LIMIT)
    }
}

/// Market-news provider.
#[async_trait]
pub trait NewsFeed: Send + Sync {
    /// Fetch articles matching the query, already sorted and limited.
    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>>;
}
