//! News-feed provider backed by a JSON export.
//!
//! Applies the query filters the live feed would apply server-side: ticker
//! and topic matching, publication window, sort order, and limit.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{NaiveDateTime, TimeZone, Utc};

use crate::domain::news::{normalize_published, Article};
use crate::error::Result;
use crate::port::outbound::{NewsFeed, NewsQuery, SortOrder};

/// Serves articles from a JSON array export.
#[derive(Debug, Clone)]
pub struct FileNewsFeed {
    path: PathBuf,
}

impl FileNewsFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Publication instant, when the stamp is understood.
fn published_at(article: &Article) -> Option<chrono::DateTime<Utc>> {
    let normalized = normalize_published(&article.time_published);
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn matches(article: &Article, query: &NewsQuery) -> bool {
    if !query.tickers.is_empty() {
        let mentioned = article
            .ticker_sentiment
            .iter()
            .any(|ts| query.tickers.iter().any(|t| t == &ts.ticker));
        if !mentioned {
            return false;
        }
    }
    if !query.topics.is_empty() {
        let tagged = article
            .topics
            .iter()
            .any(|topic| query.topics.iter().any(|t| t == topic));
        if !tagged {
            return false;
        }
    }
    // Articles with an unreadable stamp stay in; the window cannot judge them.
    match published_at(article) {
        Some(time) => query.window.contains(time),
        None => true,
    }
}

#[async_trait]
impl NewsFeed for FileNewsFeed {
    async fn fetch(&self, query: &NewsQuery) -> Result<Vec<Article>> {
        let articles: Vec<Article> = super::read_export(&self.path)?;
        let mut matched: Vec<Article> = articles
            .into_iter()
            .filter(|a| matches(a, query))
            .collect();

        match query.sort {
            SortOrder::Latest => {
                matched.sort_by_key(|a| std::cmp::Reverse(published_at(a)));
            }
            SortOrder::Earliest => {
                matched.sort_by_key(published_at);
            }
            // The export preserves the feed's relevance ranking.
            SortOrder::Relevance => {}
        }

        matched.truncate(query.effective_limit());
        Ok(matched)
    }
}
