//! Market-news articles and sentiment aggregation.
//!
//! Articles carry the sentiment scores assigned by the news feed; this module
//! only reshapes them. [`SentimentReport::analyze`] mirrors the feed's
//! conventions: a zero overall score means "not scored" and is excluded from
//! the mean.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Topics understood by the news feed.
pub const SUPPORTED_TOPICS: &[&str] = &[
    "blockchain",
    "earnings",
    "ipo",
    "mergers_and_acquisitions",
    "financial_markets",
    "economy_fiscal",
    "economy_monetary",
    "economy_macro",
    "energy_transportation",
    "finance",
    "life_sciences",
    "manufacturing",
    "real_estate",
    "retail_wholesale",
    "technology",
];

/// Sentiment assigned to one ticker within an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSentiment {
    pub ticker: String,
    #[serde(default)]
    pub relevance_score: f64,
    #[serde(default)]
    pub sentiment_score: f64,
    #[serde(default = "unknown_label")]
    pub sentiment_label: String,
}

fn unknown_label() -> String {
    "Unknown".to_string()
}

/// A news article with feed-assigned sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub source: String,
    /// Publication stamp as delivered by the feed; normalize with
    /// [`normalize_published`] before display.
    #[serde(default = "unknown_stamp")]
    pub time_published: String,
    #[serde(default)]
    pub overall_sentiment_score: f64,
    #[serde(default = "unknown_label")]
    pub overall_sentiment_label: String,
    #[serde(default)]
    pub ticker_sentiment: Vec<TickerSentiment>,
    #[serde(default)]
    pub topics: Vec<String>,
}

fn unknown_stamp() -> String {
    "unknown".to_string()
}

/// Per-ticker aggregate across a set of articles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerBreakdown {
    /// Mean of the non-zero sentiment scores for this ticker.
    pub average_sentiment: f64,
    /// Count of articles per sentiment label.
    pub label_distribution: BTreeMap<String, usize>,
}

/// Sentiment statistics over a set of articles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub total_articles: usize,
    /// Mean of the non-zero overall scores; 0.0 when nothing was scored.
    pub average_sentiment: f64,
    /// Count of articles per overall sentiment label.
    pub sentiment_distribution: BTreeMap<String, usize>,
    /// Per-ticker breakdown, keyed by ticker symbol.
    pub ticker_sentiment: BTreeMap<String, TickerBreakdown>,
}

impl SentimentReport {
    /// Aggregate sentiment across articles.
    #[must_use]
    pub fn analyze(articles: &[Article]) -> Self {
        let mut scores: Vec<f64> = Vec::new();
        let mut labels: BTreeMap<String, usize> = BTreeMap::new();
        let mut ticker_scores: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        let mut ticker_labels: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();

        for article in articles {
            // Zero means the feed did not score the article.
            if article.overall_sentiment_score != 0.0 {
                scores.push(article.overall_sentiment_score);
                *labels
                    .entry(article.overall_sentiment_label.clone())
                    .or_default() += 1;
            }

            for ts in &article.ticker_sentiment {
                if ts.sentiment_score != 0.0 {
                    ticker_scores
                        .entry(ts.ticker.clone())
                        .or_default()
                        .push(ts.sentiment_score);
                }
                *ticker_labels
                    .entry(ts.ticker.clone())
                    .or_default()
                    .entry(ts.sentiment_label.clone())
                    .or_default() += 1;
            }
        }

        let average_sentiment = mean(&scores);
        let ticker_sentiment = ticker_labels
            .into_iter()
            .map(|(ticker, label_distribution)| {
                let average = ticker_scores.get(&ticker).map(|s| mean(s)).unwrap_or(0.0);
                (
                    ticker,
                    TickerBreakdown {
                        average_sentiment: average,
                        label_distribution,
                    },
                )
            })
            .collect();

        Self {
            total_articles: articles.len(),
            average_sentiment,
            sentiment_distribution: labels,
            ticker_sentiment,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Normalize a feed publication stamp to `YYYY-MM-DD HH:MM:SS`.
///
/// Tries the feed's compact stamps, then ISO-8601 with an optional offset or
/// fractional seconds, then already-normalized forms. Input that matches
/// nothing passes through unchanged.
#[must_use]
pub fn normalize_published(raw: &str) -> String {
    if raw.is_empty() || raw == "unknown" {
        return "unknown".to_string();
    }

    const OUT: &str = "%Y-%m-%d %H:%M:%S";

    // Compact feed stamps: 20250410T013000 / 20250410T0130.
    for format in ["%Y%m%dT%H%M%S", "%Y%m%dT%H%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return parsed.format(OUT).to_string();
        }
    }

    // ISO-8601, dropping any offset, Z suffix, or fractional seconds.
    if raw.contains('T') {
        let trimmed = raw
            .split('+')
            .next()
            .unwrap_or(raw)
            .trim_end_matches('Z');
        let trimmed = trimmed.split('.').next().unwrap_or(trimmed);
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
            return parsed.format(OUT).to_string();
        }
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, OUT) {
        return parsed.format(OUT).to_string();
    }

    if let Ok(parsed) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
            return midnight.format(OUT).to_string();
        }
    }

    raw.to_string()
}
