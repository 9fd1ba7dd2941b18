//! Handler for the `news` command.

use std::fmt::Write as _;

use tracing::debug;

use crate::adapter::inbound::cli::command::NewsArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::file::FileNewsFeed;
use crate::config::Config;
use crate::domain::news::{normalize_published, Article, SentimentReport, SUPPORTED_TOPICS};
use crate::domain::window::TimeWindow;
use crate::error::Result;
use crate::port::outbound::{NewsFeed, NewsQuery};

/// Split a comma-separated filter list, dropping empty entries.
fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn build_query(config: &Config, args: &NewsArgs) -> Result<NewsQuery> {
    let window = match &args.start_date {
        Some(start) => TimeWindow::from_bounds(start, args.end_date.as_deref())?,
        None => {
            let days = args.days_back.unwrap_or(config.news.days_back);
            TimeWindow::lookback_days(f64::from(days))
        }
    };

    let tickers: Vec<String> = split_list(args.tickers.as_deref())
        .into_iter()
        .map(|t| t.to_ascii_uppercase())
        .collect();

    let topics = split_list(args.topics.as_deref());
    for topic in &topics {
        if !SUPPORTED_TOPICS.contains(&topic.as_str()) {
            output::warning(&format!(
                "unknown topic '{topic}' (supported: {})",
                SUPPORTED_TOPICS.join(", ")
            ));
        }
    }

    Ok(NewsQuery {
        tickers,
        topics,
        window,
        sort: args.sort,
        limit: args.limit.unwrap_or(config.news.limit),
    })
}

/// Cut a summary at `max` characters on a char boundary.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

/// Format the article listing the way it is printed and exported.
fn format_listing(articles: &[Article], show_details: bool) -> String {
    let mut out = String::new();
    for (i, article) in articles.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, article.title);
        let _ = writeln!(
            out,
            "   {} | {} | {} ({:.4})",
            article.source,
            normalize_published(&article.time_published),
            article.overall_sentiment_label,
            article.overall_sentiment_score,
        );
        let _ = writeln!(out, "   {}", article.url);
        if !article.summary.is_empty() {
            let _ = writeln!(out, "   {}", truncate(&article.summary, 500));
        }
        if show_details {
            for ts in &article.ticker_sentiment {
                let _ = writeln!(
                    out,
                    "   {}: {} ({:.4}, relevance {:.4})",
                    ts.ticker, ts.sentiment_label, ts.sentiment_score, ts.relevance_score,
                );
            }
        }
        out.push('\n');
    }
    out
}

fn print_sentiment(report: &SentimentReport) {
    output::section("Sentiment");
    output::field("articles", report.total_articles);
    output::field("avg score", format!("{:.4}", report.average_sentiment));
    for (label, count) in &report.sentiment_distribution {
        output::field(label, count);
    }
    for (ticker, breakdown) in &report.ticker_sentiment {
        output::section(ticker);
        output::field("avg score", format!("{:.4}", breakdown.average_sentiment));
        for (label, count) in &breakdown.label_distribution {
            output::field(label, count);
        }
    }
}

/// Execute `news`: fetch articles, print them, optionally analyze/export.
pub async fn execute(config: &Config, args: &NewsArgs) -> Result<()> {
    if config.news_api_key().is_none() {
        debug!("news API key not set; file exports do not need one");
    }

    let query = build_query(config, args)?;
    let feed = FileNewsFeed::new(&args.articles);
    let articles = feed.fetch(&query).await?;

    if articles.is_empty() {
        output::note("No articles found.");
        return Ok(());
    }

    let listing = format_listing(&articles, !args.no_details);
    print!("{listing}");
    output::field("articles", articles.len());

    if args.analyze_sentiment {
        print_sentiment(&SentimentReport::analyze(&articles));
    }

    if let Some(path) = &args.export_json {
        std::fs::write(path, serde_json::to_string_pretty(&articles)?)?;
        output::success(&format!("exported JSON to {}", path.display()));
    }
    if let Some(path) = &args.export_text {
        std::fs::write(path, &listing)?;
        output::success(&format!("exported text to {}", path.display()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 500), "short");
        let long = "x".repeat(600);
        let cut = truncate(&long, 500);
        assert_eq!(cut.len(), 503);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list(Some("AAPL, msft,,NVDA ")),
            vec!["AAPL", "msft", "NVDA"]
        );
        assert!(split_list(None).is_empty());
        assert!(split_list(Some("")).is_empty());
    }

    #[test]
    fn listing_hides_ticker_details_on_request() {
        let article = Article {
            title: "Markets rally".to_string(),
            url: "https://example.com/a".to_string(),
            summary: String::new(),
            source: "wire".to_string(),
            time_published: "20250410T0130".to_string(),
            overall_sentiment_score: 0.25,
            overall_sentiment_label: "Somewhat-Bullish".to_string(),
            ticker_sentiment: vec![crate::domain::news::TickerSentiment {
                ticker: "AAPL".to_string(),
                relevance_score: 0.9,
                sentiment_score: 0.5,
                sentiment_label: "Bullish".to_string(),
            }],
            topics: vec![],
        };

        let with = format_listing(std::slice::from_ref(&article), true);
        assert!(with.contains("AAPL: Bullish"));
        assert!(with.contains("2025-04-10 01:30:00"));

        let without = format_listing(&[article], false);
        assert!(!without.contains("AAPL: Bullish"));
    }
}
