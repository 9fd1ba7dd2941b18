//! Command-line interface definitions.
//!
//! Defines the CLI structure for the tradedesk application using `clap`.
//! The CLI supports subcommands for closed-position reports, price
//! monitoring, market-news sentiment, rate summaries, and configuration
//! management.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::port::outbound::SortOrder;

/// Trading-terminal companion CLI
#[derive(Parser, Debug)]
#[command(name = "tradedesk")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the tradedesk CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report closed positions reconstructed from deal history
    Positions(PositionsArgs),

    /// Watch a price level and fire a single buy when it is reached
    Monitor(MonitorArgs),

    /// Summarize market news and sentiment
    News(Box<NewsArgs>),

    /// Summarize rate history for a symbol
    Rates(RatesArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `tradedesk config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `config init` subcommand.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = "config.toml")]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `positions` subcommand.
///
/// The time window is either a fractional-day lookback (`--days 0.5` is the
/// last 12 hours) or an explicit `--from`/`--to` pair; the two forms are
/// mutually exclusive. Output defaults to JSON; `--pretty` renders an
/// aligned table instead.
#[derive(Args, Debug)]
pub struct PositionsArgs {
    /// Look back this many days (can be fractional).
    #[arg(long, default_value_t = 7.0, conflicts_with = "from")]
    pub days: f64,

    /// Start date/time (YYYY-MM-DD or YYYY-MM-DDTHH:MM).
    #[arg(long)]
    pub from: Option<String>,

    /// End date/time; defaults to now when --from is used.
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Filter by symbol (exact match, e.g. EURUSD).
    #[arg(long)]
    pub symbol: Option<String>,

    /// Pretty table output instead of JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Path to the deal-history JSON export.
    #[arg(long)]
    pub deals: PathBuf,
}

/// Arguments for the `monitor` subcommand.
///
/// All optional fields override the corresponding `[monitor]` values from
/// the configuration file.
#[derive(Args, Debug)]
pub struct MonitorArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the symbol to watch.
    #[arg(long)]
    pub symbol: Option<String>,

    /// Override the ask-price trigger level.
    #[arg(long)]
    pub target_price: Option<Decimal>,

    /// Override the order volume in lots.
    #[arg(long)]
    pub volume: Option<Decimal>,

    /// Override the poll interval in seconds.
    #[arg(long)]
    pub interval: Option<u64>,

    /// Stop after this many polls (default: run until triggered).
    #[arg(long)]
    pub max_polls: Option<u64>,

    /// Path to the tick replay JSON export.
    #[arg(long)]
    pub ticks: PathBuf,
}

/// Arguments for the `news` subcommand.
#[derive(Args, Debug)]
pub struct NewsArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Path to the article feed JSON export.
    #[arg(long)]
    pub articles: PathBuf,

    /// Comma-separated ticker filter (e.g. "AAPL,MSFT").
    #[arg(long)]
    pub tickers: Option<String>,

    /// Comma-separated topic filter (e.g. "technology,ipo").
    #[arg(long)]
    pub topics: Option<String>,

    /// Start date (YYYY-MM-DD), used with --end-date.
    #[arg(long)]
    pub start_date: Option<String>,

    /// End date (YYYY-MM-DD).
    #[arg(long, requires = "start_date")]
    pub end_date: Option<String>,

    /// Days to look back when no explicit dates are given.
    #[arg(long, conflicts_with = "start_date")]
    pub days_back: Option<u32>,

    /// Sort order: LATEST, EARLIEST, or RELEVANCE.
    #[arg(long, default_value = "LATEST")]
    pub sort: SortOrder,

    /// Maximum number of articles (feed caps at 1000).
    #[arg(long)]
    pub limit: Option<usize>,

    /// Show sentiment analysis statistics.
    #[arg(long)]
    pub analyze_sentiment: bool,

    /// Leave per-ticker sentiment details out of the article listing.
    #[arg(long)]
    pub no_details: bool,

    /// Export the raw articles to a JSON file.
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Export the formatted listing to a text file.
    #[arg(long)]
    pub export_text: Option<PathBuf>,
}

/// Arguments for the `rates` subcommand.
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Path to the rate-history JSON export.
    #[arg(long)]
    pub candles: PathBuf,

    /// Symbol the export covers.
    #[arg(long, default_value = "XAUUSD")]
    pub symbol: String,

    /// Months of history to summarize (30-day months).
    #[arg(long, default_value_t = 6)]
    pub months: u32,

    /// Number of recent bars to show in the table.
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Pretty table output instead of JSON.
    #[arg(long)]
    pub pretty: bool,
}
