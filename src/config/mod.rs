//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file; the news API key comes from the
//! environment (a `.env` file is honored at startup), never from the config
//! file.
//!
//! # Example
//!
//! ```no_run
//! use tradedesk::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

pub mod logging;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};
pub use logging::LoggingConfig;

/// Environment variable holding the news feed API key.
pub const NEWS_API_KEY_VAR: &str = "ALPHAADVANTAGE_API_KEY";

/// Price-monitor settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Symbol to watch.
    pub symbol: String,
    /// Ask-price level that triggers the buy.
    pub target_price: Decimal,
    /// Order volume in lots.
    pub volume: Decimal,
    /// Seconds between price checks.
    pub check_interval_secs: u64,
    /// Maximum connection attempts before giving up.
    pub max_retries: u32,
    /// Seconds between connection attempts.
    pub retry_delay_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            symbol: "BTCUSD".into(),
            target_price: dec!(105000),
            volume: dec!(0.01),
            check_interval_secs: 5,
            max_retries: 3,
            retry_delay_secs: 10,
        }
    }
}

/// News query defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Default lookback in days for ticker/topic queries.
    pub days_back: u32,
    /// Default article limit.
    pub limit: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            days_back: 7,
            limit: 20,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub monitor: MonitorConfig,
    pub news: NewsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Initialize the tracing subscriber from the `[logging]` table.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// The news feed API key from the environment, if set.
    #[must_use]
    pub fn news_api_key(&self) -> Option<String> {
        std::env::var(NEWS_API_KEY_VAR).ok().filter(|v| !v.is_empty())
    }

    fn validate(&self) -> Result<()> {
        if self.monitor.symbol.is_empty() {
            return Err(ConfigError::MissingField {
                field: "monitor.symbol",
            }
            .into());
        }
        if self.monitor.target_price <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "monitor.target_price",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.monitor.volume <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "monitor.volume",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.monitor.check_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.check_interval_secs",
                reason: "must be at least 1 second".into(),
            }
            .into());
        }
        if self.news.limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "news.limit",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        Ok(())
    }
}
