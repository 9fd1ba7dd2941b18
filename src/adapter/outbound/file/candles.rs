//! Rate-history provider backed by a JSON export.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::candle::Candle;
use crate::domain::window::TimeWindow;
use crate::error::Result;
use crate::port::outbound::RateHistory;

/// Serves OHLC bars from a JSON array export.
#[derive(Debug, Clone)]
pub struct FileRateHistory {
    path: PathBuf,
}

impl FileRateHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RateHistory for FileRateHistory {
    async fn fetch_candles(&self, _symbol: &str, window: TimeWindow) -> Result<Vec<Candle>> {
        let mut candles: Vec<Candle> = super::read_export(&self.path)?;
        candles.retain(|c| window.contains(c.time));
        candles.sort_by_key(|c| c.time);
        Ok(candles)
    }
}
