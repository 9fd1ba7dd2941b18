//! Deal-history provider backed by a JSON export.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::deal::Deal;
use crate::domain::window::TimeWindow;
use crate::error::Result;
use crate::port::outbound::DealHistory;

/// Serves deal history from a JSON array export.
#[derive(Debug, Clone)]
pub struct FileDealHistory {
    path: PathBuf,
}

impl FileDealHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DealHistory for FileDealHistory {
    async fn fetch_deals(&self, window: TimeWindow) -> Result<Vec<Deal>> {
        let deals: Vec<Deal> = super::read_export(&self.path)?;
        // Window bounds are inclusive on both ends, matching the terminal.
        Ok(deals
            .into_iter()
            .filter(|d| window.contains(d.time))
            .collect())
    }
}
