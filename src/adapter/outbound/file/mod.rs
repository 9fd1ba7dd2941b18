//! File-backed providers reading JSON exports.
//!
//! Each adapter reads a JSON array exported from the terminal or the news
//! feed and serves it through the corresponding port. An unreadable file is
//! reported as a connection error (the provider is unavailable); a file that
//! does not parse is a fetch failure (the provider answered with something
//! unusable).

pub mod articles;
pub mod candles;
pub mod deals;
pub mod ticks;

pub use articles::FileNewsFeed;
pub use candles::FileRateHistory;
pub use deals::FileDealHistory;
pub use ticks::FileTickSource;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Read and deserialize a JSON array export.
fn read_export<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Connection(format!("cannot read export {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Fetch(format!("malformed export {}: {e}", path.display())))
}
