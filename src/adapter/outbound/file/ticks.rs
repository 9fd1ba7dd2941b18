//! Tick source replaying quotes from a JSON export.
//!
//! The export is a JSON array where each element is either a tick object or
//! `null` (a poll with no quote available, as happens on a live terminal).
//! Each `current_tick` call consumes one element; an exhausted replay keeps
//! answering "no quote".

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::tick::Tick;
use crate::error::{Error, Result};
use crate::port::outbound::TickSource;

/// Replays a recorded tick sequence through the [`TickSource`] port.
#[derive(Debug)]
pub struct FileTickSource {
    path: PathBuf,
    cursor: Mutex<Option<ReplayState>>,
}

#[derive(Debug)]
struct ReplayState {
    ticks: Vec<Option<Tick>>,
    next: usize,
}

impl FileTickSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cursor: Mutex::new(None),
        }
    }

    /// Lock the cursor, reading the export on first use.
    fn loaded(&self) -> Result<MutexGuard<'_, Option<ReplayState>>> {
        let mut guard = match self.cursor.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if guard.is_none() {
            let ticks: Vec<Option<Tick>> = super::read_export(&self.path)?;
            *guard = Some(ReplayState { ticks, next: 0 });
        }
        Ok(guard)
    }
}

#[async_trait]
impl TickSource for FileTickSource {
    async fn ensure_symbol(&self, symbol: &str) -> Result<()> {
        if symbol.is_empty() {
            return Err(Error::Fetch("symbol must not be empty".to_string()));
        }
        // Open the export here so connection problems surface where a live
        // terminal would report an unknown symbol.
        self.loaded().map(|_| ())
    }

    async fn current_tick(&self, _symbol: &str) -> Result<Option<Tick>> {
        let mut guard = self.loaded()?;
        let state = match guard.as_mut() {
            Some(state) => state,
            None => return Ok(None),
        };
        if state.next >= state.ticks.len() {
            return Ok(None);
        }
        let tick = state.ticks[state.next];
        state.next += 1;
        Ok(tick)
    }
}
