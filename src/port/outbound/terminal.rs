//! Terminal ports for history, quotes, and order submission.
//!
//! These traits are the integration points for the trading terminal. The
//! connection/login handshake itself belongs to the implementations; callers
//! treat "connection not established" as a fatal precondition surfaced as
//! [`Error::Connection`](crate::error::Error::Connection).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::candle::Candle;
use crate::domain::deal::Deal;
use crate::domain::tick::Tick;
use crate::domain::window::TimeWindow;
use crate::error::Result;

/// Deal-history provider.
#[async_trait]
pub trait DealHistory: Send + Sync {
    /// Fetch all deals executed inside the window.
    ///
    /// An unreachable provider is `Error::Connection`; a reachable provider
    /// returning an unusable result is `Error::Fetch`. Zero matching deals
    /// is `Ok(vec![])`, a valid empty result.
    async fn fetch_deals(&self, window: TimeWindow) -> Result<Vec<Deal>>;
}

/// Live quote provider for one-symbol polling.
#[async_trait]
pub trait TickSource: Send + Sync {
    /// Confirm the symbol exists and is visible to the session.
    async fn ensure_symbol(&self, symbol: &str) -> Result<()>;

    /// Current bid/ask for the symbol; `None` when no quote is available
    /// right now (transient, the caller may keep polling).
    async fn current_tick(&self, symbol: &str) -> Result<Option<Tick>>;
}

/// Rate-history provider for OHLC bars.
#[async_trait]
pub trait RateHistory: Send + Sync {
    /// Fetch daily candles for the symbol inside the window, time ascending.
    async fn fetch_candles(&self, symbol: &str, window: TimeWindow) -> Result<Vec<Candle>>;
}

/// Receipt returned by an order gateway.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
    /// Gateway-assigned order ticket.
    pub ticket: u64,
    /// Symbol the order was placed on.
    pub symbol: String,
    /// Filled volume in lots.
    pub volume: Decimal,
    /// Fill price.
    pub price: Decimal,
    /// Submission time.
    pub time: DateTime<Utc>,
    /// True when no real order was sent.
    pub dry_run: bool,
}

/// Order submission boundary.
///
/// Real order routing is an external collaborator; the crate ships only a
/// dry-run implementation.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit a market buy at the current ask.
    async fn submit_market_buy(
        &self,
        symbol: &str,
        volume: Decimal,
        ask: Decimal,
    ) -> Result<OrderReceipt>;
}
