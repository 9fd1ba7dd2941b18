//! Dry-run order gateway.
//!
//! Real order routing is an external collaborator of this toolset. The
//! dry-run gateway satisfies the [`OrderGateway`] port by logging the order
//! and fabricating a receipt flagged `dry_run`, so the monitor loop can be
//! exercised end to end without a live terminal.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::Result;
use crate::port::outbound::{OrderGateway, OrderReceipt};

/// Order gateway that records instead of routing.
#[derive(Debug, Default)]
pub struct DryRunGateway {
    next_ticket: AtomicU64,
}

impl DryRunGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderGateway for DryRunGateway {
    async fn submit_market_buy(
        &self,
        symbol: &str,
        volume: Decimal,
        ask: Decimal,
    ) -> Result<OrderReceipt> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed) + 1;
        info!(%symbol, %volume, price = %ask, ticket, "dry-run: market buy not sent");
        Ok(OrderReceipt {
            ticket,
            symbol: symbol.to_string(),
            volume,
            price: ask,
            time: Utc::now(),
            dry_run: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn receipts_are_flagged_and_ticketed() {
        let gateway = DryRunGateway::new();
        let first = gateway
            .submit_market_buy("BTCUSD", dec!(0.01), dec!(105000))
            .await
            .unwrap();
        let second = gateway
            .submit_market_buy("BTCUSD", dec!(0.01), dec!(104900))
            .await
            .unwrap();

        assert!(first.dry_run);
        assert_eq!(first.ticket, 1);
        assert_eq!(second.ticket, 2);
        assert_eq!(second.price, dec!(104900));
    }
}
