//! Price-level monitor.
//!
//! Polls one symbol's ask price on a fixed interval and submits a single
//! market buy when the price falls to the target level. Connection
//! establishment is retried a bounded number of times with a fixed delay;
//! a missing quote during monitoring is transient and only logged.

use std::time::Duration;

use rust_decimal::Decimal;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::MonitorConfig;
use crate::error::Result;
use crate::port::outbound::{OrderGateway, OrderReceipt, TickSource};

/// Runtime settings for one monitor session.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    /// Symbol to watch.
    pub symbol: String,
    /// Ask-price level that triggers the buy.
    pub target_price: Decimal,
    /// Order volume in lots.
    pub volume: Decimal,
    /// Pause between price checks.
    pub check_interval: Duration,
    /// Maximum connection attempts.
    pub max_retries: u32,
    /// Fixed pause between connection attempts.
    pub retry_delay: Duration,
    /// Stop after this many polls; `None` runs until triggered.
    pub max_polls: Option<u64>,
}

impl From<&MonitorConfig> for MonitorSettings {
    fn from(config: &MonitorConfig) -> Self {
        Self {
            symbol: config.symbol.clone(),
            target_price: config.target_price,
            volume: config.volume,
            check_interval: Duration::from_secs(config.check_interval_secs),
            max_retries: config.max_retries,
            retry_delay: Duration::from_secs(config.retry_delay_secs),
            max_polls: None,
        }
    }
}

/// How a monitor session ended.
#[derive(Debug, Clone)]
pub enum MonitorOutcome {
    /// The target was reached and the order went through.
    Executed(OrderReceipt),
    /// The poll budget ran out before the target was reached.
    Expired {
        /// Polls performed.
        polls: u64,
        /// Polls that came back without a quote.
        misses: u64,
    },
}

/// Watches one symbol and fires one order.
pub struct PriceMonitor<S, G> {
    ticks: S,
    orders: G,
    settings: MonitorSettings,
}

impl<S: TickSource, G: OrderGateway> PriceMonitor<S, G> {
    pub fn new(ticks: S, orders: G, settings: MonitorSettings) -> Self {
        Self {
            ticks,
            orders,
            settings,
        }
    }

    /// Establish the session: bounded retries with a fixed delay.
    pub async fn connect(&self) -> Result<()> {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.ticks.ensure_symbol(&self.settings.symbol).await {
                Ok(()) => {
                    info!(symbol = %self.settings.symbol, "connected, symbol available");
                    return Ok(());
                }
                Err(e) if attempt < self.settings.max_retries => {
                    warn!(
                        error = %e,
                        attempt,
                        max = self.settings.max_retries,
                        delay_secs = self.settings.retry_delay.as_secs(),
                        "connection attempt failed, retrying"
                    );
                    sleep(self.settings.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Poll until the target price is reached or the poll budget runs out.
    pub async fn run(&self) -> Result<MonitorOutcome> {
        info!(
            symbol = %self.settings.symbol,
            target = %self.settings.target_price,
            volume = %self.settings.volume,
            interval_secs = self.settings.check_interval.as_secs(),
            "starting price monitor"
        );

        let mut polls = 0u64;
        let mut misses = 0u64;

        loop {
            if let Some(budget) = self.settings.max_polls {
                if polls >= budget {
                    info!(polls, misses, "poll budget exhausted");
                    return Ok(MonitorOutcome::Expired { polls, misses });
                }
            }
            polls += 1;

            match self.ticks.current_tick(&self.settings.symbol).await? {
                None => {
                    misses += 1;
                    warn!(symbol = %self.settings.symbol, "no quote available, retrying");
                }
                Some(tick) => {
                    info!(
                        symbol = %self.settings.symbol,
                        ask = %tick.ask,
                        target = %self.settings.target_price,
                        "price check"
                    );
                    if tick.ask <= self.settings.target_price {
                        info!(ask = %tick.ask, "target price reached");
                        match self
                            .orders
                            .submit_market_buy(
                                &self.settings.symbol,
                                self.settings.volume,
                                tick.ask,
                            )
                            .await
                        {
                            Ok(receipt) => {
                                info!(
                                    ticket = receipt.ticket,
                                    price = %receipt.price,
                                    dry_run = receipt.dry_run,
                                    "order executed, monitoring complete"
                                );
                                return Ok(MonitorOutcome::Executed(receipt));
                            }
                            // A rejected order keeps the monitor alive; the
                            // level may be hit again.
                            Err(e) => {
                                error!(error = %e, "order submission failed, continuing");
                            }
                        }
                    }
                }
            }

            sleep(self.settings.check_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tick::Tick;
    use crate::error::Error;
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    fn settings(target: Decimal, max_polls: Option<u64>) -> MonitorSettings {
        MonitorSettings {
            symbol: "BTCUSD".to_string(),
            target_price: target,
            volume: dec!(0.01),
            check_interval: Duration::ZERO,
            max_retries: 3,
            retry_delay: Duration::ZERO,
            max_polls,
        }
    }

    struct ScriptedTicks {
        asks: Mutex<Vec<Option<Decimal>>>,
        failures_before_connect: AtomicU32,
    }

    impl ScriptedTicks {
        fn new(asks: Vec<Option<Decimal>>) -> Self {
            Self {
                asks: Mutex::new(asks),
                failures_before_connect: AtomicU32::new(0),
            }
        }

        fn failing_first(asks: Vec<Option<Decimal>>, failures: u32) -> Self {
            Self {
                asks: Mutex::new(asks),
                failures_before_connect: AtomicU32::new(failures),
            }
        }
    }

    #[async_trait]
    impl TickSource for ScriptedTicks {
        async fn ensure_symbol(&self, _symbol: &str) -> crate::error::Result<()> {
            let remaining = self.failures_before_connect.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures_before_connect
                    .store(remaining - 1, Ordering::SeqCst);
                return Err(Error::Connection("terminal not responding".into()));
            }
            Ok(())
        }

        async fn current_tick(&self, _symbol: &str) -> crate::error::Result<Option<Tick>> {
            let mut asks = self.asks.lock().unwrap();
            if asks.is_empty() {
                return Ok(None);
            }
            Ok(asks.remove(0).map(|ask| Tick {
                bid: ask - dec!(1),
                ask,
                time: Utc::now(),
            }))
        }
    }

    struct CountingGateway {
        submissions: AtomicU32,
        reject_first: AtomicU32,
    }

    impl CountingGateway {
        fn new() -> Self {
            Self {
                submissions: AtomicU32::new(0),
                reject_first: AtomicU32::new(0),
            }
        }

        fn rejecting_first(n: u32) -> Self {
            Self {
                submissions: AtomicU32::new(0),
                reject_first: AtomicU32::new(n),
            }
        }
    }

    #[async_trait]
    impl OrderGateway for CountingGateway {
        async fn submit_market_buy(
            &self,
            symbol: &str,
            volume: Decimal,
            ask: Decimal,
        ) -> crate::error::Result<OrderReceipt> {
            let rejections = self.reject_first.load(Ordering::SeqCst);
            if rejections > 0 {
                self.reject_first.store(rejections - 1, Ordering::SeqCst);
                return Err(Error::OrderRejected("no liquidity".into()));
            }
            let n = self.submissions.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(OrderReceipt {
                ticket: u64::from(n),
                symbol: symbol.to_string(),
                volume,
                price: ask,
                time: Utc::now(),
                dry_run: true,
            })
        }
    }

    #[tokio::test]
    async fn triggers_once_when_price_falls_to_target() {
        let ticks = ScriptedTicks::new(vec![
            Some(dec!(106000)),
            Some(dec!(105500)),
            Some(dec!(105000)),
        ]);
        let monitor = PriceMonitor::new(ticks, CountingGateway::new(), settings(dec!(105000), None));

        match monitor.run().await.unwrap() {
            MonitorOutcome::Executed(receipt) => {
                assert_eq!(receipt.price, dec!(105000));
            }
            other => panic!("expected execution, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_quotes_are_counted_not_fatal() {
        let ticks = ScriptedTicks::new(vec![None, None, Some(dec!(104000))]);
        let monitor = PriceMonitor::new(ticks, CountingGateway::new(), settings(dec!(105000), None));
        assert!(matches!(
            monitor.run().await.unwrap(),
            MonitorOutcome::Executed(_)
        ));
    }

    #[tokio::test]
    async fn poll_budget_bounds_the_session() {
        let ticks = ScriptedTicks::new(vec![Some(dec!(200000)); 10]);
        let monitor =
            PriceMonitor::new(ticks, CountingGateway::new(), settings(dec!(105000), Some(4)));

        match monitor.run().await.unwrap() {
            MonitorOutcome::Expired { polls, misses } => {
                assert_eq!(polls, 4);
                assert_eq!(misses, 0);
            }
            other => panic!("expected expiry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejected_order_keeps_monitoring() {
        let ticks = ScriptedTicks::new(vec![Some(dec!(104000)), Some(dec!(103000))]);
        let gateway = CountingGateway::rejecting_first(1);
        let monitor = PriceMonitor::new(ticks, gateway, settings(dec!(105000), None));

        match monitor.run().await.unwrap() {
            MonitorOutcome::Executed(receipt) => {
                // Second tick fills after the first submission is rejected.
                assert_eq!(receipt.price, dec!(103000));
            }
            other => panic!("expected execution, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connect_retries_then_succeeds() {
        let ticks = ScriptedTicks::failing_first(vec![], 2);
        let monitor = PriceMonitor::new(ticks, CountingGateway::new(), settings(dec!(1), None));
        monitor.connect().await.unwrap();
    }

    #[tokio::test]
    async fn connect_gives_up_after_max_retries() {
        let ticks = ScriptedTicks::failing_first(vec![], 5);
        let monitor = PriceMonitor::new(ticks, CountingGateway::new(), settings(dec!(1), None));
        let err = monitor.connect().await.unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }
}
