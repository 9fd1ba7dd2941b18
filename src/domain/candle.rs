//! OHLC candles and period summaries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single OHLC bar from the terminal's rate history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar open time.
    pub time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    /// Tick count for the bar.
    #[serde(default)]
    pub tick_volume: u64,
}

/// Price change over a candle series, first close to last close.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodChange {
    /// Close of the earliest bar.
    pub first_close: Decimal,
    /// Close of the latest bar.
    pub last_close: Decimal,
    /// Absolute change, `last_close - first_close`.
    pub change: Decimal,
    /// Percent change relative to the first close, 2 decimals.
    pub change_pct: Decimal,
}

impl PeriodChange {
    /// Compute the change over a time-ordered candle series.
    ///
    /// Returns `None` for an empty series or a zero first close (percent
    /// change would be undefined).
    #[must_use]
    pub fn over(candles: &[Candle]) -> Option<Self> {
        let first = candles.first()?;
        let last = candles.last()?;
        if first.close.is_zero() {
            return None;
        }
        let change = last.close - first.close;
        let change_pct = (change / first.close * Decimal::from(100)).round_dp(2);
        Some(Self {
            first_close: first.close,
            last_close: last.close,
            change,
            change_pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn candle(day: u32, close: Decimal) -> Candle {
        Candle {
            time: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            tick_volume: 100,
        }
    }

    #[test]
    fn change_over_rising_series() {
        let candles = vec![candle(1, dec!(2000)), candle(2, dec!(2100)), candle(3, dec!(2500))];
        let change = PeriodChange::over(&candles).unwrap();
        assert_eq!(change.change, dec!(500));
        assert_eq!(change.change_pct, dec!(25.00));
    }

    #[test]
    fn change_over_falling_series_is_negative() {
        let candles = vec![candle(1, dec!(100)), candle(2, dec!(75))];
        let change = PeriodChange::over(&candles).unwrap();
        assert_eq!(change.change, dec!(-25));
        assert_eq!(change.change_pct, dec!(-25.00));
    }

    #[test]
    fn empty_series_has_no_change() {
        assert!(PeriodChange::over(&[]).is_none());
    }

    #[test]
    fn zero_first_close_has_no_change() {
        let candles = vec![candle(1, dec!(0)), candle(2, dec!(10))];
        assert!(PeriodChange::over(&candles).is_none());
    }
}
