//! Deal records from the terminal's trade history.
//!
//! A [`Deal`] is a single execution event: an open, a partial close, or a
//! full close of a position, or a non-trading operation such as a balance
//! adjustment. Deals are immutable facts from the upstream terminal; nothing
//! in this crate mutates them after deserialization.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Direction (or non-trading kind) of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DealType {
    /// Buy execution.
    Buy,
    /// Sell execution.
    Sell,
    /// Balance operation (deposit/withdrawal).
    Balance,
    /// Credit operation.
    Credit,
    /// Any other terminal-specific deal kind.
    Other,
}

// Unknown kinds collapse to `Other` instead of failing the whole export.
impl<'de> Deserialize<'de> for DealType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "buy" => Self::Buy,
            "sell" => Self::Sell,
            "balance" => Self::Balance,
            "credit" => Self::Credit,
            _ => Self::Other,
        })
    }
}

impl DealType {
    /// True for deals that move a position (buy or sell).
    ///
    /// Balance and credit operations must never contribute to position
    /// economics.
    #[must_use]
    pub const fn is_trade(self) -> bool {
        matches!(self, Self::Buy | Self::Sell)
    }
}

/// Whether a deal adds to or reduces a position's volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DealEntry {
    /// Opens or adds to a position.
    In,
    /// Reduces or closes a position.
    Out,
    /// Closes one position and opens the opposite one (reversal).
    InOut,
    /// Any other entry kind.
    Other,
}

impl<'de> Deserialize<'de> for DealEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "in" => Self::In,
            "out" => Self::Out,
            "inout" => Self::InOut,
            _ => Self::Other,
        })
    }
}

/// A single trade execution record from the broker's history.
///
/// Deals sharing a `position_id` form one round-trip position. Required
/// fields are rejected at deserialization time when missing; only `comment`
/// is optional upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    /// Position identifier grouping this deal with its siblings.
    pub position_id: u64,
    /// Instrument symbol, e.g. `EURUSD`.
    pub symbol: String,
    /// Buy/sell/other deal kind.
    #[serde(rename = "type")]
    pub deal_type: DealType,
    /// Open/close entry kind.
    pub entry: DealEntry,
    /// Executed volume in lots.
    pub volume: Decimal,
    /// Execution price.
    pub price: Decimal,
    /// Realized profit attributed to this deal.
    pub profit: Decimal,
    /// Overnight financing applied with this deal.
    #[serde(default)]
    pub swap: Decimal,
    /// Commission charged for this deal.
    #[serde(default)]
    pub commission: Decimal,
    /// Execution time.
    pub time: DateTime<Utc>,
    /// Broker comment, usually set on the closing deal.
    #[serde(default)]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_json() -> &'static str {
        r#"{
            "position_id": 42,
            "symbol": "EURUSD",
            "type": "buy",
            "entry": "in",
            "volume": 0.01,
            "price": 1.1,
            "profit": 0.0,
            "swap": -0.02,
            "commission": -0.07,
            "time": "2025-01-02T09:30:00Z",
            "comment": "tp hit"
        }"#
    }

    #[test]
    fn deserializes_a_full_deal() {
        let deal: Deal = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(deal.position_id, 42);
        assert_eq!(deal.deal_type, DealType::Buy);
        assert_eq!(deal.entry, DealEntry::In);
        assert_eq!(deal.volume, dec!(0.01));
        assert_eq!(deal.swap, dec!(-0.02));
        assert_eq!(deal.comment.as_deref(), Some("tp hit"));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        // No position_id
        let json = r#"{
            "symbol": "EURUSD",
            "type": "buy",
            "entry": "in",
            "volume": 0.01,
            "price": 1.1,
            "profit": 0.0,
            "time": "2025-01-02T09:30:00Z"
        }"#;
        assert!(serde_json::from_str::<Deal>(json).is_err());
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "position_id": 1,
            "symbol": "XAUUSD",
            "type": "sell",
            "entry": "out",
            "volume": 0.1,
            "price": 2400.5,
            "profit": 12.5,
            "time": "2025-01-02T09:30:00Z"
        }"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.swap, Decimal::ZERO);
        assert_eq!(deal.commission, Decimal::ZERO);
        assert!(deal.comment.is_none());
    }

    #[test]
    fn unknown_deal_type_maps_to_other() {
        let json = r#"{
            "position_id": 1,
            "symbol": "EURUSD",
            "type": "dividend",
            "entry": "in",
            "volume": 0.0,
            "price": 0.0,
            "profit": 1.25,
            "time": "2025-01-02T09:30:00Z"
        }"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.deal_type, DealType::Other);
        assert!(!deal.deal_type.is_trade());
    }

    #[test]
    fn trade_kinds() {
        assert!(DealType::Buy.is_trade());
        assert!(DealType::Sell.is_trade());
        assert!(!DealType::Balance.is_trade());
        assert!(!DealType::Credit.is_trade());
    }
}
