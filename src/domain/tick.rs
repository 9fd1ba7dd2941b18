//! Price tick snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bid/ask snapshot for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Best bid price.
    pub bid: Decimal,
    /// Best ask price.
    pub ask: Decimal,
    /// Quote time.
    pub time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_from_export_shape() {
        let json = r#"{"bid": 104999.5, "ask": 105000.5, "time": "2025-06-01T12:00:00Z"}"#;
        let tick: Tick = serde_json::from_str(json).unwrap();
        assert_eq!(tick.bid, dec!(104999.5));
        assert_eq!(tick.ask, dec!(105000.5));
    }
}
