//! Closed-position reconstruction from flat deal history.
//!
//! The terminal reports trade history as a flat list of deals. A round-trip
//! position is recovered by grouping deals on `position_id` and summing the
//! economics of every deal in the group. This is the one non-trivial
//! transformation in the crate and it is a pure function: no I/O, no state,
//! same output for same input.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::deal::{Deal, DealEntry, DealType};

/// Direction of a closed position, taken from its opening deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// A reconstructed round-trip trade.
///
/// Derived fresh on every [`aggregate`] call and never persisted; there is
/// no identity beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosedPosition {
    /// Position identifier shared by the constituent deals.
    pub ticket: u64,
    /// Instrument symbol.
    pub symbol: String,
    /// BUY or SELL, from the opening deal's type.
    #[serde(rename = "type")]
    pub side: Side,
    /// Sum of volumes of entry deals only (partial closes add `out` deals
    /// whose volume does not represent the original position size).
    pub volume: Decimal,
    /// Price of the earliest deal.
    pub open_price: Decimal,
    /// Price of the latest deal.
    pub close_price: Decimal,
    /// Time of the earliest deal.
    pub open_time: DateTime<Utc>,
    /// Time of the latest deal.
    pub close_time: DateTime<Utc>,
    /// Sum of profit across all deals in the group, rounded to 2 decimals.
    pub profit: Decimal,
    /// Sum of swap across all deals, native precision.
    pub swap: Decimal,
    /// Sum of commission across all deals, native precision.
    pub commission: Decimal,
    /// Closing deal's comment, empty when absent.
    pub comment: String,
    /// Minutes between open and close, rounded to 1 decimal.
    pub duration_minutes: Decimal,
}

/// Reconstruct closed positions from a window of deal history.
///
/// Non-trading deals (balance/credit operations) are discarded first, then
/// an optional exact-match symbol filter is applied. Remaining deals are
/// grouped by `position_id`; a group with fewer than two deals is a position
/// still open within the window (or a data anomaly) and is silently skipped.
/// Output is sorted by close time descending.
///
/// Two positions closing at the same instant keep the order in which their
/// position ids first appeared in the input. That tie-break is
/// implementation-defined, not a contract.
#[must_use]
pub fn aggregate(deals: &[Deal], symbol_filter: Option<&str>) -> Vec<ClosedPosition> {
    // Group in first-seen order so the final stable sort is deterministic.
    let mut order: Vec<u64> = Vec::new();
    let mut groups: HashMap<u64, Vec<&Deal>> = HashMap::new();

    for deal in deals {
        if !deal.deal_type.is_trade() {
            continue;
        }
        if let Some(symbol) = symbol_filter {
            if deal.symbol != symbol {
                continue;
            }
        }
        groups
            .entry(deal.position_id)
            .or_insert_with(|| {
                order.push(deal.position_id);
                Vec::new()
            })
            .push(deal);
    }

    let mut positions: Vec<ClosedPosition> = Vec::with_capacity(order.len());
    for ticket in order {
        let Some(mut group) = groups.remove(&ticket) else {
            continue;
        };
        // Need at least an opening and a closing deal.
        if group.len() < 2 {
            continue;
        }
        group.sort_by_key(|d| d.time);
        positions.push(close_out(ticket, &group));
    }

    positions.sort_by(|a, b| b.close_time.cmp(&a.close_time));
    positions
}

/// Collapse one time-sorted deal group into a closed position.
fn close_out(ticket: u64, group: &[&Deal]) -> ClosedPosition {
    let open_deal = group[0];
    let close_deal = group[group.len() - 1];

    let profit: Decimal = group.iter().map(|d| d.profit).sum();
    let swap: Decimal = group.iter().map(|d| d.swap).sum();
    let commission: Decimal = group.iter().map(|d| d.commission).sum();
    let volume: Decimal = group
        .iter()
        .filter(|d| d.entry == DealEntry::In)
        .map(|d| d.volume)
        .sum();

    let side = if open_deal.deal_type == DealType::Buy {
        Side::Buy
    } else {
        Side::Sell
    };

    let duration_secs = (close_deal.time - open_deal.time).num_seconds();
    let duration_minutes = (Decimal::from(duration_secs) / Decimal::from(60)).round_dp(1);

    ClosedPosition {
        ticket,
        symbol: open_deal.symbol.clone(),
        side,
        volume,
        open_price: open_deal.price,
        close_price: close_deal.price,
        open_time: open_deal.time,
        close_time: close_deal.time,
        profit: profit.round_dp(2),
        swap,
        commission,
        comment: close_deal.comment.clone().unwrap_or_default(),
        duration_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, minute, 0).unwrap()
    }

    fn deal(
        position_id: u64,
        deal_type: DealType,
        entry: DealEntry,
        volume: Decimal,
        price: Decimal,
        profit: Decimal,
        minute: u32,
    ) -> Deal {
        Deal {
            position_id,
            symbol: "EURUSD".to_string(),
            deal_type,
            entry,
            volume,
            price,
            profit,
            swap: Decimal::ZERO,
            commission: Decimal::ZERO,
            time: at(minute),
            comment: None,
        }
    }

    #[test]
    fn round_trip_buy_becomes_one_position() {
        let deals = vec![
            deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0),
            deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(110), dec!(10), 5),
        ];

        let positions = aggregate(&deals, None);
        assert_eq!(positions.len(), 1);

        let p = &positions[0];
        assert_eq!(p.ticket, 1);
        assert_eq!(p.side, Side::Buy);
        assert_eq!(p.volume, dec!(0.01));
        assert_eq!(p.open_price, dec!(100));
        assert_eq!(p.close_price, dec!(110));
        assert_eq!(p.profit, dec!(10));
        assert_eq!(p.duration_minutes, dec!(5.0));
    }

    #[test]
    fn single_deal_group_is_skipped() {
        let deals = vec![deal(
            7,
            DealType::Buy,
            DealEntry::In,
            dec!(0.5),
            dec!(100),
            dec!(0),
            0,
        )];
        assert!(aggregate(&deals, None).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(&[], None).is_empty());
    }

    #[test]
    fn balance_deals_never_contribute() {
        let deals = vec![
            deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0),
            deal(1, DealType::Balance, DealEntry::Other, dec!(0), dec!(0), dec!(500), 2),
            deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(110), dec!(10), 5),
        ];
        let positions = aggregate(&deals, None);
        assert_eq!(positions.len(), 1);
        // The 500 balance credit is excluded from the position's profit.
        assert_eq!(positions[0].profit, dec!(10));
    }

    #[test]
    fn volume_counts_entry_deals_only() {
        // One in-deal, two partial out-deals.
        let deals = vec![
            deal(3, DealType::Sell, DealEntry::In, dec!(1.0), dec!(2400), dec!(0), 0),
            deal(3, DealType::Buy, DealEntry::Out, dec!(0.4), dec!(2390), dec!(4), 10),
            deal(3, DealType::Buy, DealEntry::Out, dec!(0.6), dec!(2380), dec!(12), 20),
        ];
        let positions = aggregate(&deals, None);
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].volume, dec!(1.0));
        assert_eq!(positions[0].side, Side::Sell);
        assert_eq!(positions[0].profit, dec!(16));
        assert_eq!(positions[0].close_price, dec!(2380));
    }

    #[test]
    fn grouping_is_order_independent() {
        let mut deals = vec![
            deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0),
            deal(2, DealType::Sell, DealEntry::In, dec!(0.02), dec!(50), dec!(0), 1),
            deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(110), dec!(10), 5),
            deal(2, DealType::Buy, DealEntry::Out, dec!(0.02), dec!(45), dec!(7), 8),
        ];
        let forward = aggregate(&deals, None);
        deals.reverse();
        let backward = aggregate(&deals, None);

        // Same positions either way; ordering is by close time desc.
        assert_eq!(forward.len(), 2);
        assert_eq!(forward, backward);
        assert!(forward[0].close_time >= forward[1].close_time);
    }

    #[test]
    fn sorted_by_close_time_descending() {
        let deals = vec![
            deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0),
            deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(101), dec!(1), 3),
            deal(2, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 1),
            deal(2, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(102), dec!(2), 9),
        ];
        let positions = aggregate(&deals, None);
        assert_eq!(positions[0].ticket, 2);
        assert_eq!(positions[1].ticket, 1);
    }

    #[test]
    fn equal_close_times_keep_first_seen_order() {
        let deals = vec![
            deal(5, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0),
            deal(9, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0),
            deal(5, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(101), dec!(1), 6),
            deal(9, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(101), dec!(1), 6),
        ];
        let positions = aggregate(&deals, None);
        assert_eq!(positions[0].ticket, 5);
        assert_eq!(positions[1].ticket, 9);
    }

    #[test]
    fn symbol_filter_is_exact_and_applied_before_grouping() {
        let mut gold_in = deal(2, DealType::Buy, DealEntry::In, dec!(0.1), dec!(2400), dec!(0), 0);
        gold_in.symbol = "XAUUSD".to_string();
        let mut gold_out = deal(2, DealType::Buy, DealEntry::Out, dec!(0.1), dec!(2410), dec!(10), 4);
        gold_out.symbol = "XAUUSD".to_string();

        let deals = vec![
            deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0),
            deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(110), dec!(10), 5),
            gold_in,
            gold_out,
        ];

        let unfiltered = aggregate(&deals, None);
        let filtered = aggregate(&deals, Some("XAUUSD"));

        assert_eq!(unfiltered.len(), 2);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].symbol, "XAUUSD");
        assert!(unfiltered.contains(&filtered[0]));

        // Prefix does not match.
        assert!(aggregate(&deals, Some("XAU")).is_empty());
    }

    #[test]
    fn profit_is_rounded_to_two_decimals() {
        let deals = vec![
            deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(3.333), 0),
            deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(110), dec!(3.333), 5),
        ];
        let positions = aggregate(&deals, None);
        assert_eq!(positions[0].profit, dec!(6.67));
    }

    #[test]
    fn swap_and_commission_keep_native_precision() {
        let mut d1 = deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0);
        d1.swap = dec!(-0.123);
        d1.commission = dec!(-0.070);
        let mut d2 = deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(110), dec!(10), 5);
        d2.swap = dec!(-0.001);
        d2.commission = dec!(-0.070);

        let positions = aggregate(&[d1, d2], None);
        assert_eq!(positions[0].swap, dec!(-0.124));
        assert_eq!(positions[0].commission, dec!(-0.140));
    }

    #[test]
    fn comment_comes_from_closing_deal() {
        let mut d1 = deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0);
        d1.comment = Some("opened".to_string());
        let mut d2 = deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(110), dec!(10), 5);
        d2.comment = Some("tp hit".to_string());

        let positions = aggregate(&[d1, d2], None);
        assert_eq!(positions[0].comment, "tp hit");
    }

    #[test]
    fn missing_close_comment_defaults_to_empty() {
        let deals = vec![
            deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0),
            deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(110), dec!(10), 5),
        ];
        assert_eq!(aggregate(&deals, None)[0].comment, "");
    }

    #[test]
    fn aggregation_is_idempotent() {
        let deals = vec![
            deal(1, DealType::Buy, DealEntry::In, dec!(0.01), dec!(100), dec!(0), 0),
            deal(1, DealType::Buy, DealEntry::Out, dec!(0.01), dec!(110), dec!(10), 5),
            deal(2, DealType::Sell, DealEntry::In, dec!(0.02), dec!(50), dec!(0), 1),
            deal(2, DealType::Buy, DealEntry::Out, dec!(0.02), dec!(45), dec!(7), 8),
        ];
        assert_eq!(aggregate(&deals, None), aggregate(&deals, None));
    }
}
