//! Handler for the `rates` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::RatesArgs;
use crate::adapter::inbound::cli::{output, table};
use crate::adapter::outbound::file::FileRateHistory;
use crate::domain::candle::{Candle, PeriodChange};
use crate::domain::window::TimeWindow;
use crate::error::{Error, Result};
use crate::port::outbound::RateHistory;

/// Execute `rates`: summarize recent OHLC history for a symbol.
pub async fn execute(args: &RatesArgs) -> Result<()> {
    // Months are approximated as 30 days, matching the terminal's lookback.
    let window = TimeWindow::lookback_days(f64::from(args.months) * 30.0);

    let history = FileRateHistory::new(&args.candles);
    let candles = history.fetch_candles(&args.symbol, window).await?;
    if candles.is_empty() {
        return Err(Error::Fetch(format!(
            "no rate history for {} in the last {} months",
            args.symbol, args.months
        )));
    }

    let change = PeriodChange::over(&candles);
    let recent_from = candles.len().saturating_sub(args.rows);
    let recent = &candles[recent_from..];

    if args.pretty {
        print_summary(args, &candles, change.as_ref(), recent);
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "symbol": args.symbol,
                "bars": candles.len(),
                "from": candles[0].time,
                "to": candles[candles.len() - 1].time,
                "change": change,
                "recent": recent,
            }))?
        );
    }
    Ok(())
}

fn print_summary(
    args: &RatesArgs,
    candles: &[Candle],
    change: Option<&PeriodChange>,
    recent: &[Candle],
) {
    output::section(&format!("{} rate history", args.symbol));
    output::field("bars", candles.len());
    output::field("from", candles[0].time.format("%Y-%m-%d"));
    output::field("to", candles[candles.len() - 1].time.format("%Y-%m-%d"));
    if let Some(change) = change {
        output::field("first close", change.first_close);
        output::field("last close", change.last_close);
        output::field(
            "change",
            output::signed(
                format!("{} ({}%)", change.change, change.change_pct),
                change.change.is_sign_negative(),
            ),
        );
    }

    output::section(&format!("Last {} bars", recent.len()));
    let headers = ["time", "open", "high", "low", "close", "ticks"];
    let rows: Vec<Vec<String>> = recent
        .iter()
        .map(|c| {
            vec![
                c.time.format("%Y-%m-%d").to_string(),
                c.open.to_string(),
                c.high.to_string(),
                c.low.to_string(),
                c.close.to_string(),
                c.tick_volume.to_string(),
            ]
        })
        .collect();
    print!("{}", table::render(&headers, &rows));
}
