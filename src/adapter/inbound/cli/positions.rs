//! Handler for the `positions` command.

use crate::adapter::inbound::cli::command::PositionsArgs;
use crate::adapter::inbound::cli::{output, table};
use crate::adapter::outbound::file::FileDealHistory;
use crate::domain::position::{aggregate, ClosedPosition};
use crate::domain::window::TimeWindow;
use crate::error::Result;
use crate::port::outbound::DealHistory;

/// Execute `positions`: fetch deals, reconstruct round trips, print.
pub async fn execute(args: &PositionsArgs) -> Result<()> {
    let window = match &args.from {
        Some(from) => TimeWindow::from_bounds(from, args.to.as_deref())?,
        None => TimeWindow::lookback_days(args.days),
    };

    let history = FileDealHistory::new(&args.deals);
    let deals = history.fetch_deals(window).await?;
    let positions = aggregate(&deals, args.symbol.as_deref());

    if args.pretty {
        print_table(&positions);
    } else {
        println!("{}", serde_json::to_string_pretty(&positions)?);
    }
    Ok(())
}

fn print_table(positions: &[ClosedPosition]) {
    if positions.is_empty() {
        output::note("No closed positions found.");
        return;
    }

    let headers = [
        "ticket", "symbol", "type", "volume", "open", "close", "profit", "open time",
        "close time",
    ];
    let rows: Vec<Vec<String>> = positions
        .iter()
        .map(|p| {
            vec![
                p.ticket.to_string(),
                p.symbol.clone(),
                p.side.to_string(),
                p.volume.to_string(),
                p.open_price.to_string(),
                p.close_price.to_string(),
                p.profit.to_string(),
                p.open_time.format("%Y-%m-%d %H:%M").to_string(),
                p.close_time.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect();

    print!("{}", table::render(&headers, &rows));

    let total: rust_decimal::Decimal = positions.iter().map(|p| p.profit).sum();
    output::section("Summary");
    output::field("positions", positions.len());
    output::field(
        "total profit",
        output::signed(total, total.is_sign_negative()),
    );
}
