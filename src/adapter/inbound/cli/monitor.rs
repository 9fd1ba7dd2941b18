//! Handler for the `monitor` command.

use std::time::Duration;

use crate::adapter::inbound::cli::command::MonitorArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::dryrun::DryRunGateway;
use crate::adapter::outbound::file::FileTickSource;
use crate::app::{MonitorOutcome, MonitorSettings, PriceMonitor};
use crate::config::Config;
use crate::error::Result;

/// Merge CLI overrides onto the `[monitor]` config table.
fn settings(config: &Config, args: &MonitorArgs) -> MonitorSettings {
    let mut settings = MonitorSettings::from(&config.monitor);
    if let Some(symbol) = &args.symbol {
        settings.symbol = symbol.clone();
    }
    if let Some(target) = args.target_price {
        settings.target_price = target;
    }
    if let Some(volume) = args.volume {
        settings.volume = volume;
    }
    if let Some(secs) = args.interval {
        settings.check_interval = Duration::from_secs(secs);
    }
    settings.max_polls = args.max_polls;
    settings
}

/// Execute `monitor`: connect, poll the price, fire at most one order.
pub async fn execute(config: &Config, args: &MonitorArgs) -> Result<()> {
    let settings = settings(config, args);

    output::section("Price monitor");
    output::field("symbol", &settings.symbol);
    output::field("target", settings.target_price);
    output::field("volume", settings.volume);
    output::field("interval", format!("{}s", settings.check_interval.as_secs()));

    let ticks = FileTickSource::new(&args.ticks);
    let orders = DryRunGateway::new();
    let monitor = PriceMonitor::new(ticks, orders, settings);

    monitor.connect().await?;
    match monitor.run().await? {
        MonitorOutcome::Executed(receipt) => {
            output::section("Order");
            output::field("ticket", receipt.ticket);
            output::field("symbol", &receipt.symbol);
            output::field("volume", receipt.volume);
            output::field("price", receipt.price);
            if receipt.dry_run {
                output::note("dry run: no order was routed");
            }
            output::success("target price reached, order executed");
        }
        MonitorOutcome::Expired { polls, misses } => {
            output::warning(&format!(
                "target not reached after {polls} polls ({misses} without a quote)"
            ));
        }
    }
    Ok(())
}
