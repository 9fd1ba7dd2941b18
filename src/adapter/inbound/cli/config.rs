//! Handlers for the `config` command group.

use std::io;
use std::path::Path;

use crate::adapter::inbound::cli::command::{ConfigCommand, ConfigInitArgs};
use crate::adapter::inbound::cli::output;
use crate::config::{Config, NEWS_API_KEY_VAR};
use crate::error::Result;

/// Template written by `config init`.
const TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Dispatch a `config` subcommand.
pub fn execute(command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init(args) => init(args),
        ConfigCommand::Show(args) => show(&args.config),
        ConfigCommand::Validate(args) => validate(&args.config),
    }
}

fn init(args: &ConfigInitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", args.path.display()),
        )
        .into());
    }
    std::fs::write(&args.path, TEMPLATE)?;
    output::success(&format!("wrote {}", args.path.display()));
    output::note(&format!(
        "set {NEWS_API_KEY_VAR} in the environment (or .env) for news queries"
    ));
    Ok(())
}

fn show(path: &Path) -> Result<()> {
    let config = if path.exists() {
        Config::load(path)?
    } else {
        output::note(&format!("{} not found, showing defaults", path.display()));
        Config::default()
    };

    output::section("monitor");
    output::field("symbol", &config.monitor.symbol);
    output::field("target_price", config.monitor.target_price);
    output::field("volume", config.monitor.volume);
    output::field("check_interval", format!("{}s", config.monitor.check_interval_secs));
    output::field("max_retries", config.monitor.max_retries);
    output::field("retry_delay", format!("{}s", config.monitor.retry_delay_secs));

    output::section("news");
    output::field("days_back", config.news.days_back);
    output::field("limit", config.news.limit);
    output::field(
        "api key",
        if config.news_api_key().is_some() {
            "set"
        } else {
            "not set"
        },
    );

    output::section("logging");
    output::field("level", &config.logging.level);
    output::field("format", &config.logging.format);
    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    output::success(&format!("{} is valid", path.display()));
    Ok(())
}
