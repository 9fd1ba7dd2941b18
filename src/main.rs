use clap::Parser;

use tradedesk::adapter::inbound::cli;
use tradedesk::adapter::inbound::cli::command::{Cli, Commands};
use tradedesk::config::Config;
use tradedesk::error::Result;

/// Load the config file for commands that take one; a missing file falls
/// back to defaults, unreadable or invalid content is fatal.
fn load_config(path: &std::path::Path) -> Result<Config> {
    if path.exists() {
        Config::load(path)
    } else {
        Ok(Config::default())
    }
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Positions(args) => cli::positions::execute(args).await,
        Commands::Monitor(args) => cli::monitor::execute(config, args).await,
        Commands::News(args) => cli::news::execute(config, args).await,
        Commands::Rates(args) => cli::rates::execute(args).await,
        Commands::Config(command) => cli::config::execute(command),
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Monitor(args) => load_config(&args.config),
        Commands::News(args) => load_config(&args.config),
        _ => Ok(Config::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    };
    config.init_logging();

    if let Err(e) = run(&cli, &config).await {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
