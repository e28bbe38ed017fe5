// Main entry point for browser-junit

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use browser_junit::cli::{Cli, Commands};
use browser_junit::commands::{effective_config, handle_config, handle_replay};
use browser_junit::config::Config;
use browser_junit::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    info!("Starting browser-junit v{}", env!("CARGO_PKG_VERSION"));

    let file_config = match &cli.config_file {
        Some(path) => Some(
            Config::load_from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        ),
        None => Config::load().context("Failed to load configuration")?,
    };

    match &cli.command {
        Commands::Replay(args) => {
            let config = effective_config(file_config, &args.reporter);
            handle_replay(args, &config).await?;
            Ok(())
        }
        Commands::Config(overrides) => handle_config(&effective_config(file_config, overrides)),
    }
}
