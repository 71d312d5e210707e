use clap::Parser;
use stagehand_config::{ConfigProvider, StagehandConfig};
use std::process;

mod cli;
mod commands;
mod display;
mod logging;

use cli::Cli;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

/// Load configuration, falling back to defaults so commands that do not
/// need it keep working when a file is broken
fn load_cli_configuration() -> StagehandConfig {
    match ConfigProvider::new().load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Configuration loading failed: {e}");
            eprintln!("Continuing with default configuration...");
            StagehandConfig::default()
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = load_cli_configuration();

    logging::configure_logging(cli.verbose, cli.debug, cli.quiet, &config.logging.level);
    tracing::debug!(command = ?cli.command, "starting");

    let code = match commands::run(cli, &config).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    };
    process::exit(code);
}
