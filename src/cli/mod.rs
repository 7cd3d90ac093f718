//! Command Line Interface module
//!
//! This module contains the CLI argument parsing, the one-shot command
//! implementations, and the Terminal User Interface (TUI).

pub mod args;
pub mod commands;
pub mod tui;

pub use args::*;

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::utils::logging::init_cli_logging;

/// Main CLI application runner
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_cli_logging(cli.verbose, cli.quiet, cli.command.is_none())?;

    log::info!("{} {} starting", crate::APP_NAME, crate::VERSION);

    let config = load_config(&cli)?;

    match &cli.command {
        Some(command) => commands::execute_command(command.clone(), &config).await,
        None => tui::run_tui(config).await,
    }
}

/// Load the config file and apply command line overrides
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(url) = &cli.server_url {
        config.server_url = url.clone();
        config.validate()?;
    }

    log::debug!(
        "Using backend {} with {} configured server(s)",
        config.server_url,
        config.servers.len()
    );
    Ok(config)
}
