//! CLI command implementations

pub mod console;
pub mod control;
pub mod players;
pub mod status;

use crate::cli::args::Commands;
use crate::config::AppConfig;
use crate::models::ServerAction;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute_command(command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Status => status::execute_status_command(config).await,
        Commands::Start { server_id } => {
            control::execute_control_command(config, &server_id, ServerAction::Start).await
        }
        Commands::Stop { server_id } => {
            control::execute_control_command(config, &server_id, ServerAction::Stop).await
        }
        Commands::Console { server_id, follow } => {
            console::execute_console_command(config, &server_id, follow).await
        }
        Commands::Players { server_id } => {
            players::execute_players_command(config, &server_id).await
        }
    }
}
