use crate::config::AppConfig;
use crate::remote::{HttpServerApi, ServerApi};
use anyhow::{Context, Result};

pub async fn execute_players_command(config: &AppConfig, server_id: &str) -> Result<()> {
    let api = HttpServerApi::new(&config.server_url);
    let players = api
        .players(server_id)
        .await
        .with_context(|| format!("Failed to load players for {}", server_id))?;

    if players.is_empty() {
        println!("No players connected");
        return Ok(());
    }

    println!("{:<24} {:<32} {}", "Driver", "Car", "Best lap");
    for player in &players {
        println!("{:<24} {:<32} {}", player.name, player.car, player.laptime);
    }
    Ok(())
}
