use crate::config::AppConfig;
use crate::remote::{HttpServerApi, ServerApi};
use anyhow::Result;

pub async fn execute_status_command(config: &AppConfig) -> Result<()> {
    if config.servers.is_empty() {
        println!("No servers configured. Add [[servers]] entries to your config file.");
        return Ok(());
    }

    let api = HttpServerApi::new(&config.server_url);
    println!("📊 Servers on {}:", api.base_url());

    for server in &config.servers {
        match api.status(&server.id).await {
            Ok(status) => {
                let players = status
                    .players
                    .map(|count| format!(" - {} player(s)", count))
                    .unwrap_or_default();
                println!(
                    "  {} {} ({}) - {}{}",
                    status.status.symbol(),
                    server.name,
                    server.id,
                    status.status,
                    players
                );
            }
            Err(e) => {
                log::warn!("Status request for {} failed: {}", server.id, e);
                println!("  ? {} ({}) - unavailable", server.name, server.id);
            }
        }
    }
    Ok(())
}
