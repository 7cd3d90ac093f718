use crate::config::AppConfig;
use crate::models::ServerAction;
use crate::remote::{HttpServerApi, ServerApi};
use anyhow::{Context, Result};

/// Send start/stop and fail when the backend refuses
pub async fn execute_control_command(
    config: &AppConfig,
    server_id: &str,
    action: ServerAction,
) -> Result<()> {
    let api = HttpServerApi::new(&config.server_url);
    let response = api
        .command(server_id, action)
        .await
        .with_context(|| action.failure_message())?;

    if response.success {
        println!("✅ {}: {}", action.success_prefix(), response.message);
        Ok(())
    } else {
        Err(anyhow::anyhow!("{}", response.message))
    }
}
