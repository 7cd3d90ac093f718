use crate::config::AppConfig;
use crate::models::{AppEvent, PushEvent};
use crate::remote::{HttpServerApi, PushChannel, ServerApi};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tokio::sync::mpsc;

pub async fn execute_console_command(
    config: &AppConfig,
    server_id: &str,
    follow: bool,
) -> Result<()> {
    let api = HttpServerApi::new(&config.server_url);
    let logs = api
        .console(server_id)
        .await
        .with_context(|| format!("Failed to load console for {}", server_id))?;

    for line in &logs {
        println!("{}", line);
    }

    if follow {
        follow_console(config, server_id).await?;
    }
    Ok(())
}

/// The console line carried by `event` when it belongs to `server_id`
pub fn console_line_for<'a>(event: &'a AppEvent, server_id: &str) -> Option<&'a str> {
    match event {
        AppEvent::Push(push @ PushEvent::ConsoleUpdate { log_line, .. })
            if push.server_id() == server_id =>
        {
            Some(log_line.as_str())
        }
        _ => None,
    }
}

/// Stream push console lines for one server until Ctrl+C or channel shutdown
async fn follow_console(config: &AppConfig, server_id: &str) -> Result<()> {
    let channel = PushChannel::from_config(config)?;
    log::info!("Following {} via {}", server_id, channel.url());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = channel.spawn(tx);
    let mut stdout = io::stdout();

    loop {
        tokio::select! {
            event = rx.recv() => {
                match event {
                    Some(AppEvent::PushConnected) => log::info!("Push channel connected"),
                    Some(AppEvent::PushDisconnected) => log::warn!("Push channel lost, reconnecting..."),
                    Some(event) => {
                        if let Some(line) = console_line_for(&event, server_id) {
                            println!("{}", line);
                            let _ = stdout.flush();
                        }
                    }
                    None => break,
                }
            }

            _ = tokio::signal::ctrl_c() => {
                log::debug!("Received Ctrl+C, stopping console stream");
                break;
            }
        }
    }

    handle.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServerStatus;

    fn console_push(server_id: &str, line: &str) -> AppEvent {
        AppEvent::Push(PushEvent::ConsoleUpdate {
            server_id: server_id.to_string(),
            log_line: line.to_string(),
        })
    }

    #[test]
    fn test_follow_keeps_only_the_requested_server() {
        let own = console_push("fruits-line", "[INF] Lap completed");
        assert_eq!(
            console_line_for(&own, "fruits-line"),
            Some("[INF] Lap completed")
        );

        let other = console_push("shutoku-rush-hour", "[INF] Lap completed");
        assert_eq!(console_line_for(&other, "fruits-line"), None);

        let status = AppEvent::Push(PushEvent::ServerStatusUpdate {
            server_id: "fruits-line".to_string(),
            status: ServerStatus::Running,
        });
        assert_eq!(console_line_for(&status, "fruits-line"), None);
        assert_eq!(console_line_for(&AppEvent::PushConnected, "fruits-line"), None);
    }
}
