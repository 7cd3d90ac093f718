//! Terminal User Interface components

pub mod app;
pub mod event_loop;
pub mod ui;


use crate::config::AppConfig;
use anyhow::Result;

/// Run the Terminal User Interface
pub async fn run_tui(config: AppConfig) -> Result<()> {
    event_loop::run_tui_event_loop(config).await
}
