//! TUI event loop and handling

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

use crate::cli::tui::app::TuiApp;
use crate::cli::tui::ui::ui;
use crate::config::AppConfig;
use crate::errors::RaceDeckError;
use crate::models::AppEvent;
use crate::remote::{HttpServerApi, PushChannel};
use crate::sync::SyncController;

/// Run the main TUI event loop
pub async fn run_tui_event_loop(config: AppConfig) -> Result<()> {
    // Create event channel
    let (tx, mut rx) = mpsc::unbounded_channel();

    let api = Arc::new(HttpServerApi::new(&config.server_url));
    let controller = SyncController::new(&config.servers, api, tx.clone());
    let mut app = TuiApp::new(controller);

    let push_handle = PushChannel::from_config(&config)?.spawn(tx.clone());

    // Spawn tick generator
    let tx_tick = tx.clone();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));
    let tick_handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    let refresh_handle = config.refresh_interval().map(|period| {
        let tx_refresh = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx_refresh.send(AppEvent::RefreshDue).is_err() {
                    break;
                }
            }
        })
    });

    // Statuses are unknown until the first sweep; the push channel sweeps again on connect
    app.controller.resync_statuses();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| ui(f, &app)) {
            break Err(RaceDeckError::Tui(format!("draw failed: {}", e)).into());
        }

        tokio::select! {
            polled = tokio::task::spawn_blocking(|| event::poll(Duration::from_millis(50))) => {
                if !matches!(polled, Ok(Ok(true))) {
                    continue;
                }
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if app.handle_key(key) {
                            break Ok(());
                        }
                    }
                    Ok(_) => {}
                    Err(e) => break Err(e.into()),
                }
            }

            Some(event) = rx.recv() => {
                app.controller.handle_event(event);
            }
        }
    };

    // Cleanup
    push_handle.abort();
    tick_handle.abort();
    if let Some(handle) = refresh_handle {
        handle.abort();
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
