//! Sync controller: selection, snapshots, push updates and commands

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::ServerEntry;
use crate::models::{
    AppEvent, CommandResponse, NOTIFICATION_TTL, NotificationId, NotificationKind, PushEvent,
    ServerAction, StatusResponse,
};
use crate::remote::ServerApi;
use crate::sync::notifications::NotificationCenter;
use crate::sync::state::DashboardState;

pub struct SyncController {
    state: DashboardState,
    notifications: NotificationCenter,
    api: Arc<dyn ServerApi>,
    tx: mpsc::UnboundedSender<AppEvent>,
    notification_ttl: Duration,
}

impl SyncController {
    /// Background tasks report through `tx`; whoever owns the receiver must
    /// feed every event back into [`handle_event`](Self::handle_event).
    pub fn new(
        servers: &[ServerEntry],
        api: Arc<dyn ServerApi>,
        tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            state: DashboardState::from_entries(servers),
            notifications: NotificationCenter::new(),
            api,
            tx,
            notification_ttl: NOTIFICATION_TTL,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Select a listed server, reveal its detail panel and load its snapshot
    pub fn select_server(&mut self, server_id: &str) {
        if !self.state.select(server_id) {
            log::warn!("Ignoring selection of unknown server '{}'", server_id);
            return;
        }
        log::info!("Selected server {}", server_id);
        self.load_snapshot(server_id);
    }

    /// Fetch console and roster independently; results come back as events
    pub fn load_snapshot(&self, server_id: &str) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let id = server_id.to_string();
        tokio::spawn(async move {
            match api.console(&id).await {
                Ok(logs) => {
                    let _ = tx.send(AppEvent::ConsoleLoaded(id, logs));
                }
                Err(e) => log::error!("Error loading console for {}: {}", id, e),
            }
        });

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let id = server_id.to_string();
        tokio::spawn(async move {
            match api.players(&id).await {
                Ok(players) => {
                    let _ = tx.send(AppEvent::PlayersLoaded(id, players));
                }
                Err(e) => log::error!("Error loading players for {}: {}", id, e),
            }
        });
    }

    /// Poll the status of every listed server once
    pub fn resync_statuses(&self) {
        let ids = self.state.server_ids();
        log::debug!("Resyncing status of {} server(s)", ids.len());

        for id in ids {
            let api = Arc::clone(&self.api);
            let tx = self.tx.clone();
            tokio::spawn(async move {
                match api.status(&id).await {
                    Ok(status) => {
                        let _ = tx.send(AppEvent::StatusLoaded(id, status));
                    }
                    Err(e) => log::error!("Error loading status for {}: {}", id, e),
                }
            });
        }
    }

    pub fn apply_push_update(&mut self, event: PushEvent) {
        log::trace!("Push update for {}", event.server_id());
        match event {
            PushEvent::ConsoleUpdate {
                server_id,
                log_line,
            } => {
                if self.state.is_selected(&server_id) {
                    self.state.append_console(log_line);
                }
            }
            PushEvent::PlayersUpdate { server_id, players } => {
                self.state.set_player_count(&server_id, players.len());
                if self.state.is_selected(&server_id) {
                    self.state.replace_players(players);
                }
            }
            PushEvent::ServerStatusUpdate { server_id, status } => {
                if !self.state.set_status(&server_id, status) {
                    log::debug!("Status update for unlisted server {}", server_id);
                }
            }
        }
    }

    /// Issue a start/stop command for a listed server
    pub fn send_command(&mut self, server_id: &str, action: ServerAction) {
        if self.state.server(server_id).is_none() {
            log::warn!(
                "Ignoring {} for unknown server '{}'",
                action.endpoint(),
                server_id
            );
            return;
        }

        if action == ServerAction::Start && self.state.is_selected(server_id) {
            self.state.clear_console();
        }

        log::info!("Sending {} to {}", action.endpoint(), server_id);
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let id = server_id.to_string();
        tokio::spawn(async move {
            let outcome = api
                .command(&id, action)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::CommandCompleted {
                server_id: id,
                action,
                outcome,
            });
        });
    }

    /// Show a notification and schedule its removal
    pub fn render_notification(&mut self, kind: NotificationKind, message: String) -> NotificationId {
        let id = self.notifications.push(kind, message);

        let tx = self.tx.clone();
        let ttl = self.notification_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let _ = tx.send(AppEvent::NotificationExpired(id));
        });
        id
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) {
        if !self.notifications.dismiss(id) {
            log::trace!("Notification {} already removed", id);
        }
    }

    /// Apply one event to completion
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ConsoleLoaded(server_id, logs) => {
                if self.state.is_selected(&server_id) {
                    self.state.replace_console(logs);
                } else {
                    log::debug!("Discarding stale console snapshot for {}", server_id);
                }
            }
            AppEvent::PlayersLoaded(server_id, players) => {
                if self.state.is_selected(&server_id) {
                    self.state.set_player_count(&server_id, players.len());
                    self.state.replace_players(players);
                } else {
                    log::debug!("Discarding stale player snapshot for {}", server_id);
                }
            }
            AppEvent::StatusLoaded(server_id, status) => {
                self.apply_status(&server_id, status);
            }
            AppEvent::CommandCompleted {
                server_id,
                action,
                outcome,
            } => {
                self.apply_command_outcome(&server_id, action, outcome);
            }
            AppEvent::Push(event) => self.apply_push_update(event),
            AppEvent::PushConnected => {
                self.state.set_push_connected(true);
                self.resync_statuses();
            }
            AppEvent::PushDisconnected => {
                log::warn!("Push channel disconnected");
                self.state.set_push_connected(false);
            }
            AppEvent::NotificationExpired(id) => self.dismiss_notification(id),
            AppEvent::RefreshDue => {
                if let Some(id) = self.state.selected_id().map(str::to_string) {
                    self.load_snapshot(&id);
                }
            }
            AppEvent::Tick => {}
        }
    }

    fn apply_status(&mut self, server_id: &str, status: StatusResponse) {
        self.state.set_status(server_id, status.status);
        if let Some(count) = status.players {
            self.state.set_player_count(server_id, count);
        }
    }

    fn apply_command_outcome(
        &mut self,
        server_id: &str,
        action: ServerAction,
        outcome: Result<CommandResponse, String>,
    ) {
        match outcome {
            Ok(response) if response.success => {
                self.render_notification(
                    NotificationKind::Success,
                    format!("{}: {}", action.success_prefix(), response.message),
                );
                // Confirmation arrives later as a status push
                self.state.set_status(server_id, action.predicted_status());
            }
            Ok(response) => {
                let message = if response.message.is_empty() {
                    action.failure_message().to_string()
                } else {
                    response.message
                };
                self.render_notification(NotificationKind::Error, message);
            }
            Err(e) => {
                log::error!("{} for {} failed: {}", action.failure_message(), server_id, e);
                self.render_notification(
                    NotificationKind::Error,
                    action.failure_message().to_string(),
                );
            }
        }
    }
}
