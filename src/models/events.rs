//! Application events for the sync controller and the TUI

use serde::{Deserialize, Serialize};

use crate::models::notification::NotificationId;
use crate::models::responses::{CommandResponse, StatusResponse};
use crate::models::server::{PlayerEntry, ServerAction, ServerStatus};

/// Unsolicited state updates delivered by the push channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum PushEvent {
    ConsoleUpdate {
        server_id: String,
        log_line: String,
    },
    ServerStatusUpdate {
        server_id: String,
        status: ServerStatus,
    },
    PlayersUpdate {
        server_id: String,
        players: Vec<PlayerEntry>,
    },
}

impl PushEvent {
    pub fn server_id(&self) -> &str {
        match self {
            PushEvent::ConsoleUpdate { server_id, .. }
            | PushEvent::ServerStatusUpdate { server_id, .. }
            | PushEvent::PlayersUpdate { server_id, .. } => server_id,
        }
    }
}

/// Application events for communication between background tasks and the event loop
#[derive(Debug)]
pub enum AppEvent {
    // Snapshot results, tagged with the server they were requested for
    ConsoleLoaded(String, Vec<String>),      // server_id, logs
    PlayersLoaded(String, Vec<PlayerEntry>), // server_id, players
    StatusLoaded(String, StatusResponse),    // server_id, status

    // Control command results
    CommandCompleted {
        server_id: String,
        action: ServerAction,
        /// `Err` carries the transport failure description
        outcome: Result<CommandResponse, String>,
    },

    // Push channel
    Push(PushEvent),
    PushConnected,
    PushDisconnected,

    // Notification lifecycle
    NotificationExpired(NotificationId),

    // General events
    RefreshDue,
    Tick,
}
