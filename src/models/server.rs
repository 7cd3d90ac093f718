//! Server-related data models

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a game server as shown by its status dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    #[default]
    Stopped,
    Starting,
    Running,
}

impl ServerStatus {
    pub fn color(&self) -> Color {
        match self {
            ServerStatus::Stopped => Color::Red,
            ServerStatus::Starting => Color::Yellow,
            ServerStatus::Running => Color::Green,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ServerStatus::Stopped => "●",
            ServerStatus::Starting => "◐",
            ServerStatus::Running => "●",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServerStatus::Stopped => "stopped",
            ServerStatus::Starting => "starting",
            ServerStatus::Running => "running",
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the server list
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSummary {
    pub id: String,
    pub name: String,
    pub status: ServerStatus,
    pub player_count: usize,
    pub selected: bool,
}

impl ServerSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: ServerStatus::default(),
            player_count: 0,
            selected: false,
        }
    }
}

/// A connected driver as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub car: String,
    pub laptime: String,
}

/// Control commands accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerAction {
    Start,
    Stop,
}

impl ServerAction {
    /// Path segment used by the control endpoints
    pub fn endpoint(&self) -> &'static str {
        match self {
            ServerAction::Start => "start",
            ServerAction::Stop => "stop",
        }
    }

    /// Status the list entry is predicted to reach after a successful command
    pub fn predicted_status(&self) -> ServerStatus {
        match self {
            ServerAction::Start => ServerStatus::Starting,
            ServerAction::Stop => ServerStatus::Stopped,
        }
    }

    pub fn success_prefix(&self) -> &'static str {
        match self {
            ServerAction::Start => "Server started",
            ServerAction::Stop => "Server stopped",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            ServerAction::Start => "Error starting server",
            ServerAction::Stop => "Error stopping server",
        }
    }
}
