//! Dashboard state store

use crate::config::ServerEntry;
use crate::models::{PlayerEntry, ServerStatus, ServerSummary};

/// Header of the detail panel, present once a server has been selected
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub server_id: String,
    pub server_name: String,
}

/// Everything the dashboard renders.
///
/// Lookups by server id that miss are reported through the return value and
/// otherwise ignored.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    servers: Vec<ServerSummary>,
    selected: Option<String>,
    detail: Option<DetailPanel>,
    console: Vec<String>,
    /// Lines scrolled up from the newest line; 0 follows the tail
    console_offset: usize,
    players: Vec<PlayerEntry>,
    push_connected: bool,
}

impl DashboardState {
    pub fn new(servers: Vec<ServerSummary>) -> Self {
        Self {
            servers,
            ..Self::default()
        }
    }

    pub fn from_entries(entries: &[ServerEntry]) -> Self {
        Self::new(
            entries
                .iter()
                .map(|entry| ServerSummary::new(&entry.id, &entry.name))
                .collect(),
        )
    }

    pub fn servers(&self) -> &[ServerSummary] {
        &self.servers
    }

    pub fn server(&self, server_id: &str) -> Option<&ServerSummary> {
        self.servers.iter().find(|s| s.id == server_id)
    }

    fn server_mut(&mut self, server_id: &str) -> Option<&mut ServerSummary> {
        self.servers.iter_mut().find(|s| s.id == server_id)
    }

    pub fn server_ids(&self) -> Vec<String> {
        self.servers.iter().map(|s| s.id.clone()).collect()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, server_id: &str) -> bool {
        self.selected.as_deref() == Some(server_id)
    }

    /// `None` while the welcome placeholder is shown
    pub fn detail(&self) -> Option<&DetailPanel> {
        self.detail.as_ref()
    }

    /// Make `server_id` the single selected entry. Returns false for unknown ids.
    pub fn select(&mut self, server_id: &str) -> bool {
        let Some(name) = self.server(server_id).map(|s| s.name.clone()) else {
            return false;
        };

        for server in &mut self.servers {
            server.selected = server.id == server_id;
        }
        self.selected = Some(server_id.to_string());
        self.detail = Some(DetailPanel {
            server_id: server_id.to_string(),
            server_name: name,
        });
        true
    }

    pub fn console(&self) -> &[String] {
        &self.console
    }

    pub fn console_offset(&self) -> usize {
        self.console_offset
    }

    pub fn replace_console(&mut self, logs: Vec<String>) {
        self.console = logs;
        self.scroll_console_to_bottom();
    }

    pub fn append_console(&mut self, line: String) {
        self.console.push(line);
        self.scroll_console_to_bottom();
    }

    pub fn clear_console(&mut self) {
        self.console.clear();
        self.scroll_console_to_bottom();
    }

    pub fn scroll_console_to_bottom(&mut self) {
        self.console_offset = 0;
    }

    pub fn scroll_console_up(&mut self, lines: usize) {
        let max = self.console.len().saturating_sub(1);
        self.console_offset = (self.console_offset + lines).min(max);
    }

    pub fn scroll_console_down(&mut self, lines: usize) {
        self.console_offset = self.console_offset.saturating_sub(lines);
    }

    pub fn players(&self) -> &[PlayerEntry] {
        &self.players
    }

    pub fn replace_players(&mut self, players: Vec<PlayerEntry>) {
        self.players = players;
    }

    pub fn set_status(&mut self, server_id: &str, status: ServerStatus) -> bool {
        match self.server_mut(server_id) {
            Some(server) => {
                server.status = status;
                true
            }
            None => false,
        }
    }

    pub fn set_player_count(&mut self, server_id: &str, count: usize) -> bool {
        match self.server_mut(server_id) {
            Some(server) => {
                server.player_count = count;
                true
            }
            None => false,
        }
    }

    pub fn push_connected(&self) -> bool {
        self.push_connected
    }

    pub fn set_push_connected(&mut self, connected: bool) {
        self.push_connected = connected;
    }
}
