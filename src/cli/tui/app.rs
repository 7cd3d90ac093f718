//! TUI application state: the sync controller plus cursor and pane focus

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::models::{FocusedPane, ServerAction};
use crate::sync::SyncController;

const PAGE_LINES: usize = 10;

pub struct TuiApp {
    pub controller: SyncController,
    /// Highlighted row in the server list (not necessarily the selection)
    pub cursor: usize,
    pub list_state: ListState,
    pub focused_pane: FocusedPane,
    pub show_help: bool,
}

impl TuiApp {
    pub fn new(controller: SyncController) -> Self {
        let mut list_state = ListState::default();
        if !controller.state().servers().is_empty() {
            list_state.select(Some(0));
        }
        Self {
            controller,
            cursor: 0,
            list_state,
            focused_pane: FocusedPane::ServerList,
            show_help: false,
        }
    }

    fn server_count(&self) -> usize {
        self.controller.state().servers().len()
    }

    pub fn next_server(&mut self) {
        let count = self.server_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
            self.list_state.select(Some(self.cursor));
        }
    }

    pub fn previous_server(&mut self) {
        let count = self.server_count();
        if count > 0 {
            self.cursor = if self.cursor == 0 {
                count - 1
            } else {
                self.cursor - 1
            };
            self.list_state.select(Some(self.cursor));
        }
    }

    pub fn select_under_cursor(&mut self) {
        let id = self
            .controller
            .state()
            .servers()
            .get(self.cursor)
            .map(|s| s.id.clone());
        if let Some(id) = id {
            self.controller.select_server(&id);
        }
    }

    /// Commands always target the selected server, never the cursor
    pub fn command_selected(&mut self, action: ServerAction) {
        let selected = self.controller.state().selected_id().map(str::to_string);
        if let Some(id) = selected {
            self.controller.send_command(&id, action);
        }
    }

    pub fn toggle_focused_pane(&mut self) {
        self.focused_pane = self.focused_pane.toggle();
    }

    /// Apply a key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.show_help {
            match key.code {
                KeyCode::Char('q') => return true,
                _ => self.show_help = false,
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('h') | KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.toggle_focused_pane(),
            KeyCode::Up | KeyCode::Char('k') => match self.focused_pane {
                FocusedPane::ServerList => self.previous_server(),
                FocusedPane::Console => self.controller.state_mut().scroll_console_up(1),
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focused_pane {
                FocusedPane::ServerList => self.next_server(),
                FocusedPane::Console => self.controller.state_mut().scroll_console_down(1),
            },
            KeyCode::PageUp => self.controller.state_mut().scroll_console_up(PAGE_LINES),
            KeyCode::PageDown => self.controller.state_mut().scroll_console_down(PAGE_LINES),
            KeyCode::End => self.controller.state_mut().scroll_console_to_bottom(),
            KeyCode::Enter => self.select_under_cursor(),
            KeyCode::Char('s') => self.command_selected(ServerAction::Start),
            KeyCode::Char('x') => self.command_selected(ServerAction::Stop),
            _ => {}
        }
        false
    }
}
