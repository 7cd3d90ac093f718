//! TUI-specific data models

/// Which pane is currently focused in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    ServerList,
    Console,
}

impl FocusedPane {
    pub fn toggle(self) -> Self {
        match self {
            FocusedPane::ServerList => FocusedPane::Console,
            FocusedPane::Console => FocusedPane::ServerList,
        }
    }
}
