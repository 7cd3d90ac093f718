//! Data models and types used throughout racedeck

pub mod events;
pub mod notification;
pub mod responses;
pub mod server;
pub mod tui;

// Re-export commonly used types
pub use events::*;
pub use notification::*;
pub use responses::*;
pub use server::*;

// Only export TUI-specific types that don't conflict
pub use tui::FocusedPane;
