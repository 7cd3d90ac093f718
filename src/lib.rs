//! racedeck - terminal dashboard for dedicated racing game servers
//!
//! racedeck lists the configured servers, shows the selected server's live
//! console and player roster, and sends start/stop commands to the
//! dashboard backend. State arrives through snapshot reads over HTTP and a
//! push-update WebSocket channel; the [`sync`] module keeps the two
//! consistent.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod remote;
pub mod sync;
pub mod utils;

// Re-export commonly used types
pub use errors::*;
pub use models::*;
pub use sync::SyncController;

/// racedeck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// racedeck application name
pub const APP_NAME: &str = "racedeck";
