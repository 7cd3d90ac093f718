//! Client-side state synchronisation
//!
//! The [`SyncController`] owns the dashboard state and is the only place it
//! is mutated. Snapshot reads, status sweeps and control commands run as
//! background tasks and report back through [`AppEvent`](crate::models::AppEvent)s,
//! which the event loop feeds into [`SyncController::handle_event`] one at a
//! time.

pub mod controller;
pub mod notifications;
pub mod state;

pub use controller::SyncController;
pub use notifications::NotificationCenter;
pub use state::{DashboardState, DetailPanel};
