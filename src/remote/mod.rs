//! Remote operations against the dashboard backend
//!
//! This module provides the HTTP API client and the push-update channel
//! transport used by the sync controller and the CLI commands.

pub mod api;
pub mod push;

pub use api::{HttpServerApi, ServerApi};
pub use push::{PushChannel, PushFrame, decode_frame};
