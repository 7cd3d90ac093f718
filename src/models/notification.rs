//! Transient notification models

use chrono::{DateTime, Local};
use ratatui::style::Color;
use std::time::Duration;

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Local>,
}
