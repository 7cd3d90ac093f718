//! Active notification bookkeeping

use chrono::Local;

use crate::models::{Notification, NotificationId, NotificationKind};

#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: NotificationId,
    active: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NotificationKind, message: String) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.active.push(Notification {
            id,
            message,
            kind,
            created_at: Local::now(),
        });
        id
    }

    /// Remove a notification; false when it was already gone
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() != before
    }

    /// Oldest first
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut center = NotificationCenter::new();
        let first = center.push(NotificationKind::Success, "ok".to_string());
        let second = center.push(NotificationKind::Error, "bad".to_string());
        assert_ne!(first, second);

        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.active()[0].message, "bad");

        assert!(center.dismiss(second));
        assert!(center.is_empty());
    }
}
