//! Notification queue for the editor session.
//!
//! An explicit value owned by the session, not an ambient singleton.
//! Notifications auto-expire after a fixed interval unless dismissed first.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Visual treatment of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// Seconds before an undismissed notification expires.
pub const AUTO_DISMISS_SECS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub variant: Variant,
    pub created_at: DateTime<Utc>,
}

/// FIFO queue of live notifications.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification and return its id.
    pub fn enqueue(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: Variant,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.items.push(Notification {
            id: id.clone(),
            title: title.into(),
            description: description.into(),
            variant,
            created_at: Utc::now(),
        });
        id
    }

    /// Remove a notification by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }

    /// Drop every notification older than the auto-dismiss interval.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        let cutoff = now - Duration::seconds(AUTO_DISMISS_SECS);
        self.items.retain(|n| n.created_at > cutoff);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
