use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use uuid::Uuid;

/// How long a notification stays up when the caller does not say otherwise.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub display_duration: Duration,
}

/// Ordered queue of ephemeral user-facing messages.
///
/// Each pushed item self-removes once its display duration elapses; explicit
/// dismissal removes it earlier. Identical messages queue as separate items
/// (repeated failures should be seen repeating). Expiry timers run as tokio
/// tasks, so the queue needs a running runtime.
#[derive(Clone, Default)]
pub struct NotificationQueue {
    items: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message with the default display duration.
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> Uuid {
        self.push_timed(message, severity, DEFAULT_DISPLAY_DURATION)
    }

    /// Queue a message and start its expiry timer. Returns the generated id.
    pub fn push_timed(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            display_duration: duration,
        };
        let id = notification.id;
        self.items.lock().unwrap().push(notification);

        let items = Arc::clone(&self.items);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            items.lock().unwrap().retain(|n| n.id != id);
        });

        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(message, Severity::Error)
    }

    pub fn warning(&self, message: impl Into<String>) -> Uuid {
        self.push(message, Severity::Warning)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(message, Severity::Info)
    }

    /// Remove an item now, regardless of its timer. Unknown ids are ignored.
    pub fn dismiss(&self, id: Uuid) {
        self.items.lock().unwrap().retain(|n| n.id != id);
    }

    /// Snapshot of the queue in insertion order.
    pub fn items(&self) -> Vec<Notification> {
        self.items.lock().unwrap().clone()
    }
}
