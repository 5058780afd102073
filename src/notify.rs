//! Toast notifications raised by page controllers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Toasts kept at once; older ones are dropped first.
pub const MAX_ACTIVE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Shared, dismissable notification queue. Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    queue: Arc<Mutex<Vec<Notification>>>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message.into())
    }

    fn push(&self, kind: NotificationKind, message: String) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(Notification { id, kind, message });
            if queue.len() > MAX_ACTIVE {
                let overflow = queue.len() - MAX_ACTIVE;
                queue.drain(..overflow);
            }
        }
        id
    }

    pub fn dismiss(&self, id: u64) -> bool {
        match self.queue.lock() {
            Ok(mut queue) => {
                let before = queue.len();
                queue.retain(|n| n.id != id);
                queue.len() != before
            }
            Err(_) => false,
        }
    }

    pub fn active(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .map(|queue| queue.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.queue.lock().ok().and_then(|queue| queue.last().cloned())
    }

    pub fn clear(&self) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.clear();
        }
    }
}
