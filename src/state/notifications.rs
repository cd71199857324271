//! Transient notification queue.
//!
//! Notifications are best-effort, fire-and-forget status toasts. They are
//! displayed in push order and removed either by explicit dismissal or by
//! the sweep that runs on every UI tick once their display duration has
//! elapsed. The queue never reports errors upward.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notification stays visible without manual dismissal.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Specifying notification severities.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Return the display label for the toast header.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "OK",
            Severity::Warning => "WARN",
            Severity::Danger => "ERROR",
        }
    }
}

/// Opaque token identifying a pushed notification.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NotificationHandle(u64);

/// A transient, auto-expiring status message.
///
pub struct Notification {
    handle: NotificationHandle,
    message: String,
    severity: Severity,
    created_at: Instant,
}

impl Notification {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn handle(&self) -> NotificationHandle {
        self.handle
    }
}

/// Renders transient, auto-dismissing status messages.
///
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    next_handle: u64,
}

impl NotificationQueue {
    /// Return a new empty queue.
    ///
    pub fn new() -> NotificationQueue {
        NotificationQueue {
            entries: VecDeque::new(),
            next_handle: 0,
        }
    }

    /// Append a notification and return a handle usable for manual
    /// dismissal. Repeated messages are never merged; each push is
    /// independent.
    ///
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationHandle {
        let handle = NotificationHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push_back(Notification {
            handle,
            message: message.into(),
            severity,
            created_at: Instant::now(),
        });
        handle
    }

    /// Remove the notification immediately if still present. Idempotent:
    /// dismissing an expired or already-dismissed handle is a no-op.
    ///
    pub fn dismiss(&mut self, handle: NotificationHandle) {
        self.entries.retain(|entry| entry.handle != handle);
    }

    /// Remove every notification whose display duration has elapsed as of
    /// `now`. Called on each UI tick.
    ///
    pub fn sweep(&mut self, now: Instant) {
        self.entries
            .retain(|entry| now.duration_since(entry.created_at) < DISPLAY_DURATION);
    }

    /// Iterate the visible notifications in push order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut queue = NotificationQueue::new();
        queue.push("A", Severity::Info);
        queue.push("B", Severity::Success);
        queue.push("C", Severity::Danger);

        let messages: Vec<&str> = queue.iter().map(|n| n.message()).collect();
        assert_eq!(messages, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_push_then_dismiss_leaves_queue_empty() {
        let mut queue = NotificationQueue::new();
        let handle = queue.push("x", Severity::Info);
        queue.dismiss(handle);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = NotificationQueue::new();
        let handle = queue.push("x", Severity::Info);
        queue.push("y", Severity::Info);
        queue.dismiss(handle);
        queue.dismiss(handle);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_dismiss_after_sweep_is_noop() {
        let mut queue = NotificationQueue::new();
        let handle = queue.push("x", Severity::Info);
        queue.sweep(Instant::now() + DISPLAY_DURATION + Duration::from_secs(1));
        assert!(queue.is_empty());
        queue.dismiss(handle);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_sweep_removes_all_expired() {
        let mut queue = NotificationQueue::new();
        queue.push("A", Severity::Info);
        queue.push("B", Severity::Info);
        queue.push("C", Severity::Info);

        // Before the display duration everything is still visible
        queue.sweep(Instant::now());
        assert_eq!(queue.len(), 3);

        queue.sweep(Instant::now() + DISPLAY_DURATION + Duration::from_secs(1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_duplicate_messages_are_independent() {
        let mut queue = NotificationQueue::new();
        let first = queue.push("same", Severity::Info);
        let second = queue.push("same", Severity::Info);
        assert_ne!(first, second);

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().unwrap().handle(), second);
    }
}
