//! Notification Port
//!
//! User-visible notices emitted when the session changes: roster entries
//! added/updated/removed, schedules generated, generation failures.

use std::sync::{Arc, Mutex};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Failure => "failure",
        }
    }
}

/// A short title plus a one-line description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NotificationKind::Failure
    }
}

/// Trait for receiving notifications
///
/// Implementations can be:
/// - ConsoleNotificationSink: colored lines on stderr
/// - JsonNotificationSink: NDJSON events for scripts
/// - NoopNotificationSink: silent operation
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// No-op sink for silent operation
pub struct NoopNotificationSink;

impl NotificationSink for NoopNotificationSink {
    fn notify(&self, _notification: Notification) {}
}

/// Sink that keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotificationSink {
    recorded: Mutex<Vec<Notification>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far
    pub fn notifications(&self) -> Vec<Notification> {
        match self.recorded.lock() {
            Ok(recorded) => recorded.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.title).collect()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(notification);
        }
    }
}
