//! JSON Notification Sink
//!
//! Outputs notifications as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{Notification, NotificationSink};

/// Notification sink that outputs NDJSON events to stdout
pub struct JsonNotificationSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonNotificationSink {
    /// Create a new JSON notification sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON notification sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl NotificationSink for JsonNotificationSink {
    fn notify(&self, notification: Notification) {
        let event = serde_json::json!({
            "event": "notification",
            "command": self.command,
            "kind": notification.kind.as_str(),
            "title": notification.title,
            "description": notification.description,
        });
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}
