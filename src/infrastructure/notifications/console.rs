//! Console Notification Sink
//!
//! Prints each notification as one line, e.g. `✓ Faculty Added: Dr. X has been added.`

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::domain::ports::{Notification, NotificationKind, NotificationSink};

/// Notification sink that writes human-readable lines (stderr by default)
pub struct ConsoleNotificationSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
}

impl ConsoleNotificationSink {
    pub fn stderr(color: bool, unicode: bool) -> Self {
        Self::with_writer(io::stderr(), color, unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool, unicode: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
        }
    }

    fn render(&self, notification: &Notification) -> String {
        let (icon, color) = match (notification.kind, self.unicode) {
            (NotificationKind::Success, true) => ("✓", Color::Green),
            (NotificationKind::Success, false) => ("[OK]", Color::Green),
            (NotificationKind::Failure, true) => ("✗", Color::Red),
            (NotificationKind::Failure, false) => ("[FAIL]", Color::Red),
        };
        if self.color {
            format!(
                "{} {}: {}",
                icon.with(color),
                notification.title.as_str().bold(),
                notification.description
            )
        } else {
            format!("{} {}: {}", icon, notification.title, notification.description)
        }
    }
}

impl NotificationSink for ConsoleNotificationSink {
    fn notify(&self, notification: Notification) {
        let line = self.render(&notification);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
