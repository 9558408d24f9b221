//! Notification sinks
//!
//! - `ConsoleNotificationSink` - colored one-line messages on stderr
//! - `JsonNotificationSink` - NDJSON `notification` events for automation

mod console;
mod json;

pub use console::ConsoleNotificationSink;
pub use json::JsonNotificationSink;
