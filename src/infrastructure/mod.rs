//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `generator/` - HTTP schedule generator (chat-completions endpoint)
//! - `notifications/` - Console and NDJSON notification sinks

pub mod generator;
pub mod notifications;

// Re-export for convenience
pub use generator::HttpScheduleGenerator;
pub use notifications::{ConsoleNotificationSink, JsonNotificationSink};
