//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod notification;
pub mod schedule_generator;

pub use notification::{
    Notification, NotificationKind, NotificationSink, NoopNotificationSink,
    RecordingNotificationSink,
};
pub use schedule_generator::{GenerationError, GenerationRequest, ScheduleGenerator};
