//! Docent - faculty and lecture-hall rosters with generated class timetables
//!
//! Docent keeps faculty members and lecture halls in an in-memory session,
//! sends both rosters plus free-text constraints to a generative model, and
//! stores the timetable it returns.
//!
//! ## Layers
//!
//! - `domain` - entities, the session store, prompt rendering, ports
//! - `application` - forms, roster loading, the schedule request use case
//! - `infrastructure` - HTTP generator and notification sinks
//! - `presentation` - CLI definition

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    FacultyForm, Form, FormErrors, GenerateReport, HallForm, RequestStatus, Roster,
    ScheduleRequester,
};
pub use config::Config;
pub use domain::entities::{Faculty, Hall, Schedule, ScheduleEntry};
pub use domain::ports::{
    GenerationError, GenerationRequest, Notification, NotificationSink, ScheduleGenerator,
};
pub use domain::services::SessionStore;
pub use domain::value_objects::{CommaList, DuplicatePolicy};
pub use error::{DocentError, DocentResult};
pub use infrastructure::HttpScheduleGenerator;
