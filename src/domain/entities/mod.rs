//! Domain Entities
//!
//! Roster entries and the generated schedule.
//! - `Faculty` - An instructor and their preferences/limits
//! - `Hall` - A lecture hall and its capabilities/availability
//! - `Schedule` - Proposed assignments plus a narrative summary

mod faculty;
mod hall;
mod schedule;

pub use faculty::Faculty;
pub use hall::Hall;
pub use schedule::{Schedule, ScheduleEntry};
