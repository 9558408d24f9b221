//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScheduleRequester` - Sends the rosters to the generation service and stores the result
//! - `Roster` - Loads the starting roster for a session
//! - `forms` - Faculty and hall forms (raw text in, typed entities out)

pub mod forms;
pub mod generate;
pub mod roster;

pub use forms::{FacultyForm, FieldError, Form, FormErrors, FormField, HallForm};
pub use generate::{GenerateReport, RequestStatus, ScheduleRequester, GENERIC_FAILURE};
pub use roster::{Roster, RosterFormat};
