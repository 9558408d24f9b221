//! ScheduleGenerator port - the external generation service
//!
//! The whole timetabling problem is delegated across this boundary: the
//! request carries the current rosters plus free-text constraints, the
//! response is a `Schedule`.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Faculty, Hall, Schedule};

/// Payload for one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub faculty_preferences: Vec<Faculty>,
    pub hall_availabilities: Vec<Hall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
}

impl GenerationRequest {
    /// Build a request; blank constraint text is treated as absent.
    pub fn new(faculty: &[Faculty], halls: &[Hall], constraints: &str) -> Self {
        let constraints = constraints.trim();
        Self {
            faculty_preferences: faculty.to_vec(),
            hall_availabilities: halls.to_vec(),
            constraints: (!constraints.is_empty()).then(|| constraints.to_string()),
        }
    }
}

/// Generation service errors
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("could not reach generation service: {message}")]
    Transport { message: String },

    #[error("generation service returned HTTP {status}: {body}")]
    Service { status: u16, body: String },

    #[error("malformed generation response: {message}")]
    MalformedResponse { message: String },

    #[error("API key not set (expected environment variable {var})")]
    MissingApiKey { var: String },
}

/// Abstract generation service
pub trait ScheduleGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Schedule, GenerationError>;
}

impl<T: ScheduleGenerator + ?Sized> ScheduleGenerator for &T {
    fn generate(&self, request: &GenerationRequest) -> Result<Schedule, GenerationError> {
        (**self).generate(request)
    }
}

impl<T: ScheduleGenerator + ?Sized> ScheduleGenerator for Box<T> {
    fn generate(&self, request: &GenerationRequest) -> Result<Schedule, GenerationError> {
        (**self).generate(request)
    }
}
