//! Schedule generation use case
//!
//! Builds one request from the whole session roster, waits for the single
//! response, and either replaces the stored schedule or leaves it alone.
//! No retries and no partial results.

use crate::domain::ports::{GenerationError, GenerationRequest, Notification, ScheduleGenerator};
use crate::domain::services::{check_schedule, IntegrityReport, SessionStore};

/// Text shown to the user on any generation failure
pub const GENERIC_FAILURE: &str = "Failed to generate schedule. Please try again.";

/// Lifecycle of a generation request
///
/// `Idle -> Requesting -> Succeeded | Failed`; the next request starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Idle => "idle",
            RequestStatus::Requesting => "requesting",
            RequestStatus::Succeeded => "succeeded",
            RequestStatus::Failed => "failed",
        }
    }
}

/// What a successful request produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub entry_count: usize,
    /// Present when integrity checking is enabled
    pub integrity: Option<IntegrityReport>,
}

/// Orchestrates one generation request at a time
///
/// `generate` takes `&mut self`, so a second request cannot start while one
/// is outstanding.
pub struct ScheduleRequester<G: ScheduleGenerator> {
    generator: G,
    status: RequestStatus,
    check_integrity: bool,
}

impl<G: ScheduleGenerator> ScheduleRequester<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            status: RequestStatus::Idle,
            check_integrity: true,
        }
    }

    pub fn with_integrity_check(mut self, enabled: bool) -> Self {
        self.check_integrity = enabled;
        self
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Request a schedule for the store's current rosters.
    pub fn generate(
        &mut self,
        store: &mut SessionStore,
        constraints: &str,
    ) -> Result<GenerateReport, GenerationError> {
        self.generate_with(store, constraints, |_| {})
    }

    /// Like `generate`, reporting each status transition to `on_status`.
    ///
    /// On success the stored schedule is replaced wholesale; on failure the
    /// store is untouched and a generic failure notification is emitted.
    pub fn generate_with<F>(
        &mut self,
        store: &mut SessionStore,
        constraints: &str,
        mut on_status: F,
    ) -> Result<GenerateReport, GenerationError>
    where
        F: FnMut(RequestStatus),
    {
        let request = GenerationRequest::new(store.faculty(), store.halls(), constraints);

        self.transition(RequestStatus::Requesting, &mut on_status);
        match self.generator.generate(&request) {
            Ok(schedule) => {
                let integrity = self.check_integrity.then(|| {
                    check_schedule(
                        &schedule,
                        &request.faculty_preferences,
                        &request.hall_availabilities,
                    )
                });
                let entry_count = schedule.len();
                store.set_schedule(Some(schedule));
                store.notify(Notification::success(
                    "Schedule Generated!",
                    "The AI has successfully created a new schedule.",
                ));
                self.transition(RequestStatus::Succeeded, &mut on_status);
                Ok(GenerateReport {
                    entry_count,
                    integrity,
                })
            }
            Err(err) => {
                store.notify(Notification::failure("Error", GENERIC_FAILURE));
                self.transition(RequestStatus::Failed, &mut on_status);
                Err(err)
            }
        }
    }

    fn transition<F: FnMut(RequestStatus)>(&mut self, status: RequestStatus, on_status: &mut F) {
        self.status = status;
        on_status(status);
    }
}
