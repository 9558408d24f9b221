//! Fake generation service and a store wired to a recording sink.

use std::cell::RefCell;
use std::sync::Arc;

use docent::domain::ports::RecordingNotificationSink;
use docent::{GenerationError, GenerationRequest, Schedule, ScheduleGenerator, SessionStore};

/// Replays one canned outcome and remembers every request it saw
pub struct FakeGenerator {
    outcome: Box<dyn Fn() -> Result<Schedule, GenerationError>>,
    pub seen: RefCell<Vec<GenerationRequest>>,
}

impl FakeGenerator {
    pub fn returning(schedule: Schedule) -> Self {
        Self {
            outcome: Box::new(move || Ok(schedule.clone())),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            outcome: Box::new(|| {
                Err(GenerationError::Transport {
                    message: "connection refused".to_string(),
                })
            }),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl ScheduleGenerator for FakeGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Schedule, GenerationError> {
        self.seen.borrow_mut().push(request.clone());
        (self.outcome)()
    }
}

pub fn recorded_store() -> (SessionStore, Arc<RecordingNotificationSink>) {
    let sink = Arc::new(RecordingNotificationSink::new());
    let store = SessionStore::new().with_sink(Arc::clone(&sink));
    (store, sink)
}
