//! Scenario: the generation service cannot be reached.

use docent::application::GENERIC_FAILURE;
use docent::{Faculty, GenerationError, RequestStatus, Schedule, ScheduleEntry, ScheduleRequester};

use super::support::{recorded_store, FakeGenerator};

#[test]
fn scenario_failure_leaves_store_untouched() {
    let (mut store, sink) = recorded_store();
    store.add_faculty(Faculty::new("Dr. X", "CS", 1)).unwrap();
    let previous = Schedule::new(
        vec![ScheduleEntry::new("Dr. X", "Hall A", "9-10", "CS101")],
        "kept",
    );
    store.set_schedule(Some(previous.clone()));
    let stored_at = store.schedule_stored_at();

    let generator = FakeGenerator::unreachable();
    let mut requester = ScheduleRequester::new(&generator);
    let mut statuses = Vec::new();
    let err = requester
        .generate_with(&mut store, "", |status| statuses.push(status))
        .unwrap_err();

    assert!(matches!(err, GenerationError::Transport { .. }));
    assert_eq!(store.schedule(), Some(&previous));
    assert_eq!(store.schedule_stored_at(), stored_at);
    assert_eq!(store.faculty().len(), 1);
    assert_eq!(statuses, [RequestStatus::Requesting, RequestStatus::Failed]);
    assert_eq!(requester.status(), RequestStatus::Failed);

    let notifications = sink.notifications();
    let last = notifications.last().unwrap();
    assert!(last.is_failure());
    assert_eq!(last.title, "Error");
    assert_eq!(last.description, GENERIC_FAILURE);
}

#[test]
fn scenario_failure_without_prior_schedule() {
    let (mut store, sink) = recorded_store();

    let generator = FakeGenerator::unreachable();
    assert!(ScheduleRequester::new(&generator)
        .generate(&mut store, "")
        .is_err());

    assert!(store.schedule().is_none());
    assert_eq!(sink.titles(), ["Error"]);
}

#[test]
fn scenario_retry_after_failure_starts_over() {
    let (mut store, _sink) = recorded_store();

    let failing = FakeGenerator::unreachable();
    let mut first = ScheduleRequester::new(&failing);
    assert!(first.generate(&mut store, "").is_err());
    assert_eq!(first.status(), RequestStatus::Failed);

    let working = FakeGenerator::returning(Schedule::new(Vec::new(), "empty week"));
    let mut second = ScheduleRequester::new(&working);
    assert_eq!(second.status(), RequestStatus::Idle);
    second.generate(&mut store, "").unwrap();

    assert_eq!(store.schedule().unwrap().summary, "empty week");
}
