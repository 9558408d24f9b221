//! Scenario: a department head enters one instructor and one hall, then asks
//! for a timetable.

use docent::{Faculty, Hall, RequestStatus, Schedule, ScheduleEntry, ScheduleRequester};

use super::support::{recorded_store, FakeGenerator};

fn dr_x() -> Faculty {
    Faculty::new("Dr. X", "CS", 1)
        .with_preferred_halls(["Hall A"])
        .with_preferred_time_slots(["9-10"])
}

fn hall_a() -> Hall {
    Hall::new("Hall A", 50).with_available_times(["9-10"])
}

#[test]
fn scenario_single_instructor_gets_single_entry() {
    let (mut store, sink) = recorded_store();
    store.add_faculty(dr_x()).unwrap();
    store.add_hall(hall_a()).unwrap();

    let returned = Schedule::new(
        vec![ScheduleEntry::new("Dr. X", "Hall A", "9-10", "CS101")],
        "Dr. X teaches CS101 in Hall A.",
    );
    let generator = FakeGenerator::returning(returned.clone());
    let mut requester = ScheduleRequester::new(&generator);

    let mut statuses = Vec::new();
    let report = requester
        .generate_with(&mut store, "", |status| statuses.push(status))
        .unwrap();

    // Request carried the full rosters and no constraints
    let seen = generator.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].faculty_preferences, vec![dr_x()]);
    assert_eq!(seen[0].hall_availabilities, vec![hall_a()]);
    assert_eq!(seen[0].constraints, None);

    // Stored verbatim
    let stored = store.schedule().unwrap();
    assert_eq!(stored, &returned);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.entries[0].faculty_name, "Dr. X");
    assert_eq!(stored.entries[0].hall_name, "Hall A");
    assert!(store.schedule_stored_at().is_some());

    assert_eq!(statuses, [RequestStatus::Requesting, RequestStatus::Succeeded]);
    assert_eq!(requester.status(), RequestStatus::Succeeded);
    assert_eq!(report.entry_count, 1);
    assert!(report.integrity.unwrap().is_clean());
    assert_eq!(
        sink.titles(),
        ["Faculty Added", "Hall Added", "Schedule Generated!"]
    );
}

#[test]
fn scenario_new_schedule_replaces_the_old_one() {
    let (mut store, _sink) = recorded_store();
    store.add_faculty(dr_x()).unwrap();
    store.add_hall(hall_a()).unwrap();
    store.set_schedule(Some(Schedule::new(
        vec![
            ScheduleEntry::new("Dr. X", "Hall A", "9-10", "OLD1"),
            ScheduleEntry::new("Dr. X", "Hall A", "9-10", "OLD2"),
        ],
        "old",
    )));

    let generator = FakeGenerator::returning(Schedule::new(
        vec![ScheduleEntry::new("Dr. X", "Hall A", "9-10", "NEW")],
        "new",
    ));
    ScheduleRequester::new(&generator)
        .generate(&mut store, "Mornings only")
        .unwrap();

    let stored = store.schedule().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.entries[0].course_name, "NEW");
    assert_eq!(
        generator.seen.borrow()[0].constraints.as_deref(),
        Some("Mornings only")
    );
}

#[test]
fn scenario_questionable_schedule_is_kept_with_warnings() {
    let (mut store, _sink) = recorded_store();
    store.add_faculty(dr_x()).unwrap();
    store.add_hall(hall_a()).unwrap();

    let generator = FakeGenerator::returning(Schedule::new(
        vec![
            ScheduleEntry::new("Dr. X", "Hall A", "9-10", "CS101"),
            ScheduleEntry::new("Dr. X", "Hall Q", "11-12", "CS102"),
        ],
        "",
    ));
    let report = ScheduleRequester::new(&generator)
        .generate(&mut store, "")
        .unwrap();

    assert_eq!(store.schedule().unwrap().len(), 2);
    let integrity = report.integrity.unwrap();
    let messages: Vec<String> = integrity.issues.iter().map(|i| i.to_string()).collect();
    assert!(messages.contains(&"entry 2: unknown hall 'Hall Q'".to_string()));
    assert!(messages.contains(&"Dr. X is assigned 2 classes (max 1)".to_string()));
}

#[test]
fn scenario_integrity_check_disabled() {
    let (mut store, _sink) = recorded_store();
    let generator = FakeGenerator::returning(Schedule::new(
        vec![ScheduleEntry::new("Nobody", "Nowhere", "never", "X")],
        "",
    ));

    let report = ScheduleRequester::new(&generator)
        .with_integrity_check(false)
        .generate(&mut store, "")
        .unwrap();

    assert!(report.integrity.is_none());
    assert_eq!(store.schedule().unwrap().entries[0].faculty_name, "Nobody");
}
