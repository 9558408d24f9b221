//! Scenario: editing rosters and schedule entries through forms and the store.

use docent::{DuplicatePolicy, Faculty, FacultyForm, Form, Hall, HallForm, Schedule, ScheduleEntry};

use super::support::recorded_store;

#[test]
fn scenario_rejected_hall_form_never_reaches_store() {
    let (mut store, sink) = recorded_store();
    let form = HallForm {
        name: "Hall A".to_string(),
        capacity: "0".to_string(),
        available_times: "9-10".to_string(),
        equipment: "Projector".to_string(),
    };

    let mut submitted = false;
    let mut closed = false;
    let errors = form
        .submit(
            |hall| {
                submitted = true;
                store.add_hall(hall).unwrap();
            },
            || closed = true,
        )
        .unwrap_err();

    assert_eq!(errors.get(HallForm::CAPACITY), Some("Capacity must be at least 1."));
    assert_eq!(errors.len(), 1);
    assert!(!submitted);
    assert!(!closed);
    assert!(store.halls().is_empty());
    assert!(sink.notifications().is_empty());
}

#[test]
fn scenario_faculty_form_adds_then_renames_member() {
    let (mut store, sink) = recorded_store();
    let form = FacultyForm {
        name: " Dr. X ".to_string(),
        department: "CS".to_string(),
        preferred_halls: "Hall A, Hall B,".to_string(),
        preferred_time_slots: "9-10".to_string(),
        max_classes: "2".to_string(),
    };
    form.submit(|member| store.add_faculty(member).unwrap(), || {})
        .unwrap();

    let added = store.find_faculty("Dr. X").unwrap().clone();
    assert_eq!(added.preferred_halls, ["Hall A", "Hall B"]);

    let mut edit = FacultyForm::from_entity(&added);
    assert_eq!(edit.preferred_halls, "Hall A, Hall B");
    edit.name = "Dr. Xavier".to_string();
    let renamed = edit.validate().unwrap();
    assert!(store.update_faculty("Dr. X", renamed.clone()).unwrap());

    assert!(store.find_faculty("Dr. X").is_none());
    assert_eq!(store.find_faculty("Dr. Xavier"), Some(&renamed));
    assert_eq!(sink.titles(), ["Faculty Added", "Faculty Updated"]);
}

#[test]
fn scenario_duplicate_policy() {
    let (mut store, _sink) = recorded_store();
    store.add_hall(Hall::new("Hall A", 50)).unwrap();
    assert!(store.add_hall(Hall::new("Hall A", 10)).is_err());
    assert_eq!(store.halls().len(), 1);

    let mut lenient = docent::SessionStore::new().with_duplicate_policy(DuplicatePolicy::Allow);
    lenient.add_hall(Hall::new("Hall A", 50)).unwrap();
    lenient.add_hall(Hall::new("Hall A", 10)).unwrap();
    assert_eq!(lenient.halls().len(), 2);
    assert_eq!(lenient.find_hall("Hall A").unwrap().capacity, 50);
    assert_eq!(lenient.delete_hall("Hall A"), 2);
}

#[test]
fn scenario_edit_third_schedule_entry() {
    let (mut store, sink) = recorded_store();
    store.add_faculty(Faculty::new("Dr. X", "CS", 3)).unwrap();
    let entries: Vec<ScheduleEntry> = (1..=4)
        .map(|n| ScheduleEntry::new("Dr. X", "Hall A", "9-10", format!("CS10{}", n)))
        .collect();
    store.set_schedule(Some(Schedule::new(entries.clone(), "four classes")));

    let replacement = ScheduleEntry::new("Dr. X", "Hall B", "1-2", "CS999");
    assert!(store.update_schedule_entry(2, replacement.clone()));

    let stored = store.schedule().unwrap();
    assert_eq!(stored.entries[2], replacement);
    for i in [0, 1, 3] {
        assert_eq!(stored.entries[i], entries[i]);
    }
    assert_eq!(stored.summary, "four classes");
    assert_eq!(sink.titles().last().map(String::as_str), Some("Schedule Updated"));

    store.set_schedule(None);
    assert!(!store.update_schedule_entry(0, replacement));
    assert!(store.schedule().is_none());
}
