//! Property tests for session store invariants.

use proptest::prelude::*;

use docent::{DuplicatePolicy, Faculty, Schedule, ScheduleEntry, SessionStore};

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Dr. A".to_string()),
        Just("Dr. B".to_string()),
        Just("Dr. C".to_string()),
        Just("Dr. D".to_string()),
    ]
}

fn entry() -> impl Strategy<Value = ScheduleEntry> {
    ("[A-Z]{2}[0-9]{3}", name()).prop_map(|(course, faculty)| {
        ScheduleEntry::new(faculty, "Hall A", "9-10", course)
    })
}

fn lenient_store(names: &[String]) -> SessionStore {
    let mut store = SessionStore::new().with_duplicate_policy(DuplicatePolicy::Allow);
    for (i, n) in names.iter().enumerate() {
        store.add_faculty(Faculty::new(n.clone(), "CS", i as u32 + 1)).unwrap();
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: delete removes every match and shrinks by exactly that count.
    #[test]
    fn property_delete_removes_all_matches(
        names in proptest::collection::vec(name(), 0..=10),
        target in name(),
    ) {
        let mut store = lenient_store(&names);
        let matches = names.iter().filter(|n| **n == target).count();

        let removed = store.delete_faculty(&target);

        prop_assert_eq!(removed, matches);
        prop_assert_eq!(store.faculty().len(), names.len() - matches);
        prop_assert!(store.find_faculty(&target).is_none());
    }

    /// PROPERTY: an update under the same name is visible to the next lookup.
    #[test]
    fn property_update_in_place_is_visible(
        names in proptest::collection::vec(name(), 1..=6),
        max in 1u32..10,
    ) {
        let mut store = SessionStore::new();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        for n in &unique {
            store.add_faculty(Faculty::new(n.clone(), "CS", 1)).unwrap();
        }

        let target = unique[0].clone();
        let updated = Faculty::new(target.clone(), "Math", max);
        prop_assert!(store.update_faculty(&target, updated.clone()).unwrap());

        prop_assert_eq!(store.find_faculty(&target), Some(&updated));
        prop_assert_eq!(store.faculty().len(), unique.len());
    }

    /// PROPERTY: renaming moves the entry; the old name stops resolving.
    #[test]
    fn property_rename_replaces_old_name(max in 1u32..10) {
        let mut store = SessionStore::new();
        store.add_faculty(Faculty::new("Dr. A", "CS", 1)).unwrap();

        let renamed = Faculty::new("Dr. Z", "CS", max);
        prop_assert!(store.update_faculty("Dr. A", renamed.clone()).unwrap());

        prop_assert!(store.find_faculty("Dr. A").is_none());
        prop_assert_eq!(store.find_faculty("Dr. Z"), Some(&renamed));
        prop_assert_eq!(store.faculty().len(), 1);
    }

    /// PROPERTY: updating one schedule entry leaves every other entry alone.
    #[test]
    fn property_schedule_entry_update_is_local(
        entries in proptest::collection::vec(entry(), 0..=8),
        index in 0usize..10,
        replacement in entry(),
    ) {
        let mut store = SessionStore::new();
        store.set_schedule(Some(Schedule::new(entries.clone(), "summary")));

        let applied = store.update_schedule_entry(index, replacement.clone());
        prop_assert_eq!(applied, index < entries.len());

        let stored = store.schedule().unwrap();
        prop_assert_eq!(stored.len(), entries.len());
        for (i, original) in entries.iter().enumerate() {
            if applied && i == index {
                prop_assert_eq!(&stored.entries[i], &replacement);
            } else {
                prop_assert_eq!(&stored.entries[i], original);
            }
        }
    }

    /// PROPERTY: with no schedule loaded, entry updates are no-ops.
    #[test]
    fn property_entry_update_without_schedule_is_noop(index in 0usize..10, replacement in entry()) {
        let mut store = SessionStore::new();
        prop_assert!(!store.update_schedule_entry(index, replacement));
        prop_assert!(store.schedule().is_none());
    }
}
