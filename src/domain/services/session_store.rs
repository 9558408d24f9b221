//! Session Store
//!
//! The single owner of the session's rosters and the current schedule.
//! Constructed once at startup and handed by reference to whoever needs it;
//! its methods are the only way to mutate session state.
//!
//! Lookups by unknown name are silent no-ops. Successful mutations are
//! reported through the injected `NotificationSink`.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Faculty, Hall, Schedule, ScheduleEntry};
use crate::domain::ports::{NoopNotificationSink, Notification, NotificationSink};
use crate::domain::value_objects::DuplicatePolicy;
use crate::error::{DocentError, DocentResult};

/// Roster entries keyed by name
trait Keyed: Clone {
    const KIND: &'static str;
    fn key(&self) -> &str;
}

impl Keyed for Faculty {
    const KIND: &'static str = "Faculty";
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Hall {
    const KIND: &'static str = "Hall";
    fn key(&self) -> &str {
        &self.name
    }
}

fn find<'a, T: Keyed>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.key() == name)
}

fn check_insert<T: Keyed>(items: &[T], name: &str, policy: DuplicatePolicy) -> DocentResult<()> {
    if policy == DuplicatePolicy::Reject && find(items, name).is_some() {
        return Err(DocentError::DuplicateName {
            kind: T::KIND,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Replace every entry keyed `old_name`. Returns whether anything matched.
fn replace_keyed<T: Keyed>(
    items: &mut [T],
    old_name: &str,
    updated: &T,
    policy: DuplicatePolicy,
) -> DocentResult<bool> {
    if find(items, old_name).is_none() {
        return Ok(false);
    }
    if updated.key() != old_name {
        check_insert(items, updated.key(), policy)?;
    }
    for item in items.iter_mut().filter(|item| item.key() == old_name) {
        *item = updated.clone();
    }
    Ok(true)
}

fn remove_keyed<T: Keyed>(items: &mut Vec<T>, name: &str) -> usize {
    let len_before = items.len();
    items.retain(|item| item.key() != name);
    len_before - items.len()
}

pub struct SessionStore {
    faculty: Vec<Faculty>,
    halls: Vec<Hall>,
    schedule: Option<Schedule>,
    schedule_stored_at: Option<DateTime<Utc>>,
    duplicates: DuplicatePolicy,
    sink: Box<dyn NotificationSink>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("faculty", &self.faculty)
            .field("halls", &self.halls)
            .field("schedule", &self.schedule)
            .field("duplicates", &self.duplicates)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Empty store, rejecting duplicate names, silent notifications
    pub fn new() -> Self {
        Self {
            faculty: Vec::new(),
            halls: Vec::new(),
            schedule: None,
            schedule_stored_at: None,
            duplicates: DuplicatePolicy::default(),
            sink: Box::new(NoopNotificationSink),
        }
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn with_sink(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Load the starting roster without emitting notifications.
    ///
    /// Duplicate names are checked against the configured policy.
    pub fn seed(&mut self, faculty: Vec<Faculty>, halls: Vec<Hall>) -> DocentResult<()> {
        let mut seeded_faculty = self.faculty.clone();
        for member in faculty {
            check_insert(&seeded_faculty, &member.name, self.duplicates)?;
            seeded_faculty.push(member);
        }
        let mut seeded_halls = self.halls.clone();
        for hall in halls {
            check_insert(&seeded_halls, &hall.name, self.duplicates)?;
            seeded_halls.push(hall);
        }
        self.faculty = seeded_faculty;
        self.halls = seeded_halls;
        Ok(())
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    // ---- faculty ----

    pub fn faculty(&self) -> &[Faculty] {
        &self.faculty
    }

    pub fn find_faculty(&self, name: &str) -> Option<&Faculty> {
        find(&self.faculty, name)
    }

    pub fn add_faculty(&mut self, member: Faculty) -> DocentResult<()> {
        check_insert(&self.faculty, &member.name, self.duplicates)?;
        let description = format!("{} has been added.", member.name);
        self.faculty.push(member);
        self.notify(Notification::success("Faculty Added", description));
        Ok(())
    }

    /// Replace the member named `name` with `updated`.
    ///
    /// Returns `Ok(false)` when no member has that name. If `updated` carries
    /// a new name, the old name no longer resolves afterwards.
    pub fn update_faculty(&mut self, name: &str, updated: Faculty) -> DocentResult<bool> {
        let replaced = replace_keyed(&mut self.faculty, name, &updated, self.duplicates)?;
        if replaced {
            self.notify(Notification::success(
                "Faculty Updated",
                format!("{}'s details have been updated.", updated.name),
            ));
        }
        Ok(replaced)
    }

    /// Remove every member named `name`; returns how many were removed.
    pub fn delete_faculty(&mut self, name: &str) -> usize {
        let removed = remove_keyed(&mut self.faculty, name);
        if removed > 0 {
            self.notify(Notification::success(
                "Faculty Removed",
                format!("{} has been removed.", name),
            ));
        }
        removed
    }

    // ---- halls ----

    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    pub fn find_hall(&self, name: &str) -> Option<&Hall> {
        find(&self.halls, name)
    }

    pub fn add_hall(&mut self, hall: Hall) -> DocentResult<()> {
        check_insert(&self.halls, &hall.name, self.duplicates)?;
        let description = format!("{} has been added.", hall.name);
        self.halls.push(hall);
        self.notify(Notification::success("Hall Added", description));
        Ok(())
    }

    pub fn update_hall(&mut self, name: &str, updated: Hall) -> DocentResult<bool> {
        let replaced = replace_keyed(&mut self.halls, name, &updated, self.duplicates)?;
        if replaced {
            self.notify(Notification::success(
                "Hall Updated",
                format!("{}'s details have been updated.", updated.name),
            ));
        }
        Ok(replaced)
    }

    pub fn delete_hall(&mut self, name: &str) -> usize {
        let removed = remove_keyed(&mut self.halls, name);
        if removed > 0 {
            self.notify(Notification::success(
                "Hall Removed",
                format!("{} has been removed.", name),
            ));
        }
        removed
    }

    // ---- schedule ----

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// When the current schedule was stored
    pub fn schedule_stored_at(&self) -> Option<DateTime<Utc>> {
        self.schedule_stored_at
    }

    /// Replace the schedule wholesale (`None` clears it).
    pub fn set_schedule(&mut self, schedule: Option<Schedule>) {
        self.schedule_stored_at = schedule.as_ref().map(|_| Utc::now());
        self.schedule = schedule;
    }

    /// Replace the entry at `index`.
    ///
    /// No-op (returns `false`) when no schedule is loaded or `index` is out
    /// of range.
    pub fn update_schedule_entry(&mut self, index: usize, entry: ScheduleEntry) -> bool {
        let Some(slot) = self
            .schedule
            .as_mut()
            .and_then(|schedule| schedule.entries.get_mut(index))
        else {
            return false;
        };
        let description = format!("The entry for {} has been updated.", entry.course_name);
        *slot = entry;
        self.notify(Notification::success("Schedule Updated", description));
        true
    }

    pub fn notify(&self, notification: Notification) {
        self.sink.notify(notification);
    }
}
