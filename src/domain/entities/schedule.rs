//! Schedule entity
//!
//! The result of one generation request. Faculty and hall names are soft
//! references: nothing guarantees they still resolve in the current roster.

use serde::{Deserialize, Serialize};

/// One proposed class assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub faculty_name: String,
    pub hall_name: String,
    pub time_slot: String,
    pub course_name: String,
}

impl ScheduleEntry {
    pub fn new(
        faculty_name: impl Into<String>,
        hall_name: impl Into<String>,
        time_slot: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            faculty_name: faculty_name.into(),
            hall_name: hall_name.into(),
            time_slot: time_slot.into(),
            course_name: course_name.into(),
        }
    }
}

/// Generated timetable plus the model's narrative summary
///
/// Serialized with the entry list under `schedule`, matching the
/// generation service's response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Schedule {
    #[serde(rename = "schedule")]
    pub entries: Vec<ScheduleEntry>,
    #[serde(default)]
    pub summary: String,
}

impl Schedule {
    pub fn new(entries: Vec<ScheduleEntry>, summary: impl Into<String>) -> Self {
        Self {
            entries,
            summary: summary.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries assigned to a faculty member
    pub fn entries_for_faculty<'a>(
        &'a self,
        faculty_name: &'a str,
    ) -> impl Iterator<Item = &'a ScheduleEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.faculty_name == faculty_name)
    }
}
