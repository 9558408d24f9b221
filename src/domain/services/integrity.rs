//! Integrity checks for generated schedules.
//!
//! The generation service is trusted to produce a sensible timetable; this
//! module only reports where its answer disagrees with the submitted rosters.
//! Nothing here rejects or modifies a schedule.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::{Faculty, Hall, Schedule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Entry names a faculty member that is not in the roster
    UnknownFaculty { index: usize, name: String },
    /// Entry names a hall that is not in the roster
    UnknownHall { index: usize, name: String },
    /// Faculty member assigned more classes than `max_classes`
    OverMaxClasses {
        faculty: String,
        assigned: usize,
        max: u32,
    },
    /// Hall used at a time slot it does not list as available
    HallUnavailable {
        index: usize,
        hall: String,
        time_slot: String,
    },
    /// Two or more courses share a hall and time slot
    HallDoubleBooked {
        hall: String,
        time_slot: String,
        courses: Vec<String>,
    },
    /// Faculty member teaches two or more courses at the same time slot
    FacultyDoubleBooked {
        faculty: String,
        time_slot: String,
        courses: Vec<String>,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::UnknownFaculty { index, name } => {
                write!(f, "entry {}: unknown faculty '{}'", index + 1, name)
            }
            IntegrityIssue::UnknownHall { index, name } => {
                write!(f, "entry {}: unknown hall '{}'", index + 1, name)
            }
            IntegrityIssue::OverMaxClasses {
                faculty,
                assigned,
                max,
            } => write!(
                f,
                "{} is assigned {} classes (max {})",
                faculty, assigned, max
            ),
            IntegrityIssue::HallUnavailable {
                index,
                hall,
                time_slot,
            } => write!(
                f,
                "entry {}: {} is not available at {}",
                index + 1,
                hall,
                time_slot
            ),
            IntegrityIssue::HallDoubleBooked {
                hall,
                time_slot,
                courses,
            } => write!(
                f,
                "{} is double-booked at {} ({})",
                hall,
                time_slot,
                courses.join(", ")
            ),
            IntegrityIssue::FacultyDoubleBooked {
                faculty,
                time_slot,
                courses,
            } => write!(
                f,
                "{} teaches more than one class at {} ({})",
                faculty,
                time_slot,
                courses.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Cross-check a schedule against the rosters it was generated from.
pub fn check_schedule(schedule: &Schedule, faculty: &[Faculty], halls: &[Hall]) -> IntegrityReport {
    let mut issues = Vec::new();

    let mut per_faculty: BTreeMap<&str, usize> = BTreeMap::new();
    let mut hall_slots: BTreeMap<(&str, &str), Vec<String>> = BTreeMap::new();
    let mut faculty_slots: BTreeMap<(&str, &str), Vec<String>> = BTreeMap::new();

    for (index, entry) in schedule.entries.iter().enumerate() {
        if !faculty.iter().any(|f| f.name == entry.faculty_name) {
            issues.push(IntegrityIssue::UnknownFaculty {
                index,
                name: entry.faculty_name.clone(),
            });
        }

        match halls.iter().find(|h| h.name == entry.hall_name) {
            None => issues.push(IntegrityIssue::UnknownHall {
                index,
                name: entry.hall_name.clone(),
            }),
            Some(hall) if !hall.is_available_at(&entry.time_slot) => {
                issues.push(IntegrityIssue::HallUnavailable {
                    index,
                    hall: hall.name.clone(),
                    time_slot: entry.time_slot.clone(),
                })
            }
            Some(_) => {}
        }

        *per_faculty.entry(entry.faculty_name.as_str()).or_default() += 1;
        hall_slots
            .entry((entry.hall_name.as_str(), entry.time_slot.as_str()))
            .or_default()
            .push(entry.course_name.clone());
        faculty_slots
            .entry((entry.faculty_name.as_str(), entry.time_slot.as_str()))
            .or_default()
            .push(entry.course_name.clone());
    }

    for member in faculty {
        let assigned = per_faculty.get(member.name.as_str()).copied().unwrap_or(0);
        if assigned > member.max_classes as usize {
            issues.push(IntegrityIssue::OverMaxClasses {
                faculty: member.name.clone(),
                assigned,
                max: member.max_classes,
            });
        }
    }

    for ((hall, time_slot), courses) in hall_slots {
        if courses.len() > 1 {
            issues.push(IntegrityIssue::HallDoubleBooked {
                hall: hall.to_string(),
                time_slot: time_slot.to_string(),
                courses,
            });
        }
    }

    for ((faculty, time_slot), courses) in faculty_slots {
        if courses.len() > 1 {
            issues.push(IntegrityIssue::FacultyDoubleBooked {
                faculty: faculty.to_string(),
                time_slot: time_slot.to_string(),
                courses,
            });
        }
    }

    IntegrityReport { issues }
}
