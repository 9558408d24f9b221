//! Starting roster for a session
//!
//! A roster is loaded once, validated with the same rules as the forms, and
//! seeded into a fresh `SessionStore`. Nothing is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::forms::{FacultyForm, Form, HallForm};
use crate::domain::entities::{Faculty, Hall};
use crate::domain::services::SessionStore;
use crate::error::{DocentError, DocentResult};

/// File formats a roster can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Toml,
    Json,
    Yaml,
}

impl RosterFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> DocentResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Ok(RosterFormat::Toml),
            "json" => Ok(RosterFormat::Json),
            "yaml" | "yml" => Ok(RosterFormat::Yaml),
            _ => Err(DocentError::UnsupportedRosterFormat {
                extension,
                file: path.to_path_buf(),
            }),
        }
    }
}

/// Faculty and halls to start a session with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub faculty: Vec<Faculty>,
    pub halls: Vec<Hall>,
}

impl Roster {
    pub fn new(faculty: Vec<Faculty>, halls: Vec<Hall>) -> Self {
        Self { faculty, halls }
    }

    pub fn is_empty(&self) -> bool {
        self.faculty.is_empty() && self.halls.is_empty()
    }

    /// Built-in demo roster: three faculty members and five halls.
    pub fn sample() -> Self {
        const SLOT_1: &str = "9:00 AM - 10:30 AM";
        const SLOT_2: &str = "10:30 AM - 12:00 PM";
        const SLOT_3: &str = "1:00 PM - 2:30 PM";
        const SLOT_4: &str = "2:30 PM - 4:00 PM";

        let faculty = vec![
            Faculty::new("Dr. Alan Turing", "Computer Science", 2)
                .with_preferred_halls(["Hall A", "Hall B"])
                .with_preferred_time_slots([SLOT_1, SLOT_3]),
            Faculty::new("Dr. Grace Hopper", "Computer Science", 1)
                .with_preferred_halls(["Hall C"])
                .with_preferred_time_slots([SLOT_2]),
            Faculty::new("Dr. Marie Curie", "Physics", 2)
                .with_preferred_halls(["Hall D", "Hall E"])
                .with_preferred_time_slots([SLOT_1, SLOT_4]),
        ];

        let halls = vec![
            Hall::new("Hall A", 100)
                .with_available_times([SLOT_1, SLOT_2, SLOT_3, SLOT_4])
                .with_equipment(["Projector", "Whiteboard"]),
            Hall::new("Hall B", 50)
                .with_available_times([SLOT_1, SLOT_3])
                .with_equipment(["Projector", "Whiteboard", "Computers"]),
            Hall::new("Hall C", 120)
                .with_available_times([SLOT_2, SLOT_4])
                .with_equipment(["Projector", "Large Screen"]),
            Hall::new("Hall D", 80)
                .with_available_times([SLOT_1, SLOT_2])
                .with_equipment(["Projector", "Physics Lab Equipment"]),
            Hall::new("Hall E", 60)
                .with_available_times([SLOT_3, SLOT_4])
                .with_equipment(["Whiteboard"]),
        ];

        Self { faculty, halls }
    }

    /// Read a roster file, choosing the decoder by extension, then validate it.
    pub fn load(path: &Path) -> DocentResult<Self> {
        let format = RosterFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, format, path)?.validate(path)
    }

    /// Decode roster text without validating entries.
    pub fn parse(content: &str, format: RosterFormat, path: &Path) -> DocentResult<Self> {
        let invalid = |message: String| DocentError::InvalidRoster {
            file: path.to_path_buf(),
            message,
        };
        match format {
            RosterFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string())),
            RosterFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string())),
            RosterFormat::Yaml => {
                serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))
            }
        }
    }

    /// Run every entry through the form rules.
    ///
    /// Returns the entries as the forms would store them (names trimmed,
    /// empty list items dropped). Reports the first invalid entry with its
    /// 1-based position.
    pub fn validate(&self, path: &Path) -> DocentResult<Self> {
        let faculty = self
            .faculty
            .iter()
            .enumerate()
            .map(|(i, member)| {
                FacultyForm::from_entity(member)
                    .validate()
                    .map_err(|errors| invalid_entry("faculty", i, path, errors.to_string()))
            })
            .collect::<DocentResult<Vec<_>>>()?;
        let halls = self
            .halls
            .iter()
            .enumerate()
            .map(|(i, hall)| {
                HallForm::from_entity(hall)
                    .validate()
                    .map_err(|errors| invalid_entry("hall", i, path, errors.to_string()))
            })
            .collect::<DocentResult<Vec<_>>>()?;
        Ok(Self { faculty, halls })
    }

    /// Seed `store` with this roster (no notifications).
    pub fn apply(self, store: &mut SessionStore) -> DocentResult<()> {
        store.seed(self.faculty, self.halls)
    }
}

fn invalid_entry(kind: &'static str, index: usize, path: &Path, message: String) -> DocentError {
    DocentError::InvalidRosterEntry {
        kind,
        index: index + 1,
        file: PathBuf::from(path),
        message,
    }
}
