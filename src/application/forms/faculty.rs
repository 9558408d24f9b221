use super::{has_list_items, has_min_chars, parse_positive, Form, FormField};
use crate::domain::entities::Faculty;
use crate::domain::value_objects::CommaList;

const FIELDS: &[FormField] = &[
    FormField {
        key: FacultyForm::NAME,
        label: "Faculty Name",
        placeholder: "e.g., Dr. Jane Doe",
    },
    FormField {
        key: FacultyForm::DEPARTMENT,
        label: "Department",
        placeholder: "e.g., Computer Science",
    },
    FormField {
        key: FacultyForm::PREFERRED_HALLS,
        label: "Preferred Halls (comma-separated)",
        placeholder: "e.g., Hall A, Hall B",
    },
    FormField {
        key: FacultyForm::PREFERRED_TIME_SLOTS,
        label: "Preferred Time Slots (comma-separated)",
        placeholder: "e.g., 9-10 AM, 1-2 PM",
    },
    FormField {
        key: FacultyForm::MAX_CLASSES,
        label: "Maximum Classes",
        placeholder: "e.g., 2",
    },
];

/// Raw text of the faculty dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacultyForm {
    pub name: String,
    pub department: String,
    pub preferred_halls: String,
    pub preferred_time_slots: String,
    pub max_classes: String,
}

impl FacultyForm {
    pub const NAME: &'static str = "name";
    pub const DEPARTMENT: &'static str = "department";
    pub const PREFERRED_HALLS: &'static str = "preferred_halls";
    pub const PREFERRED_TIME_SLOTS: &'static str = "preferred_time_slots";
    pub const MAX_CLASSES: &'static str = "max_classes";

    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill from an existing member (editing)
    pub fn from_entity(faculty: &Faculty) -> Self {
        Self {
            name: faculty.name.clone(),
            department: faculty.department.clone(),
            preferred_halls: CommaList::join(&faculty.preferred_halls),
            preferred_time_slots: CommaList::join(&faculty.preferred_time_slots),
            max_classes: faculty.max_classes.to_string(),
        }
    }
}

impl Form for FacultyForm {
    type Output = Faculty;

    const TITLE: &'static str = "Faculty";

    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn value(&self, key: &str) -> &str {
        match key {
            Self::NAME => &self.name,
            Self::DEPARTMENT => &self.department,
            Self::PREFERRED_HALLS => &self.preferred_halls,
            Self::PREFERRED_TIME_SLOTS => &self.preferred_time_slots,
            Self::MAX_CLASSES => &self.max_classes,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            Self::NAME => self.name = value,
            Self::DEPARTMENT => self.department = value,
            Self::PREFERRED_HALLS => self.preferred_halls = value,
            Self::PREFERRED_TIME_SLOTS => self.preferred_time_slots = value,
            Self::MAX_CLASSES => self.max_classes = value,
            _ => {}
        }
    }

    fn check(key: &str, value: &str) -> Option<&'static str> {
        match key {
            Self::NAME if !has_min_chars(value, 2) => Some("Name must be at least 2 characters."),
            Self::DEPARTMENT if !has_min_chars(value, 2) => {
                Some("Department must be at least 2 characters.")
            }
            Self::PREFERRED_HALLS if !has_list_items(value) => {
                Some("Please enter at least one preferred hall.")
            }
            Self::PREFERRED_TIME_SLOTS if !has_list_items(value) => {
                Some("Please enter at least one preferred time slot.")
            }
            Self::MAX_CLASSES if parse_positive(value).is_none() => {
                Some("Max classes must be at least 1.")
            }
            _ => None,
        }
    }

    fn build(&self) -> Faculty {
        Faculty {
            name: self.name.trim().to_string(),
            department: self.department.trim().to_string(),
            preferred_halls: CommaList::parse(&self.preferred_halls).into_vec(),
            preferred_time_slots: CommaList::parse(&self.preferred_time_slots).into_vec(),
            max_classes: parse_positive(&self.max_classes).unwrap_or(1),
        }
    }
}
