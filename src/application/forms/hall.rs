use super::{has_list_items, has_min_chars, parse_positive, Form, FormField};
use crate::domain::entities::Hall;
use crate::domain::value_objects::CommaList;

const FIELDS: &[FormField] = &[
    FormField {
        key: HallForm::NAME,
        label: "Hall Name",
        placeholder: "e.g., Turing Auditorium",
    },
    FormField {
        key: HallForm::CAPACITY,
        label: "Capacity",
        placeholder: "e.g., 120",
    },
    FormField {
        key: HallForm::AVAILABLE_TIMES,
        label: "Available Times (comma-separated)",
        placeholder: "e.g., 9-10 AM, 1-2 PM",
    },
    FormField {
        key: HallForm::EQUIPMENT,
        label: "Equipment (comma-separated)",
        placeholder: "e.g., Projector, Whiteboard",
    },
];

/// Raw text of the hall dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HallForm {
    pub name: String,
    pub capacity: String,
    pub available_times: String,
    pub equipment: String,
}

impl HallForm {
    pub const NAME: &'static str = "name";
    pub const CAPACITY: &'static str = "capacity";
    pub const AVAILABLE_TIMES: &'static str = "available_times";
    pub const EQUIPMENT: &'static str = "equipment";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entity(hall: &Hall) -> Self {
        Self {
            name: hall.name.clone(),
            capacity: hall.capacity.to_string(),
            available_times: CommaList::join(&hall.available_times),
            equipment: CommaList::join(&hall.equipment),
        }
    }
}

impl Form for HallForm {
    type Output = Hall;

    const TITLE: &'static str = "Hall";

    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn value(&self, key: &str) -> &str {
        match key {
            Self::NAME => &self.name,
            Self::CAPACITY => &self.capacity,
            Self::AVAILABLE_TIMES => &self.available_times,
            Self::EQUIPMENT => &self.equipment,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            Self::NAME => self.name = value,
            Self::CAPACITY => self.capacity = value,
            Self::AVAILABLE_TIMES => self.available_times = value,
            Self::EQUIPMENT => self.equipment = value,
            _ => {}
        }
    }

    fn check(key: &str, value: &str) -> Option<&'static str> {
        match key {
            Self::NAME if !has_min_chars(value, 2) => Some("Name must be at least 2 characters."),
            Self::CAPACITY if parse_positive(value).is_none() => {
                Some("Capacity must be at least 1.")
            }
            Self::AVAILABLE_TIMES if !has_list_items(value) => {
                Some("Please enter at least one available time slot.")
            }
            Self::EQUIPMENT if !has_list_items(value) => {
                Some("Please enter at least one piece of equipment.")
            }
            _ => None,
        }
    }

    fn build(&self) -> Hall {
        Hall {
            name: self.name.trim().to_string(),
            capacity: parse_positive(&self.capacity).unwrap_or(1),
            available_times: CommaList::parse(&self.available_times).into_vec(),
            equipment: CommaList::parse(&self.equipment).into_vec(),
        }
    }
}
