//! Faculty entity
//!
//! A roster entry for one instructor. `name` is the natural key.

use serde::{Deserialize, Serialize};

/// An instructor and their scheduling preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub name: String,
    pub department: String,
    #[serde(default, alias = "preferred_halls")]
    pub preferred_halls: Vec<String>,
    #[serde(default, alias = "preferred_time_slots")]
    pub preferred_time_slots: Vec<String>,
    #[serde(alias = "max_classes")]
    pub max_classes: u32,
}

impl Faculty {
    pub fn new(name: impl Into<String>, department: impl Into<String>, max_classes: u32) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            preferred_halls: Vec::new(),
            preferred_time_slots: Vec::new(),
            max_classes,
        }
    }

    pub fn with_preferred_halls<I, S>(mut self, halls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_halls = halls.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preferred_time_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_time_slots = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `hall` is one of this member's preferred halls
    pub fn prefers_hall(&self, hall: &str) -> bool {
        self.preferred_halls.iter().any(|h| h == hall)
    }
}
