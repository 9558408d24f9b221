//! Hall entity
//!
//! A roster entry for one lecture hall. `name` is the natural key.

use serde::{Deserialize, Serialize};

/// A physical room and its capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hall {
    pub name: String,
    pub capacity: u32,
    #[serde(default, alias = "available_times")]
    pub available_times: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl Hall {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            available_times: Vec::new(),
            equipment: Vec::new(),
        }
    }

    pub fn with_available_times<I, S>(mut self, times: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_times = times.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_equipment<I, S>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment = equipment.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_available_at(&self, time_slot: &str) -> bool {
        self.available_times.iter().any(|t| t == time_slot)
    }
}
