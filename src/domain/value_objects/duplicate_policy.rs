//! Duplicate Policy Value Object
//!
//! Decides what the session store does when a roster entry is added (or
//! renamed) onto a name that is already taken.

use serde::{Deserialize, Serialize};

/// How the store treats name collisions
///
/// - `Reject`: refuse the mutation, leave the store unchanged (default)
/// - `Allow`: keep both entries; lookups resolve to the first match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    Allow,
}

impl DuplicatePolicy {
    pub const VALID_VALUES: &'static [&'static str] = &["reject", "allow"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "allow" => Some(Self::Allow),
            _ => None,
        }
    }
}
