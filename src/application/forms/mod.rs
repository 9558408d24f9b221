//! Roster forms
//!
//! Forms hold raw text exactly as typed, validate it, and hand a typed
//! entity to the caller. They never touch the session store or the network;
//! storing the result is the caller's job.

mod faculty;
mod hall;

use std::fmt;

pub use faculty::FacultyForm;
pub use hall::HallForm;

use crate::domain::value_objects::CommaList;

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// A validation failure scoped to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every field error found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message).collect();
        f.write_str(&messages.join(" "))
    }
}

impl std::error::Error for FormErrors {}

/// Shared behaviour of the faculty and hall forms
pub trait Form {
    type Output;

    /// Dialog title
    const TITLE: &'static str;

    fn fields() -> &'static [FormField];

    /// Current raw text of a field (empty for unknown keys)
    fn value(&self, key: &str) -> &str;

    fn set_value(&mut self, key: &str, value: String);

    /// Validation message for one field's text, if it is invalid
    fn check(key: &str, value: &str) -> Option<&'static str>;

    /// Convert already-validated text into the typed entity
    fn build(&self) -> Self::Output;

    /// Validate every field, collecting all errors.
    fn validate(&self) -> Result<Self::Output, FormErrors> {
        let mut errors = FormErrors::default();
        for field in Self::fields() {
            if let Some(message) = Self::check(field.key, self.value(field.key)) {
                errors.push(field.key, message);
            }
        }
        if errors.is_empty() {
            Ok(self.build())
        } else {
            Err(errors)
        }
    }

    /// Validate, then hand the entity to `on_submit` and signal `on_close`.
    ///
    /// On failure neither callback runs.
    fn submit<S, C>(&self, on_submit: S, on_close: C) -> Result<(), FormErrors>
    where
        S: FnOnce(Self::Output),
        C: FnOnce(),
    {
        let output = self.validate()?;
        on_submit(output);
        on_close();
        Ok(())
    }
}

pub(crate) fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

pub(crate) fn has_list_items(value: &str) -> bool {
    !CommaList::parse(value).is_empty()
}

/// Parse a whole number of at least 1
pub(crate) fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}
