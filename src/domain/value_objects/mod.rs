//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod comma_list;
mod duplicate_policy;

pub use comma_list::CommaList;
pub use duplicate_policy::DuplicatePolicy;
