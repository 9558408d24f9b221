pub mod roster;
pub mod schedule;
pub mod version;
