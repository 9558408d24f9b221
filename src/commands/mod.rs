//! Subcommand implementations for the docent binary

pub mod generate;
pub mod prompt;
pub mod roster;
pub mod session;
mod setup;
pub mod version;
