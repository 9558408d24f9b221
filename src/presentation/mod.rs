//! Presentation Layer
//!
//! CLI argument parsing (via clap). Rendering lives on the binary side.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands, RosterArgs};
