//! Error types for Docent
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::GenerationError;

/// Result type alias for Docent operations
pub type DocentResult<T> = Result<T, DocentError>;

/// Main error type for Docent operations
#[derive(Error, Debug)]
pub enum DocentError {
    /// A faculty member or hall with this name already exists
    #[error("{kind} '{name}' already exists")]
    DuplicateName { kind: &'static str, name: String },

    /// A seed roster entry failed validation
    #[error("invalid {kind} #{index} in {file}: {message}")]
    InvalidRosterEntry {
        kind: &'static str,
        index: usize,
        file: PathBuf,
        message: String,
    },

    /// Roster file could not be decoded
    #[error("invalid roster file {file}: {message}")]
    InvalidRoster { file: PathBuf, message: String },

    /// Roster file extension is not one of toml/json/yaml/yml
    #[error("unsupported roster format '{extension}' for {file} (expected .toml, .json or .yaml)")]
    UnsupportedRosterFormat { extension: String, file: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The generation service call failed
    #[error("schedule generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
