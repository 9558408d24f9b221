//! Configuration module for Docent
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DOCENT_*)
//! 3. Explicit `--config` file, else `./docent.toml`
//! 4. User config (~/.config/docent/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{discover, with_env_overrides, ConfigSource, ConfigWarning};
pub use types::{ColorMode, Config, GeneratorConfig, OutputConfig, RosterConfig, Verbosity};
