//! Configuration discovery and loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::DuplicatePolicy;
use crate::error::{DocentError, DocentResult};

use super::env_validator::{suggest, EnvOverrides};
use super::types::{Config, Verbosity};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "docent.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DocentResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DocentError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Otherwise `./docent.toml` is tried, then the
/// user config file, then defaults. Env overrides are applied last.
pub fn discover(
    explicit: Option<&Path>,
    cwd: &Path,
) -> DocentResult<(Config, ConfigSource, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(cwd.join(PROJECT_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    let (config, source, warnings) = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            (config, ConfigSource::File(path), warnings)
        }
        None => (Config::default(), ConfigSource::Defaults, Vec::new()),
    };

    Ok((with_env_overrides(config), source, warnings))
}

/// Apply environment variable overrides (DOCENT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

/// Env override logic with an injectable lookup (for testing)
pub(crate) fn apply_env_overrides<L, W>(mut config: Config, lookup: L, writer: &mut W) -> Config
where
    L: Fn(&str) -> Option<String>,
    W: Write,
{
    let mut env = EnvOverrides::new(lookup, writer);

    if let Some(endpoint) = env.text("DOCENT_ENDPOINT") {
        config.generator.endpoint = endpoint;
    }
    if let Some(model) = env.text("DOCENT_MODEL") {
        config.generator.model = model;
    }
    if let Some(policy) = env.choice(
        "DOCENT_DUPLICATES",
        DuplicatePolicy::VALID_VALUES,
        DuplicatePolicy::parse,
    ) {
        config.roster.duplicates = policy;
    }
    if let Some(verbosity) =
        env.choice("DOCENT_VERBOSITY", Verbosity::VALID_VALUES, Verbosity::parse)
    {
        config.output.verbosity = verbosity;
    }
    if let Some(secs) = env.seconds("DOCENT_TIMEOUT_SECS") {
        config.generator.timeout_secs = secs;
    }

    config
}

/// User config file location (~/.config/docent/config.toml)
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docent").join("config.toml"))
}

/// Line of the first `key = ...` assignment (1-based)
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generator",
        "endpoint",
        "model",
        "api_key_env",
        "temperature",
        "timeout_secs",
        "check_integrity",
        "roster",
        "duplicates",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    suggest(unknown, CANDIDATES).map(str::to_string)
}
