//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// A `routing.rules_file` (resolved relative to the config file) contributes
/// additional rule lines after the inline ones; blank lines and `#`-comments
/// in it are skipped.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: AppConfig = toml::from_str(&content)?;

    if let Some(rules_file) = config.routing.rules_file.clone() {
        let resolved = match path.parent() {
            Some(dir) if rules_file.is_relative() => dir.join(&rules_file),
            _ => rules_file,
        };
        let table = fs::read_to_string(&resolved)?;
        config.routing.rules.extend(
            table
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
