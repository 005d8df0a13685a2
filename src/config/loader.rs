use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

pub(crate) fn load_yaml_str<T: DeserializeOwned>(contents: &str) -> Result<T, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub(crate) fn load_yaml_file<T: DeserializeOwned, P: AsRef<Path>>(
    path: P,
) -> Result<T, ConfigError> {
    let file_contents = std::fs::read_to_string(path)?;
    load_yaml_str(&file_contents)
}

/// Fails with a [`ConfigError::ValidationError`] naming `field` unless `value`
/// is finite and satisfies `check`.
pub(crate) fn ensure(
    field: &str,
    value: f64,
    check: impl Fn(f64) -> bool,
    expectation: &str,
) -> Result<(), ConfigError> {
    if value.is_finite() && check(value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{field} must be {expectation}, got {value}"
        )))
    }
}
