use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// An environment variable is set but its value could not be parsed.
#[derive(Debug, Error)]
#[error("Invalid value {value:?} for environment variable {name}: {message}")]
pub struct InvalidEnvVarError {
    /// Name of the offending variable.
    pub name: String,
    /// The raw value that failed to parse.
    pub value: String,
    /// Parser message.
    pub message: String,
}

/// Reads an optional environment variable.
///
/// Unset variables, variables that are not valid unicode and variables that are
/// blank after trimming all read as `None`, so an exported-but-empty override
/// never shadows a configured value.
pub fn env_override(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads and parses an optional environment variable.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
///
/// Returns `Ok(None)` when the variable is absent (see [`env_override`]).
pub fn parse_env_override<T>(name: &str) -> Result<Option<T>, InvalidEnvVarError>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(value) = env_override(name) else {
        return Ok(None);
    };
    value
        .parse::<T>()
        .map(Some)
        .map_err(|e| InvalidEnvVarError {
            name: name.to_string(),
            value,
            message: e.to_string(),
        })
}
