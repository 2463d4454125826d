//! Process configuration loaded from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `HOST` | `0.0.0.0` | Bind address |
//! | `PORT` | `3000` | Bind port |
//! | `TASK_NAME_MAX_LENGTH` | `200` | Longest accepted task name |
//! | `LOG_DIR` | `logs` | Directory holding `app.log`; `off` disables the file log |

use crate::task::validation::{DEFAULT_MAX_NAME_LENGTH, ValidationConfig};
use std::{env, path::PathBuf};
use thiserror::Error;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory for the request log file.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid port number.
    #[error("Invalid PORT: '{0}'. Expected an integer between 0 and 65535")]
    InvalidPort(String),

    /// `TASK_NAME_MAX_LENGTH` is not a positive integer.
    #[error("Invalid TASK_NAME_MAX_LENGTH: '{0}'. Expected a positive integer")]
    InvalidNameLength(String),

    /// A variable holds non-UTF-8 data.
    #[error("{0} is not valid UTF-8")]
    NotUnicode(&'static str),
}

/// Server and validation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Validation rule settings.
    pub validation: ValidationConfig,
    /// Directory for `app.log`, or `None` to log to the console only.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            validation: ValidationConfig::default(),
            log_dir: Some(PathBuf::from(DEFAULT_LOG_DIR)),
        }
    }
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = read_var("HOST")?;
        let port = read_var("PORT")?;
        let name_length = read_var("TASK_NAME_MAX_LENGTH")?;
        let log_dir = read_var("LOG_DIR")?;
        Self::from_lookup(|key| match key {
            "HOST" => host.clone(),
            "PORT" => port.clone(),
            "TASK_NAME_MAX_LENGTH" => name_length.clone(),
            "LOG_DIR" => log_dir.clone(),
            _ => None,
        })
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Unset and blank values fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard::config::AppConfig;
    ///
    /// let config = AppConfig::from_lookup(|key| match key {
    ///     "PORT" => Some("8080".to_owned()),
    ///     _ => None,
    /// })
    /// .expect("valid configuration");
    /// assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    /// assert_eq!(config.validation.max_name_length, 200);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
        };

        let host = value("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match value("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let max_name_length = match value("TASK_NAME_MAX_LENGTH") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(length) if length > 0 => length,
                _ => return Err(ConfigError::InvalidNameLength(raw)),
            },
            None => DEFAULT_MAX_NAME_LENGTH,
        };
        let log_dir = match value("LOG_DIR") {
            Some(raw) if raw.eq_ignore_ascii_case("off") => None,
            Some(raw) => Some(PathBuf::from(raw)),
            None => Some(PathBuf::from(DEFAULT_LOG_DIR)),
        };

        Ok(Self {
            host,
            port,
            validation: ValidationConfig::default().with_max_name_length(max_name_length),
            log_dir,
        })
    }

    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn read_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
    }
}
