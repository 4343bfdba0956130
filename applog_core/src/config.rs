use crate::level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Logger configuration
///
/// Fields missing from a JSON document take their default values, so a partial config is
/// always accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggerConfig {
    /// Most verbose level that is emitted.
    pub level: LogLevel,
    /// Prepend an ISO-8601 timestamp segment.
    pub timestamp: bool,
    /// Namespace label, shown only when non-empty.
    pub prefix: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            level: LogLevel::Info,
            timestamp: true,
            prefix: None,
        }
    }
}

impl LoggerConfig {
    pub fn try_new(config_file: &Path) -> Result<LoggerConfig, LoggerConfigError> {
        let mut f = fs::File::open(config_file)?;
        let mut config_string = String::new();
        f.read_to_string(&mut config_string)?;
        serde_json::from_str(&config_string)
            .map_err(|err| LoggerConfigError::Parse(err.to_string()))
    }

    pub(crate) fn visible_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }
}

#[derive(Error, Debug)]
pub enum LoggerConfigError {
    #[error("Error reading logger config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing logger config: {0}")]
    Parse(String),
}
