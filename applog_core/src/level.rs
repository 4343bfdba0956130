use derive_more::Display;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Log severity.
///
/// Variants are ranked by verbosity: a lower rank is more severe and survives a stricter filter.
/// The derived ordering follows the rank, so `Error < Info < Debug`.
#[derive(Serialize, Display, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    #[display("ERROR")]
    Error = 0,
    #[display("INFO")]
    Info = 1,
    #[display("DEBUG")]
    Debug = 2,
}

impl LogLevel {
    pub const ALL: [LogLevel; 3] = [LogLevel::Error, LogLevel::Info, LogLevel::Debug];

    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Widest `log` filter whose records all map inside this level.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Trace,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown log level '{0}'")]
pub struct LogLevelParseError(pub String);

impl FromStr for LogLevel {
    type Err = LogLevelParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LogLevelParseError(String::from(value))),
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error | log::Level::Warn => LogLevel::Error,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }
}
