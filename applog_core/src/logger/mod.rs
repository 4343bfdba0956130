use crate::config::LoggerConfig;
use crate::env::EnvConfig;
use crate::level::LogLevel;
use crate::sink::{Console, Sink};
use crate::time::TimeStamp;
use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    static ref DEFAULT_LOGGER: AppLogger = AppLogger::new(EnvConfig::from_process().logger_config());
}

/// Process-wide logger, configured once from the environment on first use.
pub fn logger() -> &'static AppLogger {
    &DEFAULT_LOGGER
}

/// Common leveled logging functionality
///
/// `meta` is rendered as compact JSON after the message; pass `None` to omit it.
pub trait Logger {
    fn log(&self, level: LogLevel, message: &str, meta: Option<&Value>);

    /// Derived logger with the same level and timestamp settings and a nested prefix.
    fn child(&self, prefix: &str) -> Self
    where
        Self: Sized;

    fn error(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Error, message, meta);
    }

    fn info(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Info, message, meta);
    }

    fn debug(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Debug, message, meta);
    }
}

#[derive(Clone, Debug)]
pub struct AppLogger<S = Console> {
    config: LoggerConfig,
    sink: S,
}

impl AppLogger<Console> {
    pub fn new(config: LoggerConfig) -> Self {
        AppLogger::with_sink(config, Console)
    }
}

impl Default for AppLogger<Console> {
    fn default() -> Self {
        AppLogger::new(LoggerConfig::default())
    }
}

impl<S: Sink> AppLogger<S> {
    pub fn with_sink(config: LoggerConfig, sink: S) -> Self {
        AppLogger { config, sink }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.config.level
    }

    pub(crate) fn flush(&self) {
        self.sink.flush();
    }

    fn format(&self, level: LogLevel, message: &str, meta: Option<&Value>) -> String {
        let now = if self.config.timestamp {
            Some(TimeStamp::now())
        } else {
            None
        };
        format_line(&self.config, now, level, message, meta)
    }
}

impl<S: Sink + Clone> Logger for AppLogger<S> {
    fn log(&self, level: LogLevel, message: &str, meta: Option<&Value>) {
        if !self.enabled(level) {
            return;
        }
        self.sink
            .write_line(level, &self.format(level, message, meta));
    }

    fn child(&self, prefix: &str) -> Self {
        let prefix = match self.config.visible_prefix() {
            Some(parent) => format!("{}:{}", parent, prefix),
            None => String::from(prefix),
        };
        AppLogger {
            config: LoggerConfig {
                prefix: Some(prefix),
                ..self.config.clone()
            },
            sink: self.sink.clone(),
        }
    }
}

/// Builds `[timestamp] [prefix] [LEVEL] message meta`, skipping absent segments.
pub(crate) fn format_line(
    config: &LoggerConfig,
    now: Option<TimeStamp>,
    level: LogLevel,
    message: &str,
    meta: Option<&Value>,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(5);
    if let Some(now) = now {
        parts.push(format!("[{}]", now));
    }
    if let Some(prefix) = config.visible_prefix() {
        parts.push(format!("[{}]", prefix));
    }
    parts.push(format!("[{}]", level));
    parts.push(String::from(message));
    if let Some(meta) = meta {
        parts.push(meta.to_string());
    }
    parts.join(" ")
}
