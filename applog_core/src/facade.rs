//! Bridge to the `log` crate facade.
//!
//! Records from `log::error!` and friends go through the same level filter and line format as
//! direct calls. `warn` records count as `ERROR` and `trace` records as `DEBUG`.
use crate::level::LogLevel;
use crate::logger::{AppLogger, Logger};
use crate::sink::Sink;
use log::{Metadata, Record, SetLoggerError};

impl<S> log::Log for AppLogger<S>
where
    S: Sink + Clone + Send + Sync,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        AppLogger::enabled(self, LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let level = LogLevel::from(record.level());
        if AppLogger::enabled(self, level) {
            Logger::log(self, level, &record.args().to_string(), None);
        }
    }

    fn flush(&self) {
        AppLogger::flush(self);
    }
}

/// Install `logger` as the global `log` logger.
///
/// Fails if a global logger is already set.
pub fn init<S>(logger: AppLogger<S>) -> Result<(), SetLoggerError>
where
    S: Sink + Clone + Send + Sync + 'static,
{
    let max_level = logger.config().level.to_level_filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}
