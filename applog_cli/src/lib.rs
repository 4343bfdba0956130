use crate::opts::{Command, Opt};
use applog_core::{
    facade, utils::applog_version_str, AppLogger, EnvConfig, Logger, LoggerConfig,
    LoggerConfigError, Sink,
};
use serde_json::{json, Value};
use thiserror::Error;

pub mod demo;
pub mod opts;

/// Logger for this run: the config file when given, otherwise the process-wide default.
pub fn select_logger(opt: &Opt) -> Result<AppLogger, CliError> {
    match &opt.config {
        Some(config_file) => Ok(AppLogger::new(LoggerConfig::try_new(config_file)?)),
        None => Ok(applog_core::logger().clone()),
    }
}

pub fn init_logging(logger: &AppLogger) -> Result<(), CliError> {
    facade::init(logger.clone()).map_err(|err| CliError::Logging(err.to_string()))
}

pub fn startup_meta(env: &EnvConfig) -> Value {
    json!({
        "mode": env.build_mode.to_string(),
        "isDevelopment": !env.build_mode.is_production(),
        "isProduction": env.build_mode.is_production(),
        "version": applog_version_str(),
        "logLevel": env.log_level,
        "logTimestamp": env.log_timestamp,
    })
}

/// Run one command, returning what should go to stdout.
pub fn run_command<S>(command: &Command, logger: &AppLogger<S>) -> Vec<String>
where
    S: Sink + Clone,
{
    match command {
        Command::Start => Vec::new(),
        Command::Greet { name } => vec![demo::greet(&logger.child("Greeting"), name)],
        Command::Count { increments, reset } => {
            let mut counter = demo::Counter::new(logger.child("Counter"));
            for _ in 0..*increments {
                counter.increment();
            }
            let mut out = vec![format!("Count: {}", counter.count())];
            if *reset {
                counter.reset();
                out.push(format!("Count: {}", counter.count()));
            }
            out
        }
    }
}

pub fn run(opt: &Opt) -> Result<(), CliError> {
    let logger = select_logger(opt)?;
    init_logging(&logger)?;
    logger.info(
        "Application starting",
        Some(&startup_meta(&EnvConfig::from_process())),
    );
    log::debug!("Running {:?}", opt.command());
    for line in run_command(opt.command(), &logger) {
        println!("{}", line);
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Logger config error: {0}")]
    Config(#[from] LoggerConfigError),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use applog_core::{BuildMode, LogLevel, MemorySink};

    #[test]
    fn test_startup_meta() {
        let env = EnvConfig {
            log_level: Some("debug".into()),
            log_timestamp: None,
            build_mode: BuildMode::Production,
        };
        let meta = startup_meta(&env);
        assert_eq!(meta["mode"], "production");
        assert_eq!(meta["isProduction"], true);
        assert_eq!(meta["isDevelopment"], false);
        assert_eq!(meta["logLevel"], "debug");
        assert_eq!(meta["logTimestamp"], Value::Null);
        assert_eq!(meta["version"], applog_version_str());
    }

    #[test]
    fn test_run_count() {
        let sink = MemorySink::new();
        let logger = AppLogger::with_sink(
            LoggerConfig {
                level: LogLevel::Debug,
                timestamp: false,
                prefix: Some("app".into()),
            },
            sink.clone(),
        );
        let out = run_command(
            &Command::Count {
                increments: 2,
                reset: true,
            },
            &logger,
        );
        assert_eq!(out, vec!["Count: 2", "Count: 0"]);
        assert_eq!(sink.len(), 4);
        assert!(sink.lines().iter().all(|l| l.starts_with("[app:Counter] [DEBUG]")));
    }

    #[test]
    fn test_run_greet() {
        let sink = MemorySink::new();
        let logger = AppLogger::with_sink(LoggerConfig::default(), sink.clone());
        let out = run_command(&Command::Greet { name: "you".into() }, &logger);
        assert_eq!(out, vec!["Hello, you!"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_select_logger_missing_config() {
        let opt = Opt {
            config: Some("/nonexistent/applog.json".into()),
            command: None,
        };
        assert!(matches!(select_logger(&opt), Err(CliError::Config(_))));
    }

    #[test]
    fn test_select_logger_default() {
        let opt = Opt {
            config: None,
            command: None,
        };
        let logger = select_logger(&opt).unwrap();
        assert_eq!(logger.config(), applog_core::logger().config());
    }
}
