//! Environment-derived defaults for the process-wide logger.
//!
//! The environment is read once into an [`EnvConfig`]; everything downstream works on that
//! value, so the logger itself never touches process state.
use crate::config::LoggerConfig;
use crate::level::LogLevel;
use derive_more::Display;
use std::env;

pub const LOG_LEVEL_VAR: &str = "APP_LOG_LEVEL";
pub const LOG_TIMESTAMP_VAR: &str = "APP_LOG_TIMESTAMP";

#[derive(Display, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuildMode {
    #[display("development")]
    Development,
    #[display("production")]
    Production,
}

impl BuildMode {
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn is_production(&self) -> bool {
        *self == BuildMode::Production
    }

    pub fn default_level(&self) -> LogLevel {
        match self {
            BuildMode::Development => LogLevel::Debug,
            BuildMode::Production => LogLevel::Info,
        }
    }
}

/// Raw logger settings as found in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub log_level: Option<String>,
    pub log_timestamp: Option<String>,
    pub build_mode: BuildMode,
}

impl EnvConfig {
    pub fn from_process() -> Self {
        EnvConfig::from_lookup(|key| env::var(key).ok(), BuildMode::current())
    }

    pub fn from_lookup<F>(lookup: F, build_mode: BuildMode) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        EnvConfig {
            log_level: lookup(LOG_LEVEL_VAR),
            log_timestamp: lookup(LOG_TIMESTAMP_VAR),
            build_mode,
        }
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: level_from_env(self.log_level.as_deref(), self.build_mode),
            timestamp: self.log_timestamp.as_deref() != Some("false"),
            prefix: None,
        }
    }
}

/// Recognized level names win; anything else falls back to the build mode default.
pub fn level_from_env(value: Option<&str>, build_mode: BuildMode) -> LogLevel {
    value
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| build_mode.default_level())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_level_recognized_any_case() {
        for mode in [BuildMode::Development, BuildMode::Production] {
            assert_eq!(level_from_env(Some("ERROR"), mode), LogLevel::Error);
            assert_eq!(level_from_env(Some("eRrOr"), mode), LogLevel::Error);
            assert_eq!(level_from_env(Some("info"), mode), LogLevel::Info);
            assert_eq!(level_from_env(Some("Debug"), mode), LogLevel::Debug);
        }
    }

    #[test]
    fn test_level_fallback() {
        assert_eq!(
            level_from_env(Some("verbose"), BuildMode::Production),
            LogLevel::Info
        );
        assert_eq!(
            level_from_env(Some("verbose"), BuildMode::Development),
            LogLevel::Debug
        );
        assert_eq!(level_from_env(None, BuildMode::Production), LogLevel::Info);
        assert_eq!(level_from_env(Some(""), BuildMode::Development), LogLevel::Debug);
        assert_eq!(
            level_from_env(Some(" error "), BuildMode::Production),
            LogLevel::Info
        );
    }

    #[test]
    fn test_timestamp_only_disabled_by_literal_false() {
        let ts = |raw: &str| {
            EnvConfig::from_lookup(lookup_from(&[(LOG_TIMESTAMP_VAR, raw)]), BuildMode::Production)
                .logger_config()
                .timestamp
        };
        assert!(!ts("false"));
        assert!(ts("FALSE"));
        assert!(ts("0"));
        assert!(ts("true"));
        assert!(ts(""));
    }

    #[test]
    fn test_empty_environment() {
        let env = EnvConfig::from_lookup(lookup_from(&[]), BuildMode::Development);
        assert_eq!(
            env.logger_config(),
            LoggerConfig {
                level: LogLevel::Debug,
                timestamp: true,
                prefix: None,
            }
        );
    }

    #[test]
    fn test_from_lookup() {
        let env = EnvConfig::from_lookup(
            lookup_from(&[(LOG_LEVEL_VAR, "error"), (LOG_TIMESTAMP_VAR, "false")]),
            BuildMode::Production,
        );
        assert_eq!(env.log_level.as_deref(), Some("error"));
        let config = env.logger_config();
        assert_eq!(config.level, LogLevel::Error);
        assert!(!config.timestamp);
        assert_eq!(config.prefix, None);
    }

    #[test]
    fn test_build_mode() {
        assert_eq!(BuildMode::Production.to_string(), "production");
        assert!(BuildMode::Production.is_production());
        assert!(!BuildMode::Development.is_production());
        assert_eq!(
            BuildMode::current().is_production(),
            !cfg!(debug_assertions)
        );
    }
}
