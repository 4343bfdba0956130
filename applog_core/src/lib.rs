#![forbid(unsafe_code)]
pub mod config;
pub mod env;
pub mod facade;
pub mod level;
pub mod logger;
pub mod sink;
pub mod time;
pub mod utils;

pub use config::{LoggerConfig, LoggerConfigError};
pub use env::{BuildMode, EnvConfig};
pub use level::LogLevel;
pub use logger::{logger, AppLogger, Logger};
pub use sink::{Console, MemorySink, Sink};
