use crate::level::LogLevel;
use std::io::{self, Write};

pub mod memory;

pub use memory::MemorySink;

/// Line-oriented destination for formatted log output.
///
/// Each severity is its own channel; implementors pick where each one goes.
/// Writes are fire-and-forget and must not panic.
pub trait Sink {
    fn write_line(&self, level: LogLevel, line: &str);

    fn flush(&self) {}
}

/// Standard streams: errors and debug output on stderr, info on stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Console;

impl Sink for Console {
    fn write_line(&self, level: LogLevel, line: &str) {
        // Write failures are dropped.
        let _ = match level {
            LogLevel::Error | LogLevel::Debug => writeln!(io::stderr().lock(), "{}", line),
            LogLevel::Info => writeln!(io::stdout().lock(), "{}", line),
        };
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
