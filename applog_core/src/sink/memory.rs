use super::Sink;
use crate::level::LogLevel;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: LogLevel,
    pub line: String,
}

/// Capturing sink.
///
/// Clones share one buffer, so a logger and all of its children write to the same capture.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    pub fn captured(&self) -> Vec<CapturedLine> {
        self.buffer().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer().iter().map(|c| c.line.clone()).collect()
    }

    pub fn lines_at(&self, level: LogLevel) -> Vec<String> {
        self.buffer()
            .iter()
            .filter(|c| c.level == level)
            .map(|c| c.line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    // A panicking writer cannot leave a half-pushed line behind.
    fn buffer(&self) -> MutexGuard<'_, Vec<CapturedLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write_line(&self, level: LogLevel, line: &str) {
        self.buffer().push(CapturedLine {
            level,
            line: String::from(line),
        });
    }
}
