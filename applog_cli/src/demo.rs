//! Small collaborators that log through child loggers.
use applog_core::Logger;
use serde_json::json;

pub fn greet<L: Logger>(log: &L, name: &str) -> String {
    log.debug("Rendering greeting", Some(&json!({ "name": name })));
    format!("Hello, {}!", name)
}

pub struct Counter<L> {
    count: i64,
    log: L,
}

impl<L: Logger> Counter<L> {
    pub fn new(log: L) -> Self {
        log.debug("Counter mounted", Some(&json!({ "count": 0 })));
        Counter { count: 0, log }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.set(self.count + 1);
    }

    pub fn decrement(&mut self) {
        self.set(self.count - 1);
    }

    pub fn reset(&mut self) {
        self.set(0);
    }

    fn set(&mut self, to: i64) {
        self.log
            .debug("Count changed", Some(&json!({ "from": self.count, "to": to })));
        self.count = to;
    }
}
