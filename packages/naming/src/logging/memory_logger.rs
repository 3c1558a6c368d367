// Memory Logger
//
// Logger that keeps every record, used to assert on diagnostics.

use std::cell::RefCell;

use super::logger::{LogLevel, Logger};

/// Collects log records in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RefCell<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.borrow().clone()
    }

    /// Messages logged at exactly `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Logger for MemoryLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Debug
    }

    fn log(&self, level: LogLevel, msg: &str) {
        self.records.borrow_mut().push((level, msg.to_string()));
    }
}
