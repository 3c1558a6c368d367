// Console Logger
//
// Logger that writes to stderr, tagged with the name of the component logging.

use super::logger::{LogLevel, Logger};

/// Console logger.
pub struct ConsoleLogger {
    name: String,
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(name: impl Into<String>, level: LogLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    // stdout is reserved for reports, so every level goes to stderr.
    fn log(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            eprintln!("[{}] {}: {}", level, self.name, msg);
        }
    }
}
