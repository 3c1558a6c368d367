// Logger Interface
//
// Logger trait definition.

use std::fmt;

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(tag)
    }
}

/// Logger trait.
///
/// Plugins receive a `&dyn Logger` from the compilation; none of them print
/// directly.
pub trait Logger {
    fn level(&self) -> LogLevel;
    fn log(&self, level: LogLevel, msg: &str);

    fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }
    fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }
    fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }
    fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }
}

/// Null logger (logs nothing).
pub struct NullLogger;

impl NullLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for NullLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Error
    }
    fn log(&self, _level: LogLevel, _msg: &str) {}
}
