// Logging
//
// Logger trait and the loggers used by the naming plugins.

pub mod console_logger;
pub mod logger;
pub mod memory_logger;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger};
pub use memory_logger::MemoryLogger;

#[cfg(test)]
mod test;
