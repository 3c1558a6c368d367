// Logging Tests
//
// Tests for the logging module.

#[cfg(test)]
mod tests {
    use crate::logging::*;

    mod log_level_tests {
        use super::*;

        #[test]
        fn should_have_correct_ordering() {
            assert!(LogLevel::Debug < LogLevel::Info);
            assert!(LogLevel::Info < LogLevel::Warn);
            assert!(LogLevel::Warn < LogLevel::Error);
        }

        #[test]
        fn should_display_upper_case_tags() {
            assert_eq!(LogLevel::Warn.to_string(), "WARN");
            assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
        }
    }

    mod console_logger_tests {
        use super::*;

        #[test]
        fn should_create_with_name_and_level() {
            let logger = ConsoleLogger::new("PreserveModuleNamePlugin", LogLevel::Warn);
            assert_eq!(logger.level(), LogLevel::Warn);
            assert_eq!(logger.name(), "PreserveModuleNamePlugin");
        }

        #[test]
        fn should_check_level_enabled() {
            let logger = ConsoleLogger::new("test", LogLevel::Warn);

            assert!(!logger.is_enabled(LogLevel::Debug));
            assert!(!logger.is_enabled(LogLevel::Info));
            assert!(logger.is_enabled(LogLevel::Warn));
            assert!(logger.is_enabled(LogLevel::Error));
        }
    }

    mod memory_logger_tests {
        use super::*;

        #[test]
        fn should_keep_records_in_order() {
            let logger = MemoryLogger::new();
            logger.debug("first");
            logger.warn("second");
            logger.debug("third");

            assert_eq!(logger.records().len(), 3);
            assert_eq!(logger.messages(LogLevel::Debug), vec!["first", "third"]);
            assert_eq!(logger.messages(LogLevel::Warn), vec!["second"]);
        }
    }

    mod null_logger_tests {
        use super::*;

        #[test]
        fn should_not_log_anything() {
            let logger = NullLogger::new();

            logger.debug("debug message");
            logger.warn("warn message");
            assert_eq!(logger.level(), LogLevel::Error);
        }
    }
}
