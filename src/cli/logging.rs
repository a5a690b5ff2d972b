//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels_are_distinct() {
        assert_ne!(LogLevel::Quiet, LogLevel::Normal);
        assert_ne!(LogLevel::Normal, LogLevel::Verbose);
    }

    #[test]
    fn test_log_does_not_panic() {
        log(LogLevel::Quiet, LogLevel::Normal, "suppressed");
        log(LogLevel::Normal, LogLevel::Normal, "shown");
        log(LogLevel::Verbose, LogLevel::Verbose, "detail");
    }
}
