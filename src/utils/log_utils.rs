//! Logging utilities for the application
//!
//! Diagnostics go to stderr so that command output on stdout (album lists,
//! the website URL) can be piped.

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Always shown, no verbose flag needed
    Warn = 0,
    /// Info level, one verbose flag (-v)
    Info = 1,
    /// Debug level, two verbose flags (-v -v)
    Debug = 2,
}

/// Logger for application messages
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    /// Current verbosity level
    verbosity: u8,
}

impl Logger {
    /// Create a new logger with the specified verbosity
    #[must_use]
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Log a message if the current verbosity level is at least the specified level
    pub fn log(&self, msg: &str, level: LogLevel) {
        if self.enabled(level) {
            eprintln!("{}", format_line(msg, level));
        }
    }

    /// Log at warn level (always displayed)
    pub fn warn(&self, msg: &str) {
        self.log(msg, LogLevel::Warn);
    }

    /// Log at info level (verbose >= 1)
    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    /// Log at debug level (verbose >= 2)
    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }

    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.verbosity >= level as u8
    }
}

fn format_line(msg: &str, level: LogLevel) -> String {
    match level {
        LogLevel::Warn => format!("warn: {msg}"),
        LogLevel::Info => format!("info: {msg}"),
        LogLevel::Debug => format!("dbg: {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_gated_by_verbosity() {
        let quiet = Logger::new(0);
        assert!(quiet.enabled(LogLevel::Warn));
        assert!(!quiet.enabled(LogLevel::Info));

        let chatty = Logger::new(2);
        assert!(chatty.enabled(LogLevel::Info));
        assert!(chatty.enabled(LogLevel::Debug));
        assert!(!Logger::new(1).enabled(LogLevel::Debug));
    }

    #[test]
    fn lines_carry_level_prefix() {
        assert_eq!(format_line("x", LogLevel::Warn), "warn: x");
        assert_eq!(format_line("x", LogLevel::Debug), "dbg: x");
    }
}
