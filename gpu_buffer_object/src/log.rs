//! Internal logging system for GPU buffer objects
//!
//! This module provides a small pluggable logging layer with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for detailed ERROR logs
//!
//! The active logger and the minimum severity are stored globally by
//! [`Diagnostics`](crate::gbo::Diagnostics).

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route buffer object diagnostics elsewhere
/// (a file, an in-game console, a test capture buffer, ...).
///
/// # Example
///
/// ```no_run
/// use gpu_buffer_object::gbo::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{} {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source (e.g., "gbo::BufferObject[positions]", "gbo::gl")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-call chatter (binds, uploads)
    Trace,

    /// Allocation and deletion of backend resources
    Debug,

    /// Important informational messages
    Info,

    /// Recoverable problems (rejected uploads, leaked handles)
    Warn,

    /// Backend failures (with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the default logger
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

/// Render `entry` with already styled severity and source fields
pub(crate) fn format_entry(
    entry: &LogEntry,
    severity: impl std::fmt::Display,
    source: impl std::fmt::Display,
) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

    match (entry.file, entry.line) {
        (Some(file), Some(line)) => format!(
            "[{}] [{}] [{}] {} ({}:{})",
            timestamp, severity, source, entry.message, file, line
        ),
        _ => format!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message),
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let severity = match entry.severity {
            LogSeverity::Trace => entry.severity.label().bright_black(),
            LogSeverity::Debug => entry.severity.label().cyan(),
            LogSeverity::Info => entry.severity.label().green(),
            LogSeverity::Warn => entry.severity.label().yellow(),
            LogSeverity::Error => entry.severity.label().red().bold(),
        };

        println!("{}", format_entry(entry, severity, entry.source.bright_blue()));
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```no_run
/// # use gpu_buffer_object::gbo_trace;
/// gbo_trace!("gbo::BufferObject", "bind handle {}", 3);
/// ```
#[macro_export]
macro_rules! gbo_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::gbo::Diagnostics::log(
            $crate::gbo::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! gbo_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::gbo::Diagnostics::log(
            $crate::gbo::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! gbo_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::gbo::Diagnostics::log(
            $crate::gbo::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! gbo_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::gbo::Diagnostics::log(
            $crate::gbo::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// ```no_run
/// # use gpu_buffer_object::gbo_error;
/// gbo_error!("gbo::gl", "glBufferData failed: {}", "GL_OUT_OF_MEMORY");
/// ```
#[macro_export]
macro_rules! gbo_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::gbo::Diagnostics::log_detailed(
            $crate::gbo::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
