//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// Destination for rendered records
///
/// A backend owns exactly one appender and serializes calls to it, so
/// implementations need no locking of their own.
pub trait Appender: Send {
    /// Write one rendered record; `line` carries no trailing newline
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
