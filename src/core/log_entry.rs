//! Log entry structure

use super::fields::Fields;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::panic::Location;

/// A single record on its way to the formatter
///
/// Borrows the emitting logger's fields so filtering and rendering never
/// copy the context map.
#[derive(Debug, Clone)]
pub struct LogEntry<'a> {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub file: Option<&'static str>,
    pub line: Option<u32>,
    pub fields: &'a Fields,
}

impl<'a> LogEntry<'a> {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String, fields: &'a Fields) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: Utc::now(),
            file: None,
            line: None,
            fields,
        }
    }

    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.file = Some(location.file());
        self.line = Some(location.line());
        self
    }

    /// `file:line` of the call site, if known
    pub fn source(&self) -> Option<String> {
        match (self.file, self.line) {
            (Some(file), Some(line)) => Some(format!("{}:{}", file, line)),
            (Some(file), None) => Some(file.to_string()),
            _ => None,
        }
    }
}
