//! Timestamp formatting utilities
//!
//! Resolves the `time_format` configuration string into a `TimestampFormat`.
//! Preset names are matched case-insensitively; any other non-empty string is
//! treated as a strftime pattern and validated before use, since chrono
//! panics when rendering a malformed pattern. Validation renders a sample
//! date as well as parsing the pattern: some specifiers (`%#z`) parse but
//! cannot be written.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

/// strftime equivalent of the classic `Jan _2 15:04:05.000000` stamp
pub const STAMP_MICRO_PATTERN: &str = "%b %e %H:%M:%S%.6f";

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use rust_log_factory::TimestampFormat;
///
/// let format: TimestampFormat = "rfc3339".parse().unwrap();
/// assert_eq!(format, TimestampFormat::Rfc3339);
///
/// let custom: TimestampFormat = "%Y-%m-%d".parse().unwrap();
/// assert_eq!(custom, TimestampFormat::Custom("%Y-%m-%d".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Month, day and microsecond time: `Jan  8 10:30:45.123456`
    #[default]
    StampMicro,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format, validated on construction via `FromStr`
    Custom(String),
}

impl TimestampFormat {
    /// Preset names accepted by `FromStr`
    pub const PRESETS: [&'static str; 7] = [
        "stamp-micro",
        "iso8601",
        "iso8601-micros",
        "rfc3339",
        "unix",
        "unix-millis",
        "unix-micros",
    ];

    /// Resolve a configuration string, treating empty as the default
    pub fn resolve(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Ok(Self::default());
        }
        value.parse()
    }

    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::StampMicro => datetime.format(STAMP_MICRO_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    // Only reachable for a Custom built without FromStr
                    return datetime.to_rfc3339();
                }
                out
            }
        }
    }

    /// Render as a JSON value; numeric formats stay numbers
    #[must_use]
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::Unix => datetime.timestamp().into(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().into(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().into(),
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TimestampFormat::Unix | TimestampFormat::UnixMillis | TimestampFormat::UnixMicros
        )
    }
}

impl FromStr for TimestampFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let preset = match s.to_lowercase().as_str() {
            "stamp-micro" => Some(TimestampFormat::StampMicro),
            "iso8601" => Some(TimestampFormat::Iso8601),
            "iso8601-micros" => Some(TimestampFormat::Iso8601Micros),
            "rfc3339" => Some(TimestampFormat::Rfc3339),
            "unix" => Some(TimestampFormat::Unix),
            "unix-millis" => Some(TimestampFormat::UnixMillis),
            "unix-micros" => Some(TimestampFormat::UnixMicros),
            _ => None,
        };
        if let Some(preset) = preset {
            return Ok(preset);
        }

        if s.trim().is_empty() {
            return Err(LoggerError::invalid_time_format(s, "pattern is blank"));
        }
        if StrftimeItems::new(s).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::invalid_time_format(
                s,
                format!(
                    "not a strftime pattern or one of: {}",
                    Self::PRESETS.join(", ")
                ),
            ));
        }

        let sample = Utc.timestamp_opt(0, 0).single().unwrap_or_default();
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(s)).is_err() {
            return Err(LoggerError::invalid_time_format(
                s,
                "pattern contains a specifier that cannot be formatted",
            ));
        }

        Ok(TimestampFormat::Custom(s.to_string()))
    }
}
