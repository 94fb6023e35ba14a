//! Output formats and the formatters that render them
//!
//! - Text: aligned, colored, human-readable lines
//! - Json: one JSON object per line (`time`, `level`, `msg`)
//! - Fluentd: one JSON object per line with collector-friendly keys
//!   (`time`, `severity`, `message`)

use super::error::LoggerError;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format selected by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default on a terminal)
    ///
    /// Example: `[Jan  8 10:30:45.123456] INFO    main.rs:12: Request processed user=42`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"level":"info","msg":"Request processed","time":"Jan  8 10:30:45.123456"}`
    Json,

    /// JSON with `severity`/`message` keys, as expected by fluentd collectors
    ///
    /// Example: `{"message":"Request processed","severity":"info","time":"Jan  8 10:30:45.123456"}`
    Fluentd,
}

impl OutputFormat {
    /// Names accepted by `FromStr`
    pub const NAMES: [&'static str; 3] = ["text", "json", "fluentd"];

    pub fn to_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Fluentd => "fluentd",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for OutputFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "fluentd" => Ok(OutputFormat::Fluentd),
            _ => Err(LoggerError::invalid_format(s, &Self::NAMES)),
        }
    }
}

/// Key under which the caller location is recorded
pub const SOURCE_KEY: &str = "source";

/// Key names used for the built-in parts of a structured record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKeys {
    pub time: &'static str,
    pub level: &'static str,
    pub message: &'static str,
}

impl FieldKeys {
    pub const JSON: FieldKeys = FieldKeys {
        time: "time",
        level: "level",
        message: "msg",
    };

    pub const FLUENTD: FieldKeys = FieldKeys {
        time: "time",
        level: "severity",
        message: "message",
    };

    fn is_reserved(&self, key: &str) -> bool {
        key == self.time || key == self.level || key == self.message || key == SOURCE_KEY
    }
}

/// Renders entries as colored `key=value` text lines
///
/// Colors are always emitted: the escape code comes from the level's
/// `colored::Color` and is written directly, so the process-wide
/// `colored::control` override is left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormatter {
    pub timestamp_format: TimestampFormat,
}

impl TextFormatter {
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self { timestamp_format }
    }

    fn paint(text: &str, level: LogLevel) -> String {
        format!("\x1b[{}m{}\x1b[0m", level.color_code().to_fg_str(), text)
    }

    pub fn format(&self, entry: &LogEntry<'_>) -> String {
        let mut line = format!(
            "[{}] {} ",
            self.timestamp_format.format(&entry.timestamp),
            Self::paint(&format!("{:7}", entry.level.tag()), entry.level)
        );

        if let Some(source) = entry.source() {
            line.push_str(&source);
            line.push_str(": ");
        }
        line.push_str(&entry.message);

        if !entry.fields.is_empty() {
            line.push(' ');
            entry
                .fields
                .write_pairs(&mut line, |key| Self::paint(key, entry.level));
        }

        line
    }
}

/// Renders entries as single-line JSON objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormatter {
    pub timestamp_format: TimestampFormat,
    pub keys: FieldKeys,
}

impl JsonFormatter {
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self {
            timestamp_format,
            keys: FieldKeys::JSON,
        }
    }

    pub fn fluentd(timestamp_format: TimestampFormat) -> Self {
        Self {
            timestamp_format,
            keys: FieldKeys::FLUENTD,
        }
    }

    pub fn format(&self, entry: &LogEntry<'_>) -> String {
        let mut json_obj = serde_json::Map::new();

        // Context fields first so built-in keys cannot be overwritten;
        // clashing context keys move under a `fields.` prefix
        for (key, value) in entry.fields {
            let key = if self.keys.is_reserved(key) {
                format!("fields.{}", key)
            } else {
                key.clone()
            };
            json_obj.insert(key, value.clone());
        }

        json_obj.insert(
            self.keys.time.to_string(),
            self.timestamp_format.to_json_value(&entry.timestamp),
        );
        json_obj.insert(
            self.keys.level.to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert(
            self.keys.message.to_string(),
            serde_json::Value::String(entry.message.clone()),
        );
        if let Some(source) = entry.source() {
            json_obj.insert(SOURCE_KEY.to_string(), serde_json::Value::String(source));
        }

        serde_json::Value::Object(json_obj).to_string()
    }
}

/// The closed set of formatters a backend can use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatter {
    Text(TextFormatter),
    Json(JsonFormatter),
}

impl Formatter {
    /// Select and parametrize the formatter for an output format
    pub fn for_format(format: OutputFormat, timestamp_format: TimestampFormat) -> Self {
        match format {
            OutputFormat::Text => Formatter::Text(TextFormatter::new(timestamp_format)),
            OutputFormat::Json => Formatter::Json(JsonFormatter::new(timestamp_format)),
            OutputFormat::Fluentd => Formatter::Json(JsonFormatter::fluentd(timestamp_format)),
        }
    }

    pub fn format(&self, entry: &LogEntry<'_>) -> String {
        match self {
            Formatter::Text(text) => text.format(entry),
            Formatter::Json(json) => json.format(entry),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        match self {
            Formatter::Text(_) => OutputFormat::Text,
            Formatter::Json(json) if json.keys == FieldKeys::FLUENTD => OutputFormat::Fluentd,
            Formatter::Json(_) => OutputFormat::Json,
        }
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        match self {
            Formatter::Text(text) => &text.timestamp_format,
            Formatter::Json(json) => &json.timestamp_format,
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::for_format(OutputFormat::default(), TimestampFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Fields;

    fn render(format: OutputFormat, level: LogLevel, message: &str, fields: &Fields) -> String {
        let entry = LogEntry::new(level, message.to_string(), fields);
        Formatter::for_format(format, TimestampFormat::Iso8601).format(&entry)
    }

    #[test]
    fn test_parse_any_case() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("fluentD".parse::<OutputFormat>().unwrap(), OutputFormat::Fluentd);
    }

    #[test]
    fn test_parse_invalid_lists_names() {
        let err = "qux".parse::<OutputFormat>().unwrap_err().to_string();
        for name in OutputFormat::NAMES {
            assert!(err.contains(name), "{}", err);
        }
    }

    #[test]
    fn test_text_format() {
        let fields = Fields::new();
        let result = render(OutputFormat::Text, LogLevel::Info, "Test message", &fields);

        assert!(result.contains("INFO"));
        assert!(result.contains("Test message"));
        assert!(result.starts_with('['));
    }

    #[test]
    fn test_text_format_forces_ansi() {
        let fields = Fields::new();
        let result = render(OutputFormat::Text, LogLevel::Error, "boom", &fields);
        assert!(result.contains("\x1b["));
    }

    #[test]
    fn test_text_format_with_fields() {
        let fields = Fields::new()
            .with_field("user_id", 123)
            .with_field("action", "log in");

        let result = render(OutputFormat::Text, LogLevel::Info, "User logged in", &fields);

        assert!(result.contains("User logged in"));
        assert!(result.contains("=123"));
        assert!(result.contains("=\"log in\""));
        assert!(result.find("action").unwrap() < result.find("user_id").unwrap());
    }

    #[test]
    fn test_text_fields_match_display_once_unpainted() {
        let fields = Fields::new()
            .with_field("user", "jane doe")
            .with_field("id", 7);
        let result = render(OutputFormat::Text, LogLevel::Warning, "hi", &fields);

        let code = format!("\x1b[{}m", LogLevel::Warning.color_code().to_fg_str());
        let plain = result.replace(&code, "").replace("\x1b[0m", "");
        assert!(plain.ends_with(&format!("hi {}", fields)), "{}", plain);
    }

    #[test]
    fn test_json_format() {
        let fields = Fields::new();
        let result = render(OutputFormat::Json, LogLevel::Error, "Error occurred", &fields);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "error");
        assert_eq!(parsed["msg"], "Error occurred");
        assert!(parsed["time"].is_string());
    }

    #[test]
    fn test_fluentd_format_renames_keys() {
        let fields = Fields::new();
        let result = render(OutputFormat::Fluentd, LogLevel::Warning, "something", &fields);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["severity"], "warning");
        assert_eq!(parsed["message"], "something");
        assert!(parsed.get("level").is_none());
        assert!(parsed.get("msg").is_none());
    }

    #[test]
    fn test_json_format_with_fields() {
        let fields = Fields::new()
            .with_field("request_id", "abc-123")
            .with_field("latency_ms", 42);

        let result = render(OutputFormat::Json, LogLevel::Info, "Request completed", &fields);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["request_id"], "abc-123");
        assert_eq!(parsed["latency_ms"], 42);
    }

    #[test]
    fn test_json_reserved_keys_are_prefixed() {
        let fields = Fields::new()
            .with_field("msg", "shadow")
            .with_field("level", "shadow");

        let result = render(OutputFormat::Json, LogLevel::Info, "real", &fields);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["msg"], "real");
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["fields.msg"], "shadow");
        assert_eq!(parsed["fields.level"], "shadow");
    }

    #[test]
    fn test_formatter_reports_output_format() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Fluentd] {
            let formatter = Formatter::for_format(format, TimestampFormat::default());
            assert_eq!(formatter.output_format(), format);
        }
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
