//! Error types for the logger factory

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level string is not one of the known severities
    #[error("invalid level '{value}', valid levels are: {valid}")]
    InvalidLevel { value: String, valid: String },

    /// Format string is not one of the known output formats
    #[error("invalid format '{value}', valid formats are: {valid}")]
    InvalidFormat { value: String, valid: String },

    /// Time format is neither a preset name nor a usable strftime pattern
    #[error("invalid time format '{value}': {message}")]
    InvalidTimeFormat { value: String, message: String },

    /// Static fields payload is not a JSON object
    #[error("invalid fields: {0}")]
    InvalidFields(#[source] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid level error listing the accepted names
    pub fn invalid_level(value: impl Into<String>, valid: &[&str]) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
            valid: valid.join(", "),
        }
    }

    /// Create an invalid format error listing the accepted names
    pub fn invalid_format(value: impl Into<String>, valid: &[&str]) -> Self {
        LoggerError::InvalidFormat {
            value: value.into(),
            valid: valid.join(", "),
        }
    }

    pub fn invalid_time_format(value: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidTimeFormat {
            value: value.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("text", &["debug", "info"]);
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::invalid_format("qux", &["text", "json"]);
        assert!(matches!(err, LoggerError::InvalidFormat { .. }));

        let err: LoggerError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, LoggerError::IoError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("verbose", &["debug", "info", "warning", "error"]);
        assert_eq!(
            err.to_string(),
            "invalid level 'verbose', valid levels are: debug, info, warning, error"
        );

        let err = LoggerError::invalid_format("xml", &["text", "json", "fluentd"]);
        assert_eq!(
            err.to_string(),
            "invalid format 'xml', valid formats are: text, json, fluentd"
        );

        let err = LoggerError::invalid_time_format("%Q", "unknown specifier");
        assert_eq!(err.to_string(), "invalid time format '%Q': unknown specifier");
    }

    #[test]
    fn test_fields_error_keeps_source() {
        use std::error::Error;

        let parse_err = serde_json::from_str::<serde_json::Value>("qux").unwrap_err();
        let err = LoggerError::InvalidFields(parse_err);

        assert!(err.to_string().starts_with("invalid fields: "));
        assert!(err.source().is_some());
    }
}
