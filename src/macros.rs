//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The recorded
//! source location is the macro call site.
//!
//! # Examples
//!
//! ```
//! use rust_log_factory::prelude::*;
//! use rust_log_factory::info;
//!
//! let logger = Logger::global();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_log_factory::prelude::*;
/// # let logger = Logger::global();
/// use rust_log_factory::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_factory::prelude::*;
/// # let logger = Logger::global();
/// use rust_log_factory::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Build a `Fields` value from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_log_factory::fields;
///
/// let fields = fields! { "service" => "api", "shard" => 3 };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Fields::new()$(.with_field($key, $value))+
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::MemoryAppender;
    use crate::{Fields, LoggerFactory};

    fn capture() -> (crate::Logger, MemoryAppender) {
        let appender = MemoryAppender::new();
        let factory = LoggerFactory {
            level: "debug".to_string(),
            format: "json".to_string(),
            ..Default::default()
        };
        let logger = factory
            .build_with_appender(Fields::new(), appender.clone())
            .unwrap();
        (logger, appender)
    }

    #[test]
    fn test_level_macros() {
        let (logger, appender) = capture();

        debug!(logger, "Debug {}", 1);
        info!(logger, "Info {}", 2);
        warn!(logger, "Warn {}", 3);
        error!(logger, "Error {}", 4);

        let levels: Vec<String> = appender
            .json_records()
            .iter()
            .map(|r| r["level"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(levels, ["debug", "info", "warning", "error"]);
    }

    #[test]
    fn test_log_macro_formats_message() {
        let (logger, appender) = capture();

        log!(logger, crate::LogLevel::Info, "User {} performed {}", 42, "login");

        assert_eq!(appender.json_records()[0]["msg"], "User 42 performed login");
    }

    #[test]
    fn test_macro_records_call_site() {
        let (logger, appender) = capture();

        let line = line!() + 1;
        info!(logger, "here");

        let source = appender.json_records()[0]["source"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(source.ends_with(&format!("macros.rs:{}", line)), "{}", source);
    }

    #[test]
    fn test_fields_macro() {
        let empty = fields! {};
        assert!(empty.is_empty());

        let fields = fields! { "a" => 1, "b" => "two", };
        assert_eq!(fields.get("b"), Some(&serde_json::json!("two")));
    }
}
