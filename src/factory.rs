//! Logger factory
//!
//! Turns loosely specified string settings, typically read from command line
//! flags or environment variables, into a validated logger.
//!
//! Resolution rules:
//! - `level`: empty means `info`, otherwise one of `debug`, `info`,
//!   `warning`, `error` in any case.
//! - `format`: empty means `json` when stdout is not a terminal and
//!   `force_format` is unset, `text` otherwise. A non-empty value must be one
//!   of `text`, `json`, `fluentd` in any case.
//! - `time_format`: empty means the microsecond stamp, otherwise a preset
//!   name or a strftime pattern.
//! - `fields`: empty means none, otherwise a JSON object.
//!
//! Invalid non-empty values are always errors; defaults only replace empty
//! values.

use crate::appenders::ConsoleAppender;
use crate::core::{
    Appender, Backend, Fields, Formatter, LogLevel, Logger, OutputFormat, Result,
    TimestampFormat,
};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::sync::Arc;

/// Level used when `level` is empty
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Format used when `format` is empty and the output is interactive
pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::Text;

/// Format used when `format` is empty and stdout is not a terminal
pub const DEFAULT_MACHINE_FORMAT: OutputFormat = OutputFormat::Json;

pub const LEVEL_ENV: &str = "LOG_LEVEL";
pub const FORMAT_ENV: &str = "LOG_FORMAT";
pub const TIME_FORMAT_ENV: &str = "LOG_TIME_FORMAT";
pub const FIELDS_ENV: &str = "LOG_FIELDS";
pub const FORCE_FORMAT_ENV: &str = "LOG_FORCE_FORMAT";

/// String configuration for building loggers
///
/// # Example
///
/// ```
/// use rust_log_factory::{Fields, LoggerFactory, LogLevel, OutputFormat};
///
/// let factory = LoggerFactory {
///     level: "DEBUG".to_string(),
///     format: "json".to_string(),
///     fields: r#"{"service":"api"}"#.to_string(),
///     ..Default::default()
/// };
///
/// let logger = factory.build(Fields::new().with_field("shard", 3)).unwrap();
/// assert_eq!(logger.min_level(), LogLevel::Debug);
/// assert_eq!(logger.output_format(), OutputFormat::Json);
/// assert_eq!(logger.fields().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerFactory {
    /// One of "debug", "info", "warning" or "error"; empty means "info"
    pub level: String,
    /// One of "text", "json" or "fluentd"; empty picks by terminal detection
    pub format: String,
    /// Preset name or strftime pattern; empty means `Jan _2 15:04:05.000000`
    pub time_format: String,
    /// Static fields as a JSON object
    pub fields: String,
    /// Ignore terminal detection when defaulting the format
    pub force_format: bool,
}

/// Fully validated settings produced by `LoggerFactory::resolve`
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub level: LogLevel,
    pub format: OutputFormat,
    pub timestamp_format: TimestampFormat,
    pub fields: Fields,
}

impl ResolvedConfig {
    pub fn formatter(&self) -> Formatter {
        Formatter::for_format(self.format, self.timestamp_format.clone())
    }
}

impl LoggerFactory {
    /// Read the configuration from `LOG_LEVEL`, `LOG_FORMAT`,
    /// `LOG_TIME_FORMAT`, `LOG_FIELDS` and `LOG_FORCE_FORMAT`
    ///
    /// Unset variables leave the corresponding setting empty, so the usual
    /// defaults apply.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup(LEVEL_ENV).unwrap_or_default(),
            format: lookup(FORMAT_ENV).unwrap_or_default(),
            time_format: lookup(TIME_FORMAT_ENV).unwrap_or_default(),
            fields: lookup(FIELDS_ENV).unwrap_or_default(),
            force_format: lookup(FORCE_FORMAT_ENV)
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Build a logger writing to stdout
    ///
    /// The logger's fields are the parsed `fields` JSON overlaid with
    /// `initial_fields`: on a key collision the explicitly passed value wins,
    /// the same rule `Logger::with_fields` applies.
    pub fn build(&self, initial_fields: Fields) -> Result<Logger> {
        self.build_with_appender(initial_fields, ConsoleAppender::new())
    }

    /// Build a logger writing to the given appender
    pub fn build_with_appender<A>(&self, initial_fields: Fields, appender: A) -> Result<Logger>
    where
        A: Appender + 'static,
    {
        let config = self.resolve()?;
        let backend = Backend::new(config.level, config.formatter(), Box::new(appender));
        let fields = config.fields.merged(&initial_fields);

        Ok(Logger::new(Arc::new(backend), fields))
    }

    /// Apply level and format to the process-wide backend
    ///
    /// Lets code that logs through `Logger::global()` pick up the same
    /// configuration. The `fields` setting is not validated or applied here.
    /// Callers must not race this against itself; records emitted while it
    /// runs see either the old or the new settings.
    pub fn apply_to_global(&self) -> Result<()> {
        self.apply_to(&Backend::global())
    }

    /// Apply level and format to an existing backend
    ///
    /// Everything is validated before the backend is touched, so a failure
    /// leaves it unchanged.
    pub fn apply_to(&self, backend: &Backend) -> Result<()> {
        let level = self.resolve_level()?;
        let format = self.resolve_format(stdout_is_terminal())?;
        let timestamp_format = self.resolve_time_format()?;

        backend.reconfigure(level, Formatter::for_format(format, timestamp_format));
        Ok(())
    }

    /// Validate every setting, detecting the terminal on stdout
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.resolve_with_terminal(stdout_is_terminal())
    }

    /// Validate every setting with an explicit terminal flag
    ///
    /// Fields are parsed last.
    pub fn resolve_with_terminal(&self, is_terminal: bool) -> Result<ResolvedConfig> {
        let level = self.resolve_level()?;
        let format = self.resolve_format(is_terminal)?;
        let timestamp_format = self.resolve_time_format()?;
        let fields = self.resolve_fields()?;

        Ok(ResolvedConfig {
            level,
            format,
            timestamp_format,
            fields,
        })
    }

    pub fn resolve_level(&self) -> Result<LogLevel> {
        if self.level.is_empty() {
            return Ok(DEFAULT_LEVEL);
        }
        self.level.parse()
    }

    pub fn resolve_format(&self, is_terminal: bool) -> Result<OutputFormat> {
        if self.format.is_empty() {
            return Ok(if !self.force_format && !is_terminal {
                DEFAULT_MACHINE_FORMAT
            } else {
                DEFAULT_FORMAT
            });
        }
        self.format.parse()
    }

    pub fn resolve_time_format(&self) -> Result<TimestampFormat> {
        TimestampFormat::resolve(&self.time_format)
    }

    pub fn resolve_fields(&self) -> Result<Fields> {
        if self.fields.is_empty() {
            return Ok(Fields::new());
        }
        Fields::from_json(&self.fields)
    }
}

fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}
