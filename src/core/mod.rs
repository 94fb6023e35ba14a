//! Core logger types and traits

pub mod appender;
pub mod backend;
pub mod error;
pub mod fields;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod timestamp;

pub use appender::Appender;
pub use backend::Backend;
pub use error::{LoggerError, Result};
pub use fields::Fields;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use output_format::{FieldKeys, Formatter, JsonFormatter, OutputFormat, TextFormatter};
pub use timestamp::TimestampFormat;
