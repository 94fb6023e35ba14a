//! # Rust Log Factory
//!
//! A structured logging facade configured from plain strings.
//!
//! ## Features
//!
//! - **String Configuration**: level, format, time format and static fields
//!   straight from flags or `LOG_*` environment variables
//! - **Environment-Aware Defaults**: JSON when stdout is not a terminal,
//!   colored text when it is
//! - **Immutable Handles**: derived loggers copy and extend their parent's
//!   fields without touching it
//! - **Shared Backend**: every handle from one factory call writes through
//!   the same formatter and appender
//!
//! ```
//! use rust_log_factory::prelude::*;
//!
//! let factory = LoggerFactory {
//!     level: "info".to_string(),
//!     format: "fluentd".to_string(),
//!     ..Default::default()
//! };
//! let logger = factory.build(Fields::new()).unwrap();
//! logger.with_field("user", 42).warn("quota almost reached");
//! ```

pub mod appenders;
pub mod core;
pub mod defaults;
pub mod factory;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, Backend, Fields, Formatter, LogLevel, Logger, LoggerError, OutputFormat,
        Result, TimestampFormat,
    };
    pub use crate::factory::{LoggerFactory, ResolvedConfig};
}

pub use appenders::{ConsoleAppender, MemoryAppender, WriterAppender};
pub use core::{
    Appender, Backend, FieldKeys, Fields, Formatter, JsonFormatter, LogEntry, LogLevel, Logger,
    LoggerError, OutputFormat, Result, TextFormatter, TimestampFormat,
};
pub use factory::{LoggerFactory, ResolvedConfig};
