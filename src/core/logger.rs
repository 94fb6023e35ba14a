//! Logger handle
//!
//! A `Logger` is a shared backend plus an owned, immutable set of fields.
//! Handles are never mutated: `with_fields` returns a new handle whose
//! fields are a fresh copy of the parent's overlaid with the new entries.

use super::{
    backend::Backend,
    error::Result,
    fields::Fields,
    log_entry::LogEntry,
    log_level::LogLevel,
    output_format::OutputFormat,
};
use serde_json::Value;
use std::panic::Location;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Logger {
    backend: Arc<Backend>,
    fields: Fields,
}

impl Logger {
    /// Wrap a backend with an initial set of fields
    #[must_use]
    pub fn new(backend: Arc<Backend>, fields: Fields) -> Self {
        Self { backend, fields }
    }

    /// Handle on the process-wide backend, with no fields
    #[must_use]
    pub fn global() -> Self {
        Self::new(Backend::global(), Fields::new())
    }

    /// Derive a handle carrying additional fields
    ///
    /// New keys win over existing keys with the same name. `self` is left
    /// untouched, and siblings derived from the same parent never see each
    /// other's fields.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_log_factory::{Fields, Logger};
    ///
    /// let base = Logger::global();
    /// let request = base.with_fields(Fields::new().with_field("request_id", "abc"));
    ///
    /// assert!(base.fields().is_empty());
    /// assert_eq!(request.fields().len(), 1);
    /// ```
    #[must_use]
    pub fn with_fields(&self, fields: Fields) -> Logger {
        Logger {
            backend: Arc::clone(&self.backend),
            fields: self.fields.merged(&fields),
        }
    }

    /// Derive a handle carrying one additional field
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.with_fields(Fields::new().with_field(key, value))
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn backend(&self) -> &Arc<Backend> {
        &self.backend
    }

    pub fn min_level(&self) -> LogLevel {
        self.backend.min_level()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.backend.output_format()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.backend.is_enabled(level)
    }

    /// Emit a record if `level` passes the backend's minimum level
    ///
    /// Filtered records are dropped silently. The caller's source location
    /// is attached to every emitted record.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.backend.is_enabled(level) {
            return;
        }

        let entry =
            LogEntry::new(level, message.into(), &self.fields).with_location(Location::caller());
        self.backend.write(&entry);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn flush(&self) -> Result<()> {
        self.backend.flush()
    }
}
