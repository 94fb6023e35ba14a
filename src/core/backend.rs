//! Shared rendering and output engine
//!
//! A `Backend` holds the minimum level, the formatter and the appender.
//! Logger handles share one backend through an `Arc`; the appender mutex is
//! what serializes concurrent emission.

use super::{
    appender::Appender,
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    output_format::{Formatter, OutputFormat},
};
use crate::appenders::ConsoleAppender;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Arc<Backend>> = OnceLock::new();

pub struct Backend {
    min_level: RwLock<LogLevel>,
    formatter: RwLock<Formatter>,
    appender: Mutex<Box<dyn Appender>>,
}

impl Backend {
    #[must_use]
    pub fn new(min_level: LogLevel, formatter: Formatter, appender: Box<dyn Appender>) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            formatter: RwLock::new(formatter),
            appender: Mutex::new(appender),
        }
    }

    /// The process-wide default backend
    ///
    /// Created on first use with `info` level, the default text formatter
    /// and a stdout console appender. `LoggerFactory::apply_to_global`
    /// reconfigures it in place; records emitted concurrently with a
    /// reconfiguration use either the old or the new settings.
    pub fn global() -> Arc<Backend> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Backend::default())))
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    /// Snapshot of the current formatter
    pub fn formatter(&self) -> Formatter {
        self.formatter.read().clone()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.formatter.read().output_format()
    }

    /// Replace level and formatter together
    pub fn reconfigure(&self, min_level: LogLevel, formatter: Formatter) {
        let mut level_guard = self.min_level.write();
        let mut formatter_guard = self.formatter.write();
        *level_guard = min_level;
        *formatter_guard = formatter;
    }

    /// Swap the output destination, returning the previous appender
    pub fn set_appender(&self, appender: Box<dyn Appender>) -> Box<dyn Appender> {
        std::mem::replace(&mut *self.appender.lock(), appender)
    }

    /// Render and write an entry that already passed the level check
    ///
    /// Appender failures are reported on stderr and otherwise swallowed;
    /// emitting a record never fails from the caller's point of view.
    pub fn write(&self, entry: &LogEntry<'_>) {
        let line = self.formatter.read().format(entry);

        let mut appender = self.appender.lock();
        if let Err(e) = appender.append(entry.level, &line) {
            eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new(
            LogLevel::default(),
            Formatter::default(),
            Box::new(ConsoleAppender::new()),
        )
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend")
            .field("min_level", &self.min_level())
            .field("output_format", &self.output_format())
            .field("appender", &self.appender.lock().name())
            .finish()
    }
}
