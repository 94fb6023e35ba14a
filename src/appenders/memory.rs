//! In-memory appender for capturing output

use crate::core::{Appender, LogLevel, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every rendered line in a shared buffer
///
/// Clones share the same buffer, so one clone can be handed to a backend
/// while another is kept to inspect what was written.
///
/// # Example
///
/// ```
/// use rust_log_factory::appenders::MemoryAppender;
/// use rust_log_factory::LoggerFactory;
///
/// let capture = MemoryAppender::new();
/// let factory = LoggerFactory { level: "debug".into(), format: "json".into(), ..Default::default() };
/// let logger = factory.build_with_appender(Default::default(), capture.clone()).unwrap();
///
/// logger.info("hello");
/// assert_eq!(capture.lines().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Parse every captured line as JSON
    ///
    /// Lines that are not valid JSON are skipped.
    pub fn json_records(&self) -> Vec<serde_json::Value> {
        self.lines
            .lock()
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, _level: LogLevel, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
