//! Appender over any `io::Write`

use crate::core::{Appender, LogLevel, Result};
use std::io::{BufWriter, Write};

/// Writes each record as one line to a buffered writer
///
/// Suitable for files, pipes or sockets the caller has already opened.
///
/// # Example
///
/// ```no_run
/// use rust_log_factory::appenders::WriterAppender;
/// use std::fs::OpenOptions;
///
/// let file = OpenOptions::new().create(true).append(true).open("app.log").unwrap();
/// let appender = WriterAppender::new(file);
/// ```
pub struct WriterAppender<W: Write + Send> {
    writer: BufWriter<W>,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, _level: LogLevel, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
