//! Environment-configured loggers
//!
//! Applications that take their logging settings from the environment can
//! build a logger in one call:
//!
//! ```no_run
//! let logger = rust_log_factory::defaults::from_env().expect("invalid LOG_* settings");
//! logger.info("started");
//! ```

use crate::core::{Fields, Logger, Result};
use crate::factory::LoggerFactory;

/// Build a stdout logger from the `LOG_*` environment variables
pub fn from_env() -> Result<Logger> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Like `from_env`, reading variables through `lookup`
pub fn from_lookup<F>(lookup: F) -> Result<Logger>
where
    F: Fn(&str) -> Option<String>,
{
    LoggerFactory::from_lookup(lookup).build(Fields::new())
}

/// Handle on the process-wide backend, without fields
pub fn global() -> Logger {
    Logger::global()
}

/// Configure the process-wide backend from the `LOG_*` environment variables
/// and return a handle on it
pub fn init_global_from_env() -> Result<Logger> {
    LoggerFactory::from_env().apply_to_global()?;
    Ok(global())
}
