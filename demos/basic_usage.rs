//! Basic logger factory usage example
//!
//! Builds a logger from `LOG_*` environment variables (falling back to the
//! defaults), derives request-scoped handles and logs at each level.
//!
//! Run with: LOG_LEVEL=debug LOG_FORMAT=fluentd cargo run --example basic_usage

use rust_log_factory::prelude::*;
use rust_log_factory::{defaults, fields, info};

fn main() -> Result<()> {
    println!("=== Rust Log Factory - Basic Usage Example ===\n");

    let logger = defaults::from_env()?.with_fields(fields! { "app" => "basic_usage" });

    println!(
        "1. Resolved level={} format={}:",
        logger.min_level(),
        logger.output_format()
    );
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Derived handles carry extra fields:");
    let request = logger.with_fields(fields! { "request_id" => "abc-123", "user" => 42 });
    info!(request, "Handled request in {}ms", 17);
    logger.info("The base logger is unchanged");

    println!("\n3. Propagating the configuration to the global backend:");
    let global = defaults::init_global_from_env()?;
    global.info("Logged through the shared default backend");

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
