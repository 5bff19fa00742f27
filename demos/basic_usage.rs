//! Basic logger usage example
//!
//! Demonstrates leveled JSON logging to the console with branched context.
//!
//! Run with: cargo run --example basic_usage

use cascade_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Cascade Logger - Basic Usage Example ===\n");

    // Create a logger that writes JSON records to stdout
    let logger = Logger::new(ConsoleSink::new(), Level::Debug);

    // Log messages at different levels
    println!("1. Logging at different levels:");
    logger.error("this is an error message", &[]);
    logger.warning("this is a warning message", &[]);
    logger.debug("this is a debug message", &[]);

    // Attach ad hoc attributes to a single record
    println!("\n2. Logging with attributes:");
    logger.error(
        "request failed",
        &[
            Attr::int("status", 502),
            Attr::string("path", "/api/orders"),
            Attr::float("elapsed_ms", 12.5),
        ],
    );

    // Branch: the context is serialized once and shared by every
    // record emitted through the branched handle
    println!("\n3. Branched context:");
    let request_logger = logger.branch(&[
        Attr::string("request_id", "abc-123"),
        Attr::int("attempt", 1),
    ]);
    request_logger.debug("handling request", &[]);
    request_logger.warning("retrying upstream", &[Attr::int("backoff_ms", 250)]);

    // A logger with a higher threshold filters quieter records
    println!("\n4. Threshold filtering (only the error shows):");
    let quiet = Logger::new(ConsoleSink::new(), Level::Error);
    quiet.debug("hidden", &[]);
    quiet.warning("hidden", &[]);
    quiet.error("visible", &[]);
    quiet.release();

    // Return the pooled buffer; every alias of the lineage goes inert
    logger.release();

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
