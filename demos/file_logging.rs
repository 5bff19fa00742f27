//! File logging example
//!
//! Demonstrates appending JSON records to a log file.
//!
//! Run with: cargo run --example file_logging

use cascade_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Cascade Logger - File Logging Example ===\n");

    // Records append to the file, one JSON object per line
    let logger = Logger::new(FileSink::new("application.log")?, Level::Debug);

    println!("1. Logging application lifecycle to file:");
    logger.debug("application starting", &[]);
    logger.debug("configuration loaded", &[Attr::string("env", "production")]);
    logger.warning("using default settings", &[Attr::string("section", "cache")]);
    logger.debug("database connection established", &[]);

    println!("2. Performing some operations:");
    let worker = logger.branch(&[Attr::string("component", "worker")]);
    for i in 1..=5 {
        worker.debug("processing item", &[Attr::int("item", i), Attr::int("total", 5)]);
        if i == 3 {
            worker.warning("item took longer than expected", &[Attr::int("item", i)]);
        }
    }

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "plugin.so not found");
    logger.error("failed to load optional plugin", &[Attr::error(&err)]);
    logger.debug("all operations completed", &[]);

    // Flush buffered records to disk, then retire the lineage
    logger.flush()?;
    logger.release();

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the JSON records");

    Ok(())
}
