//! Sink implementations
//!
//! A sink is the destination for fully serialized records. The core hands
//! each record to [`Sink::write`] as one complete byte range; line-oriented
//! sinks add their own trailing newline.

pub mod console;
pub mod file;
pub mod memory;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;

use crate::core::error::Result;

/// Destination for serialized log records.
pub trait Sink: Send {
    /// Write one complete serialized record.
    fn write(&mut self, record: &[u8]) -> Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
