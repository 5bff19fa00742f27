//! # Cascade Logger
//!
//! A low-allocation structured JSON logger with pooled buffers and
//! cascading context.
//!
//! ## Features
//!
//! - **Low Allocation**: backing buffers are recycled through a bounded
//!   pool and records are encoded by a hand-rolled append-only serializer
//! - **Cascading Context**: attributes attached via branching are
//!   serialized once and shared by every record of the lineage
//! - **Never Fails the Caller**: sink write failures are reported on a
//!   diagnostic channel; every logging call is total
//! - **Thread Safe**: independent lineages may race freely; aliases of one
//!   lineage are serialized by a mutex around the shared buffer
//!
//! ## Example
//!
//! ```
//! use cascade_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone(), Level::Debug);
//!
//! let request_logger = logger.branch(&[
//!     Attr::string("request_id", "abc-123"),
//!     Attr::int("attempt", 1),
//! ]);
//! request_logger.error("something went wrong", &[Attr::int("count", 2)]);
//!
//! logger.release();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Attr, AttrValue, BufferPool, Level, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        Result,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, Sink};
}

pub use crate::core::{
    Attr, AttrValue, BufferPool, Level, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result,
};
pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, Sink};
