//! Core logger types and traits

pub mod attr;
pub mod buffer_pool;
pub mod encoder;
pub mod error;
pub mod level;
pub mod logger;
pub mod metrics;

pub use attr::{Attr, AttrValue};
pub use buffer_pool::{BufferPool, DEFAULT_BUFFER_CAPACITY, DEFAULT_POOL_CAPACITY};
pub use error::{LoggerError, Result};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
