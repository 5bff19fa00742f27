//! Logging macros for ergonomic record emission.
//!
//! Thin sugar over the level methods so attributes can be listed inline
//! without spelling out the slice.
//!
//! # Examples
//!
//! ```
//! use cascade_logger::prelude::*;
//! use cascade_logger::error;
//!
//! let logger = Logger::new(MemorySink::new(), Level::Debug);
//! error!(logger, "request failed", Attr::int("status", 502));
//! logger.release();
//! ```

/// Emit a record at an explicit level.
///
/// # Examples
///
/// ```
/// # use cascade_logger::prelude::*;
/// # let logger = Logger::new(MemorySink::new(), Level::Debug);
/// use cascade_logger::log;
/// log!(logger, Level::Warning, "resource low");
/// log!(logger, Level::Error, "error code", Attr::int("code", 500));
/// # logger.release();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $logger.emit($level, $msg, &[$($attr),*])
    };
}

/// Emit an error-level record.
#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Error, $msg $(, $attr)*)
    };
}

/// Emit a warning-level record.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Warning, $msg $(, $attr)*)
    };
}

/// Emit a debug-level record.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug, $msg $(, $attr)*)
    };
}
