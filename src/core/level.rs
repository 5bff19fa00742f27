//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity. Lower ordinal = more severe.
///
/// A record passes the filter when its level is at or below the logger's
/// threshold, so a `Level::Error` threshold shows errors only while
/// `Level::All` shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
#[repr(i8)]
pub enum Level {
    #[default]
    Error = 0,
    Warning = 1,
    Debug = 2,
    /// Sentinel threshold that never filters anything.
    All = i8::MAX,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Debug => "DEBUG",
            Level::All => "UNKNOWN",
        }
    }

    /// Whether a record at this level is emitted under the given threshold.
    #[inline]
    pub fn enabled_for(&self, threshold: Level) -> bool {
        (*self as i8) <= (threshold as i8)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "DEBUG" => Ok(Level::Debug),
            "ALL" => Ok(Level::All),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
