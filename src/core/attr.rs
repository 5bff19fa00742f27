//! Typed key/value attributes attached to log records
//!
//! An [`Attr`] pairs a field name with an [`AttrValue`]. Construction is
//! pure; nothing is serialized until the attribute is handed to a logger.
//! String values borrow from the caller so that attaching an attribute to a
//! single record costs no allocation.

use chrono::{DateTime, Utc};
use std::fmt::Display;

/// One typed attribute value. Exactly one variant is populated per value,
/// and the tag alone selects the encoding.
#[derive(Debug, Clone)]
pub enum AttrValue<'a> {
    Int(i64),
    UInt(u64),
    Str(&'a str),
    Time(DateTime<Utc>),
    /// An error rendered as `"error":"<message>"`. A `None` message renders
    /// the JSON literal `null`; a present stack trace adds a second
    /// `"stack":"<trace>"` field.
    Error {
        message: Option<String>,
        stack: Option<String>,
    },
    Float(f64),
}

/// A named attribute. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Attr<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: AttrValue<'a>,
}

impl<'a> Attr<'a> {
    pub fn new(name: &'a str, value: AttrValue<'a>) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn value(&self) -> &AttrValue<'a> {
        &self.value
    }

    pub fn int(name: &'a str, value: i64) -> Self {
        Self::new(name, AttrValue::Int(value))
    }

    pub fn int16(name: &'a str, value: i16) -> Self {
        Self::new(name, AttrValue::Int(value as i64))
    }

    pub fn int32(name: &'a str, value: i32) -> Self {
        Self::new(name, AttrValue::Int(value as i64))
    }

    pub fn int64(name: &'a str, value: i64) -> Self {
        Self::new(name, AttrValue::Int(value))
    }

    pub fn uint(name: &'a str, value: u64) -> Self {
        Self::new(name, AttrValue::UInt(value))
    }

    pub fn uint16(name: &'a str, value: u16) -> Self {
        Self::new(name, AttrValue::UInt(value as u64))
    }

    pub fn uint32(name: &'a str, value: u32) -> Self {
        Self::new(name, AttrValue::UInt(value as u64))
    }

    pub fn uint64(name: &'a str, value: u64) -> Self {
        Self::new(name, AttrValue::UInt(value))
    }

    pub fn string(name: &'a str, value: &'a str) -> Self {
        Self::new(name, AttrValue::Str(value))
    }

    pub fn date_time(name: &'a str, value: DateTime<Utc>) -> Self {
        Self::new(name, AttrValue::Time(value))
    }

    pub fn float(name: &'a str, value: f64) -> Self {
        Self::new(name, AttrValue::Float(value))
    }

    pub fn float32(name: &'a str, value: f32) -> Self {
        Self::new(name, AttrValue::Float(value as f64))
    }

    /// An error attribute under the conventional `"error"` key.
    ///
    /// Stack trace extraction is the caller's responsibility; use
    /// [`Attr::error_with_stack`] when one is available.
    pub fn error<E: Display>(err: &E) -> Self {
        Self::new(
            "error",
            AttrValue::Error {
                message: Some(err.to_string()),
                stack: None,
            },
        )
    }

    /// An error attribute carrying a preformatted stack trace, rendered as
    /// `"error":"<message>","stack":"<trace>"`.
    pub fn error_with_stack<E: Display>(err: &E, stack: impl Into<String>) -> Self {
        Self::new(
            "error",
            AttrValue::Error {
                message: Some(err.to_string()),
                stack: Some(stack.into()),
            },
        )
    }

    /// An error attribute from an optional error; `None` renders `"error":null`.
    pub fn maybe_error<E: Display>(err: Option<&E>) -> Self {
        Self::new(
            "error",
            AttrValue::Error {
                message: err.map(|e| e.to_string()),
                stack: None,
            },
        )
    }
}
