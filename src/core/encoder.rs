//! Append-only JSON encoding of record fields
//!
//! Every operation here appends a JSON-correct representation of a value
//! onto an existing byte buffer. Integers and floats are formatted by hand
//! through a fixed-size stack scratch array so the hot path never touches
//! the allocator; the only exceptions fall back to the standard formatter
//! and are called out below.

use super::attr::{Attr, AttrValue};
use super::level::Level;

/// Digits of a 64-bit value plus sign fit comfortably.
const SCRATCH_LEN: usize = 22;

/// Largest magnitude whose integer part still converts exactly to `i64`.
const MAX_EXACT_INT: f64 = i64::MAX as f64;

/// Append `s` with `"`, newline, and tab escaped. A single linear scan;
/// unescaped runs are copied in one shot between escape points.
pub fn push_escaped(buf: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    let mut run = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let escape: &[u8] = match b {
            b'"' => b"\\\"",
            b'\n' => b"\\n",
            b'\t' => b"\\t",
            _ => continue,
        };
        buf.extend_from_slice(&bytes[run..i]);
        buf.extend_from_slice(escape);
        run = i + 1;
    }
    buf.extend_from_slice(&bytes[run..]);
}

/// Append `s` escaped and wrapped in double quotes.
pub fn push_quoted(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    push_escaped(buf, s);
    buf.push(b'"');
}

/// Append a decimal `u64`, most significant digit first.
pub fn push_u64(buf: &mut Vec<u8>, value: u64) {
    if value == 0 {
        buf.push(b'0');
        return;
    }
    let mut scratch = [0u8; SCRATCH_LEN];
    let mut pos = SCRATCH_LEN;
    let mut n = value;
    while n > 0 {
        pos -= 1;
        scratch[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    buf.extend_from_slice(&scratch[pos..]);
}

/// Append a decimal `i64`. The magnitude goes through `unsigned_abs` so
/// `i64::MIN` is exact rather than a negation overflow.
pub fn push_i64(buf: &mut Vec<u8>, value: i64) {
    if value < 0 {
        buf.push(b'-');
    }
    push_u64(buf, value.unsigned_abs());
}

/// Append a float with exactly four fractional digits, split as integer
/// part and scaled fractional remainder.
///
/// Magnitudes past the exactly-representable `i64` range go through the
/// standard formatter instead (allocates, cold path). Non-finite values
/// render `null` since JSON has no NaN or infinity.
pub fn push_f64(buf: &mut Vec<u8>, value: f64) {
    if !value.is_finite() {
        buf.extend_from_slice(b"null");
        return;
    }
    if value.abs() >= MAX_EXACT_INT {
        let formatted = format!("{:.4}", value);
        buf.extend_from_slice(formatted.as_bytes());
        return;
    }

    let mut int_part = value.trunc() as i64;
    let mut frac = ((value - value.trunc()).abs() * 10_000.0).round() as i64;
    if frac >= 10_000 {
        // rounding overflowed the fractional field; carry into the integer part
        int_part += if value >= 0.0 { 1 } else { -1 };
        frac -= 10_000;
    }

    if value < 0.0 && int_part == 0 {
        buf.push(b'-');
    }
    push_i64(buf, int_part);
    buf.push(b'.');
    if frac < 1_000 {
        buf.push(b'0');
    }
    if frac < 100 {
        buf.push(b'0');
    }
    if frac < 10 {
        buf.push(b'0');
    }
    push_u64(buf, frac as u64);
}

/// Append the wire name of a level.
pub fn push_level(buf: &mut Vec<u8>, level: Level) {
    let name: &[u8] = match level {
        Level::Error => b"ERROR",
        Level::Warning => b"WARNING",
        Level::Debug => b"DEBUG",
        _ => b"UNKNOWN",
    };
    buf.extend_from_slice(name);
}

/// Append one attribute value, dispatching on its tag.
pub fn push_attr_value(buf: &mut Vec<u8>, value: &AttrValue<'_>) {
    match value {
        AttrValue::Int(v) => push_i64(buf, *v),
        AttrValue::UInt(v) => push_u64(buf, *v),
        AttrValue::Str(s) => push_quoted(buf, s),
        // allocates for the rendered timestamp
        AttrValue::Time(tm) => push_quoted(buf, &tm.to_rfc3339()),
        AttrValue::Error { message: None, .. } => buf.extend_from_slice(b"null"),
        AttrValue::Error {
            message: Some(message),
            stack,
        } => {
            push_quoted(buf, message);
            if let Some(stack) = stack {
                buf.extend_from_slice(b",\"stack\":");
                push_quoted(buf, stack);
            }
        }
        AttrValue::Float(v) => push_f64(buf, *v),
    }
}

/// Append `"name":<value>` for each attribute, with a leading separator
/// whenever the buffer already has committed content past the opening brace.
/// Every attribute is emitted regardless of value; zero is a value too.
pub fn push_attrs(buf: &mut Vec<u8>, attrs: &[Attr<'_>]) {
    let mut needs_sep = matches!(buf.last(), Some(b) if *b != b'{');
    for attr in attrs {
        if needs_sep {
            buf.push(b',');
        }
        needs_sep = true;
        buf.push(b'"');
        push_escaped(buf, attr.name);
        buf.push(b'"');
        buf.push(b':');
        push_attr_value(buf, &attr.value);
    }
}
