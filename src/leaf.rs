//! Leaf parsers, one per target numeric width.
//!
//! Each function wraps exactly one "parse the entire string as `T`, or fail"
//! operation and performs no widening of its own; promotion between widths
//! is the coercion engine's job. Failure is a value, never a panic, so the
//! engine can treat an overflowing rung as "try the next wider type".

use std::collections::HashMap;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;
use std::sync::OnceLock;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use thiserror::Error;

/// Failure reported by a single leaf parser.
///
/// `Overflow` marks a syntactically sound literal that exceeds the target
/// width; the coercion engine converts it into an attempt at the next rung
/// and never surfaces it to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LeafError {
    /// The text is not a literal of the requested type.
    #[error("text is not a literal of the requested type")]
    Malformed,
    /// The value does not fit the requested width.
    #[error("value does not fit the requested width")]
    Overflow,
}

/// Inclusive bounds of the small-integer memoisation table.
const SMALL_INT_MIN: i32 = -1;
const SMALL_INT_MAX: i32 = 255;

static SMALL_INTS: OnceLock<HashMap<String, i32>> = OnceLock::new();

/// Read-through lookup for the hottest integer literals.
///
/// The table is bounded, written once behind [`OnceLock`], and holds only
/// immutable values, so concurrent callers may race on initialisation
/// without observing different parse results. Purely an optimisation: a
/// miss falls back to the ordinary parse.
fn small_int(text: &str) -> Option<i32> {
    let table = SMALL_INTS.get_or_init(|| {
        (SMALL_INT_MIN..=SMALL_INT_MAX)
            .map(|value| (value.to_string(), value))
            .collect()
    });
    table.get(text).copied()
}

fn classify_int_error(err: &ParseIntError) -> LeafError {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => LeafError::Overflow,
        _ => LeafError::Malformed,
    }
}

/// Parse the entire text as a 32-bit signed integer.
///
/// # Errors
/// `Overflow` when the value lies outside `i32`; `Malformed` otherwise.
pub fn parse_int32(text: &str) -> Result<i32, LeafError> {
    if let Some(cached) = small_int(text) {
        return Ok(cached);
    }
    text.parse::<i32>().map_err(|err| classify_int_error(&err))
}

/// Parse the entire text as a 64-bit signed integer.
///
/// # Errors
/// `Overflow` when the value lies outside `i64`; `Malformed` otherwise.
pub fn parse_int64(text: &str) -> Result<i64, LeafError> {
    text.parse::<i64>().map_err(|err| classify_int_error(&err))
}

/// Parse the entire text as an arbitrary-precision integer.
///
/// # Errors
/// `Malformed` when the text is not a decimal integer literal; this parser
/// cannot overflow.
pub fn parse_big_int(text: &str) -> Result<BigInt, LeafError> {
    BigInt::from_str(text).map_err(|_| LeafError::Malformed)
}

/// Parse the entire text as a single-precision float.
///
/// Out-of-range literals saturate to infinity rather than failing; the
/// coercion engine rejects non-finite results itself.
///
/// # Errors
/// `Malformed` when the text is not a float literal.
pub fn parse_float32(text: &str) -> Result<f32, LeafError> {
    text.parse::<f32>().map_err(|_| LeafError::Malformed)
}

/// Parse the entire text as a double-precision float.
///
/// # Errors
/// `Malformed` when the text is not a float literal.
pub fn parse_float64(text: &str) -> Result<f64, LeafError> {
    text.parse::<f64>().map_err(|_| LeafError::Malformed)
}

/// Parse the entire text as an arbitrary-precision decimal.
///
/// # Errors
/// `Malformed` when the text is not a decimal literal; this parser cannot
/// overflow.
pub fn parse_big_decimal(text: &str) -> Result<BigDecimal, LeafError> {
    text.parse::<BigDecimal>().map_err(|_| LeafError::Malformed)
}
