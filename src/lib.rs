//! Library crate for numlit.
//!
//! Recognises numeric literals and coerces them into the narrowest numeric
//! representation that holds them without silent precision loss. Two entry
//! points are exposed: [`is_valid_numeral`] classifies a token as a
//! grammatically valid numeral, and [`parse_numeral`] produces a typed
//! [`Number`], promoting through a fixed ladder of wider types on overflow
//! or underflow. The per-width leaf parsers in [`leaf`] are available to
//! callers that already know the shape of their input.

#![forbid(unsafe_code)]

pub mod coerce;
pub mod error;
pub mod leaf;
pub mod number;
pub mod text;
pub mod validate;

pub use coerce::parse_numeral;
pub use error::NumeralError;
pub use number::Number;
pub use validate::is_valid_numeral;
