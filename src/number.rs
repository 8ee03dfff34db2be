//! Numeric result type produced by the coercion engine.
//!
//! A successful coercion yields exactly one of six variants, the narrowest
//! type on the applicable promotion ladder that holds the literal without
//! overflow and without rounding a non-zero literal to zero. Keeping the
//! outcome a closed sum lets callers handle every width exhaustively instead
//! of inspecting runtime types.

use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Narrowest numeric representation of a parsed literal.
///
/// The integer ladder runs `Int32 → Int64 → BigInt`; the fractional ladder
/// runs `Float32 → Float64 → BigDecimal`. [`crate::parse_numeral`] selects
/// the rung; this type only records the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// Arbitrary-precision integer.
    BigInt(BigInt),
    /// Single-precision float.
    Float32(f32),
    /// Double-precision float.
    Float64(f64),
    /// Arbitrary-precision decimal.
    BigDecimal(BigDecimal),
}

impl Number {
    /// True when the value sits on the integer ladder.
    #[must_use]
    pub const fn is_integral(&self) -> bool {
        matches!(self, Self::Int32(_) | Self::Int64(_) | Self::BigInt(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(value) => write!(f, "{value}"),
            Self::Int64(value) => write!(f, "{value}"),
            Self::BigInt(value) => write!(f, "{value}"),
            Self::Float32(value) => write!(f, "{value}"),
            Self::Float64(value) => write!(f, "{value}"),
            Self::BigDecimal(value) => write!(f, "{value}"),
        }
    }
}
