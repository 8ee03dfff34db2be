//! Adaptive-precision coercion of numeric literals.
//!
//! [`parse_numeral`] decomposes a literal into sign, mantissa, fractional
//! part, exponent part, and optional type suffix, then walks a promotion
//! ladder of leaf parsers until one representation holds the value without
//! overflow and without rounding a non-zero literal to zero. Integer shapes
//! climb `Int32 → Int64 → BigInt`; fractional shapes climb
//! `Float32 → Float64 → BigDecimal`.

use log::debug;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::NumeralError;
use crate::leaf;
use crate::number::Number;
use crate::text;

/// Convert a literal into the narrowest numeric representation that holds it.
///
/// Absent input yields `Ok(None)`; it is a distinct "no answer" case, not an
/// error. A literal opening with `--` also yields `Ok(None)`, a long-standing
/// compatibility quirk rather than a numeric rule. Hexadecimal
/// literals (`0x`/`-0x`) always resolve on the integer ladder. An explicit
/// type suffix (`f`/`F`/`d`/`D`/`l`/`L`) pins the result to that type's
/// ladder segment and upward.
///
/// # Errors
/// [`NumeralError::BlankInput`] when the text contains only whitespace;
/// [`NumeralError::MalformedNumeral`] when it matches no grammar branch.
pub fn parse_numeral(text: Option<&str>) -> Result<Option<Number>, NumeralError> {
    let Some(text) = text else {
        return Ok(None);
    };
    if text::is_blank(text) {
        return Err(NumeralError::BlankInput);
    }
    if text.starts_with("--") {
        return Ok(None);
    }
    if text.starts_with("0x") || text.starts_with("-0x") {
        return parse_hex(text).map(Some);
    }
    if text.starts_with('+') {
        // Only '-' is recognised as a leading sign.
        return Err(NumeralError::malformed(text));
    }
    parse_decimal_form(text).map(Some)
}

/// Strip the sign and `0x` prefix, parse the digits in radix 16, and narrow
/// the value onto the integer ladder.
fn parse_hex(text: &str) -> Result<Number, NumeralError> {
    let (negative, body) = text
        .strip_prefix('-')
        .map_or((false, text), |unsigned| (true, unsigned));
    let digits = body
        .strip_prefix("0x")
        .ok_or_else(|| NumeralError::malformed(text))?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(NumeralError::malformed(text));
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| NumeralError::malformed(text))?;
    let value = if negative { -magnitude } else { magnitude };
    Ok(narrowest_integer(value))
}

/// Place an already-parsed integer on the narrowest rung that holds it.
fn narrowest_integer(value: BigInt) -> Number {
    match (value.to_i32(), value.to_i64()) {
        (Some(narrow), _) => Number::Int32(narrow),
        (None, Some(wide)) => Number::Int64(wide),
        (None, None) => Number::BigInt(value),
    }
}

fn parse_decimal_form(text: &str) -> Result<Number, NumeralError> {
    let point_pos = text.find('.');
    let exponent_pos = text.find(['e', 'E']);
    if let (Some(point), Some(marker)) = (point_pos, exponent_pos) {
        if marker < point {
            return Err(NumeralError::malformed(text));
        }
    }
    let Some((last_pos, last)) = text.char_indices().last() else {
        return Err(NumeralError::malformed(text));
    };
    if last.is_ascii_digit() {
        parse_unsuffixed(text, point_pos, exponent_pos)
    } else {
        parse_suffixed(text, point_pos, exponent_pos, last_pos, last)
    }
}

/// Every digit of the component is '0'. An absent component counts as
/// all-zero while an empty one does not; the asymmetry distinguishes "the
/// literal truly is zero" from "the parse underflowed to zero".
fn all_zero_digits(component: Option<&str>) -> bool {
    component.is_none_or(|part| {
        !part.is_empty()
            && part
                .chars()
                .filter(char::is_ascii_digit)
                .all(|digit| digit == '0')
    })
}

/// Mantissa of the literal: everything before the exponent marker (or before
/// the suffix when no marker exists), with a leading '-' stripped.
fn mantissa_of(text: &str, exponent_pos: Option<usize>, end: usize) -> Option<&str> {
    text.get(..exponent_pos.unwrap_or(end))
        .map(|mantissa| mantissa.strip_prefix('-').unwrap_or(mantissa))
}

/// Resolve a literal whose last character is a type suffix.
fn parse_suffixed(
    text: &str,
    point_pos: Option<usize>,
    exponent_pos: Option<usize>,
    suffix_pos: usize,
    suffix: char,
) -> Result<Number, NumeralError> {
    let numeric = text
        .get(..suffix_pos)
        .ok_or_else(|| NumeralError::malformed(text))?;
    let exponent = match exponent_pos {
        Some(marker) if marker < suffix_pos => text.get(marker + 1..suffix_pos),
        _ => None,
    };
    let all_zero =
        all_zero_digits(mantissa_of(text, exponent_pos, suffix_pos)) && all_zero_digits(exponent);
    match suffix {
        'l' | 'L' => {
            let body = numeric.strip_prefix('-').unwrap_or(numeric);
            if point_pos.is_none() && exponent.is_none() && text::is_digits(body) {
                return match leaf::parse_int64(numeric) {
                    Ok(wide) => Ok(Number::Int64(wide)),
                    Err(_) => {
                        debug!("long literal {numeric:?} exceeds 64 bits, widening");
                        leaf::parse_big_int(numeric)
                            .map(Number::BigInt)
                            .map_err(|_| NumeralError::malformed(text))
                    }
                };
            }
            Err(NumeralError::malformed(text))
        }
        'f' | 'F' => accept_float32(numeric, all_zero)
            .map_or_else(|| fractional_fallback(text, numeric, all_zero), Ok),
        'd' | 'D' => fractional_fallback(text, numeric, all_zero),
        _ => Err(NumeralError::malformed(text)),
    }
}

/// Resolve a literal whose last character is a digit: plain integers climb
/// the integer ladder, anything with a fraction or exponent climbs the
/// fractional one.
fn parse_unsuffixed(
    text: &str,
    point_pos: Option<usize>,
    exponent_pos: Option<usize>,
) -> Result<Number, NumeralError> {
    if point_pos.is_none() && exponent_pos.is_none() {
        if let Ok(narrow) = leaf::parse_int32(text) {
            return Ok(Number::Int32(narrow));
        }
        if let Ok(wide) = leaf::parse_int64(text) {
            return Ok(Number::Int64(wide));
        }
        debug!("integer literal {text:?} exceeds 64 bits, widening");
        return leaf::parse_big_int(text)
            .map(Number::BigInt)
            .map_err(|_| NumeralError::malformed(text));
    }
    let exponent = exponent_pos.and_then(|marker| text.get(marker + 1..));
    let all_zero =
        all_zero_digits(mantissa_of(text, exponent_pos, text.len())) && all_zero_digits(exponent);
    accept_float32(text, all_zero).map_or_else(|| fractional_fallback(text, text, all_zero), Ok)
}

/// Acceptance predicate for a float rung: the parse must be finite and must
/// not have rounded a genuinely non-zero literal to zero.
fn accept_float32(numeric: &str, all_zero: bool) -> Option<Number> {
    let single = leaf::parse_float32(numeric).ok()?;
    (single.is_finite() && (single != 0.0 || all_zero)).then_some(Number::Float32(single))
}

/// Remaining rungs of the fractional ladder: double precision under the same
/// acceptance rule, then arbitrary-precision decimal.
fn fractional_fallback(text: &str, numeric: &str, all_zero: bool) -> Result<Number, NumeralError> {
    if let Ok(double) = leaf::parse_float64(numeric) {
        if double.is_finite() && (double != 0.0 || all_zero) {
            return Ok(Number::Float64(double));
        }
    }
    debug!("literal {numeric:?} exceeds double precision, widening");
    leaf::parse_big_decimal(numeric)
        .map(Number::BigDecimal)
        .map_err(|_| NumeralError::malformed(text))
}
