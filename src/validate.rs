//! Grammar validation for numeric literals.
//!
//! [`is_valid_numeral`] answers yes/no without producing a value. It is
//! independent of the coercion engine but specified to agree with it on
//! acceptance for well-formed literals, so callers that only need form
//! validation can use it alone.

/// Classify `text` as a grammatically valid numeral.
///
/// Accepts plain integers, hexadecimal integers (`0x` after an optional
/// leading `-`), decimals, exponential forms, and the type suffixes
/// `f`/`F`/`d`/`D`/`l`/`L`. Absent and empty inputs are invalid. A leading
/// `+` is never recognised as a sign.
#[must_use]
pub fn is_valid_numeral(text: Option<&str>) -> bool {
    let Some(text) = text else {
        return false;
    };
    if text.is_empty() {
        return false;
    }
    let bytes = text.as_bytes();
    let rest = bytes.strip_prefix(b"-").unwrap_or(bytes);
    if let Some(hex) = rest.strip_prefix(b"0x") {
        // Complete short-circuit: no other rule applies to hex literals.
        return !hex.is_empty() && hex.iter().all(u8::is_ascii_hexdigit);
    }
    scan_decimal_form(rest)
}

/// Scan a non-hex literal, classifying the last character specially.
///
/// The main loop walks every character except the last, tracking exponent,
/// decimal-point, pending-sign, and digit state. It runs one character
/// further when a just-consumed exponent sign still awaits its digit, so a
/// trailing sign leaves the true last character to the final classification.
fn scan_decimal_form(rest: &[u8]) -> bool {
    let mut has_exponent = false;
    let mut has_point = false;
    let mut sign_allowed = false;
    let mut found_digit = false;

    let len = rest.len();
    let mut index = 0;
    while index + 1 < len || (index < len && sign_allowed && !found_digit) {
        let Some(&byte) = rest.get(index) else {
            break;
        };
        match byte {
            b'0'..=b'9' => {
                found_digit = true;
                sign_allowed = false;
            }
            b'.' => {
                if has_point || has_exponent {
                    return false;
                }
                has_point = true;
            }
            b'e' | b'E' => {
                if has_exponent || !found_digit {
                    return false;
                }
                has_exponent = true;
                sign_allowed = true;
            }
            b'+' | b'-' => {
                if !sign_allowed {
                    return false;
                }
                // A fresh digit is required after an exponent sign.
                sign_allowed = false;
                found_digit = false;
            }
            _ => return false,
        }
        index += 1;
    }

    match rest.get(index).copied() {
        Some(byte) if byte.is_ascii_digit() => true,
        // Nothing may follow a trailing exponent marker.
        Some(b'e' | b'E') => false,
        Some(b'd' | b'D' | b'f' | b'F') => !sign_allowed && found_digit,
        // The long suffix tolerates neither an exponent nor a fraction.
        Some(b'l' | b'L') => found_digit && !has_exponent && !has_point,
        Some(_) => false,
        None => found_digit && !sign_allowed,
    }
}
