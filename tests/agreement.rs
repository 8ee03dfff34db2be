//! Cross-component properties: the validator and the coercion engine must
//! agree on acceptance for well-formed literals, and re-parsing a result's
//! canonical text must yield the same value.

use numlit::{NumeralError, is_valid_numeral, parse_numeral};
use rstest::rstest;

/// Well-formed literals: accepted by the validator and coerced by the engine.
#[rstest]
#[case::integer("12345")]
#[case::negative_integer("-12345")]
#[case::int32_boundary("2147483647")]
#[case::int64_boundary("9223372036854775807")]
#[case::past_int64("9223372036854775808")]
#[case::hex("0x1A")]
#[case::negative_hex("-0x1A")]
#[case::wide_hex("0xFFFFFFFFFFFFFFFFFF")]
#[case::decimal("12.3")]
#[case::leading_point(".5")]
#[case::exponent("12.3E4")]
#[case::negative_exponent("1e-5")]
#[case::signed_exponent("1e+5")]
#[case::float_suffix("1.5f")]
#[case::float_suffix_upper("12.3E4F")]
#[case::double_suffix("1.5d")]
#[case::double_suffix_upper("0D")]
#[case::long_suffix("123L")]
#[case::wide_long_suffix("99999999999999999999L")]
#[case::zero_float("0.0f")]
#[case::underflowing("1e-400")]
#[case::overflowing("1e400")]
fn both_components_accept(#[case] text: &str) {
    assert!(is_valid_numeral(Some(text)), "{text:?} should validate");
    let parsed = parse_numeral(Some(text));
    assert!(
        matches!(parsed, Ok(Some(_))),
        "{text:?} should coerce, got {parsed:?}"
    );
}

/// Malformed literals: rejected by the validator and erroring in the engine.
#[rstest]
#[case::lone_sign("-")]
#[case::lone_point(".")]
#[case::trailing_point("1.")]
#[case::trailing_exponent("1e")]
#[case::dangling_exponent_sign("1e+")]
#[case::double_point("1.2.3")]
#[case::double_exponent("1e2e3")]
#[case::bare_hex("0x")]
#[case::bad_hex_digits("0xZZ")]
#[case::leading_plus("+5")]
#[case::fraction_under_long("1.1L")]
#[case::exponent_under_long("1e2L")]
#[case::letters("abc")]
#[case::nan("NaN")]
fn both_components_reject(#[case] text: &str) {
    assert!(!is_valid_numeral(Some(text)), "{text:?} should not validate");
    let parsed = parse_numeral(Some(text));
    assert!(
        matches!(parsed, Err(NumeralError::MalformedNumeral { .. })),
        "{text:?} should be malformed, got {parsed:?}"
    );
}

#[test]
fn absent_input_agrees_as_no_answer() {
    assert!(!is_valid_numeral(None));
    assert_eq!(parse_numeral(None), Ok(None));
}

#[test]
fn blank_input_is_invalid_and_an_engine_error() {
    assert!(!is_valid_numeral(Some("  ")));
    assert_eq!(parse_numeral(Some("  ")), Err(NumeralError::BlankInput));
}

/// Documented divergence: a `--` prefix is invalid to the validator but
/// yields "no result" (not an error) from the engine.
#[test]
fn double_sign_prefix_diverges_by_design() {
    assert!(!is_valid_numeral(Some("--512")));
    assert_eq!(parse_numeral(Some("--512")), Ok(None));
}

/// Re-parsing the canonical text of a result yields an equal value. The
/// corpus sticks to spellings whose canonical form keeps the same variant;
/// equality is defined on the numeric value, not the original spelling.
#[rstest]
#[case::int32("42")]
#[case::negative_int32("-42")]
#[case::int64("2147483648")]
#[case::big_int("99999999999999999999")]
#[case::float32("1.5")]
#[case::negative_float32("-0.25")]
#[case::float64("1e-60")]
#[case::big_decimal("1e-400")]
fn canonical_text_round_trips(#[case] text: &str) {
    let first = match parse_numeral(Some(text)) {
        Ok(Some(number)) => number,
        other => panic!("{text:?} should coerce, got {other:?}"),
    };
    let canonical = first.to_string();
    let second = match parse_numeral(Some(canonical.as_str())) {
        Ok(Some(number)) => number,
        other => panic!("{canonical:?} should coerce, got {other:?}"),
    };
    assert_eq!(first, second, "{text:?} via {canonical:?}");
}
