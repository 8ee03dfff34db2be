//! Primitive text predicates shared by the validator and the coercion
//! engine. These are the only services the engine consumes from the wider
//! string-utility layer.

/// True when the text is empty or contains only whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// True when the text is non-empty and consists solely of ASCII digits.
#[must_use]
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}
