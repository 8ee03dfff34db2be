//! Errors surfaced by the coercion engine.
//!
//! Only two conditions ever reach a caller: blank input and a literal that
//! matches no accepted grammar branch. Leaf-parser overflow is consumed
//! internally by ladder promotion and never escapes.

use thiserror::Error;

/// Failure reported by [`crate::parse_numeral`].
///
/// Absent input is not an error; the engine reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// The input was present but contained only whitespace.
    #[error("a blank string is not a valid number")]
    BlankInput,
    /// The input matched no accepted numeral grammar.
    #[error("{text:?} is not a valid number")]
    MalformedNumeral {
        /// Offending text, kept for diagnostics.
        text: String,
    },
}

impl NumeralError {
    pub(crate) fn malformed(text: &str) -> Self {
        Self::MalformedNumeral {
            text: text.to_string(),
        }
    }
}
