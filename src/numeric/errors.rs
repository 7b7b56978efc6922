// ============================================================================
// Numeric Errors
// Error types for decimal normalization and magnitude checks
// ============================================================================

use std::fmt;

/// Errors that can occur while normalizing or verbalizing a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text does not denote a number
    InvalidInput,
    /// A float is NaN or infinite and has no digit expansion
    NonFinite,
    /// Integer part has more digits than the language's scale table covers
    MagnitudeOverflow {
        /// Digits in the integer part
        digits: usize,
        /// Largest digit count the language can name
        max_digits: usize,
    },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NonFinite => {
                write!(f, "non-finite value: NaN and infinities have no digits")
            },
            NumericError::MagnitudeOverflow { digits, max_digits } => write!(
                f,
                "magnitude overflow: {} integer digits exceed the named range of {}",
                digits, max_digits
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
