// ============================================================================
// Special Values
// Zero, infinities and invalid input, short-circuited before normalization
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inputs that bypass the chunk pipeline and map to a fixed phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpecialValue {
    /// Exactly zero, including `-0`
    Zero,
    /// Positive infinity
    PositiveInfinity,
    /// Negative infinity
    NegativeInfinity,
    /// NaN, calculator errors and unparsable text
    Invalid,
}

impl SpecialValue {
    /// Classify a float. Returns `None` for ordinary non-zero values.
    pub fn classify_f64(value: f64) -> Option<Self> {
        if value.is_nan() {
            Some(SpecialValue::Invalid)
        } else if value == f64::INFINITY {
            Some(SpecialValue::PositiveInfinity)
        } else if value == f64::NEG_INFINITY {
            Some(SpecialValue::NegativeInfinity)
        } else if value == 0.0 {
            Some(SpecialValue::Zero)
        } else {
            None
        }
    }

    /// Classify the literal words a calculator display may hold.
    ///
    /// Numeric text returns `None`; whether it parses is decided by the
    /// normalizer.
    pub fn classify_text(text: &str) -> Option<Self> {
        let t = text.trim();
        if t.is_empty() {
            return Some(SpecialValue::Invalid);
        }

        let (negative, body) = match t.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, t.strip_prefix('+').unwrap_or(t).trim_start()),
        };

        if body.eq_ignore_ascii_case("infinity") || body.eq_ignore_ascii_case("inf") || body == "∞" {
            return Some(if negative {
                SpecialValue::NegativeInfinity
            } else {
                SpecialValue::PositiveInfinity
            });
        }

        if body.eq_ignore_ascii_case("nan") || body.eq_ignore_ascii_case("error") {
            return Some(SpecialValue::Invalid);
        }

        None
    }
}
