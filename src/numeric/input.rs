// ============================================================================
// Number Input
// Everything a caller may hand the engine, classified before verbalization
// ============================================================================

use super::canonical_decimal::CanonicalDecimal;
use super::special::SpecialValue;
use rust_decimal::Decimal;

/// A number as the caller has it.
///
/// Text is preferred: it keeps every digit the user typed, while a float has
/// already been rounded to 53 bits.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    /// A double-precision value
    Float(f64),
    /// Typed or computed decimal text, e.g. `"1,234.50"` or `"-Infinity"`
    Text(String),
    /// An exact decimal from a financial calculation
    Decimal(Decimal),
}

/// Outcome of classification: a fixed phrase or digits to verbalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Short-circuits to the language's fixed phrase
    Special(SpecialValue),
    /// A non-zero finite value
    Finite(CanonicalDecimal),
}

impl NumberInput {
    /// Run the special-value check, then normalize.
    ///
    /// # Arguments
    /// * `float_fraction_digits` - Fraction digits kept when expanding a float
    /// * `separators` - Grouping separators stripped from text
    pub fn classify(&self, float_fraction_digits: usize, separators: &[char]) -> Classified {
        let normalized = match self {
            NumberInput::Float(value) => {
                if let Some(special) = SpecialValue::classify_f64(*value) {
                    return Classified::Special(special);
                }
                CanonicalDecimal::from_f64(*value, float_fraction_digits)
            },
            NumberInput::Text(text) => {
                if let Some(special) = SpecialValue::classify_text(text) {
                    return Classified::Special(special);
                }
                CanonicalDecimal::parse_with_separators(text, separators)
            },
            NumberInput::Decimal(d) => Ok(CanonicalDecimal::from_decimal(*d)),
        };

        match normalized {
            Ok(d) if d.is_zero() => Classified::Special(SpecialValue::Zero),
            Ok(d) => Classified::Finite(d),
            Err(_) => Classified::Special(SpecialValue::Invalid),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Float(value)
    }
}

impl From<f32> for NumberInput {
    fn from(value: f32) -> Self {
        NumberInput::Float(f64::from(value))
    }
}

impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<i32> for NumberInput {
    fn from(value: i32) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<u64> for NumberInput {
    fn from(value: u64) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<u128> for NumberInput {
    fn from(value: u128) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<&str> for NumberInput {
    fn from(text: &str) -> Self {
        NumberInput::Text(text.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(text: String) -> Self {
        NumberInput::Text(text)
    }
}

impl From<Decimal> for NumberInput {
    fn from(d: Decimal) -> Self {
        NumberInput::Decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS};

    fn classify(input: impl Into<NumberInput>) -> Classified {
        input
            .into()
            .classify(DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS)
    }

    #[test]
    fn test_specials_short_circuit() {
        assert_eq!(classify(0.0), Classified::Special(SpecialValue::Zero));
        assert_eq!(classify("-0"), Classified::Special(SpecialValue::Zero));
        assert_eq!(classify(f64::NAN), Classified::Special(SpecialValue::Invalid));
        assert_eq!(classify("Error"), Classified::Special(SpecialValue::Invalid));
        assert_eq!(classify("1..2"), Classified::Special(SpecialValue::Invalid));
        assert_eq!(
            classify(f64::NEG_INFINITY),
            Classified::Special(SpecialValue::NegativeInfinity)
        );
        assert_eq!(classify(Decimal::ZERO), Classified::Special(SpecialValue::Zero));
    }

    #[test]
    fn test_finite_values() {
        match classify("98,765.4321") {
            Classified::Finite(d) => {
                assert_eq!(d.integer_digits(), "98765");
                assert_eq!(d.fraction_digits(), "4321");
            },
            other => panic!("expected finite, got {:?}", other),
        }

        match classify(u128::MAX) {
            Classified::Finite(d) => assert_eq!(d.integer_digits(), u128::MAX.to_string()),
            other => panic!("expected finite, got {:?}", other),
        }
    }
}
