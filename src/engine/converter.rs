// ============================================================================
// Number Converter
// Core business logic for number-to-words conversion
// ============================================================================

use crate::domain::{ConverterConfig, LanguageCode};
use crate::interfaces::LanguageStrategy;
use crate::numeric::{Classified, NumberInput};

/// Rough bytes per digit of output; non-Latin scripts take 3 bytes a char.
const BYTES_PER_DIGIT: usize = 16;

/// Number-to-words converter with a pluggable language strategy
///
/// Holds no mutable state: one converter can be shared across threads.
pub struct NumberConverter {
    /// Language verbalizer, shared with every other converter of the language
    strategy: &'static dyn LanguageStrategy,

    /// Normalization settings
    config: ConverterConfig,
}

impl NumberConverter {
    /// Create a new converter
    pub fn new(strategy: &'static dyn LanguageStrategy, config: ConverterConfig) -> Self {
        Self { strategy, config }
    }

    /// Convert a number to words
    ///
    /// Never fails: non-finite or unparsable input yields the language's
    /// fixed phrase, and a magnitude beyond the named scales yields its
    /// "too large" phrase.
    pub fn convert(&self, input: impl Into<NumberInput>) -> String {
        let classified = self.classify(input);
        verbalize(self.strategy, &classified)
    }

    /// Normalize input using this converter's settings
    pub fn classify(&self, input: impl Into<NumberInput>) -> Classified {
        input.into().classify(
            self.config.float_fraction_digits,
            &self.config.grouping_separators,
        )
    }

    /// Get the output language
    pub fn language(&self) -> LanguageCode {
        self.strategy.code()
    }

    /// Get the language strategy
    pub fn strategy(&self) -> &'static dyn LanguageStrategy {
        self.strategy
    }

    /// Get the configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

/// Turn a classified value into words with `strategy`.
///
/// Output is `[negative prefix] integer words [decimal marker + digits]`,
/// or a single fixed phrase for special values.
pub fn verbalize(strategy: &dyn LanguageStrategy, classified: &Classified) -> String {
    let lexicon = strategy.lexicon();

    let value = match classified {
        Classified::Special(special) => {
            tracing::trace!(language = strategy.name(), ?special, "special value");
            return lexicon.special(*special).to_string();
        },
        Classified::Finite(value) => value,
    };

    let integer = value.integer_digits();
    let fraction = value.fraction_digits();
    let mut out = String::with_capacity((integer.len() + fraction.len() + 1) * BYTES_PER_DIGIT);

    if value.is_negative() {
        out.push_str(lexicon.negative);
    }

    let start = out.len();
    if let Err(err) = strategy.integer_words(integer, &mut out) {
        tracing::warn!(language = strategy.name(), %err, "number too large for words");
        out.truncate(start);
        out.push_str(lexicon.too_large);
        return out;
    }
    if out.len() == start {
        out.push_str(lexicon.integer_zero);
    }

    strategy.fraction_words(fraction, &mut out);

    tracing::debug!(
        language = strategy.name(),
        integer_digits = integer.len(),
        fraction_digits = fraction.len(),
        "converted"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::{Chinese, English, Thai};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn english() -> NumberConverter {
        NumberConverter::new(&English, ConverterConfig::new(LanguageCode::English))
    }

    #[test]
    fn test_convert_float() {
        let converter = english();
        assert_eq!(converter.convert(1.5), "One point Five");
        assert_eq!(converter.convert(-0.25), "Negative Zero point Two Five");
        assert_eq!(converter.convert(0.0), "Zero");
        assert_eq!(converter.convert(-0.0), "Zero");
    }

    #[test]
    fn test_convert_special_floats() {
        let converter = english();
        assert_eq!(converter.convert(f64::INFINITY), "Infinity");
        assert_eq!(converter.convert(f64::NEG_INFINITY), "Negative Infinity");
        assert_eq!(converter.convert(f64::NAN), "Invalid Number");
    }

    #[test]
    fn test_convert_integers_and_text() {
        let converter = english();
        assert_eq!(converter.convert(1_000_i64), "One Thousand");
        assert_eq!(converter.convert("1,000,000"), "One Million");
        assert_eq!(converter.convert("1e3"), "One Thousand");
        assert_eq!(converter.convert("12abc"), "Invalid Number");
    }

    #[test]
    fn test_convert_decimal_keeps_scale() {
        let converter = english();
        let price = Decimal::from_str("19.90").unwrap();
        assert_eq!(converter.convert(price), "Nineteen point Nine Zero");
    }

    #[test]
    fn test_custom_separators() {
        let config =
            ConverterConfig::new(LanguageCode::English).with_grouping_separators(vec!['\'']);
        let converter = NumberConverter::new(&English, config);
        assert_eq!(converter.convert("1'000"), "One Thousand");
        // ',' is no longer stripped
        assert_eq!(converter.convert("1,000"), "Invalid Number");
    }

    #[test]
    fn test_float_precision() {
        let config =
            ConverterConfig::new(LanguageCode::English).with_float_fraction_digits(2);
        let converter = NumberConverter::new(&English, config);
        assert_eq!(converter.convert(1.239), "One point Two Three");
        assert_eq!(converter.convert(1.001), "One");
    }

    #[test]
    fn test_overflow_keeps_sign() {
        let converter = NumberConverter::new(
            &Thai,
            ConverterConfig::new(LanguageCode::Thai),
        );
        let huge = format!("-1{}", "0".repeat(60));
        assert_eq!(converter.convert(huge), "ลบตัวเลขใหญ่เกินไป");
    }

    #[test]
    fn test_accessors() {
        let converter = NumberConverter::new(
            &Chinese::TRADITIONAL,
            ConverterConfig::new(LanguageCode::ChineseTraditional),
        );
        assert_eq!(converter.language(), LanguageCode::ChineseTraditional);
        assert_eq!(converter.strategy().name(), "Chinese (Traditional)");
        assert_eq!(converter.config().float_fraction_digits, 20);
    }
}
