// ============================================================================
// Converter Configuration
// Language selection and normalization settings
// ============================================================================

use super::language::LanguageCode;
use crate::numeric::{DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound for `float_fraction_digits`; the smallest subnormal f64 has
/// 324 fraction digits.
pub const MAX_FLOAT_FRACTION_DIGITS: usize = 340;

/// Configuration for a number converter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Output language
    pub language: LanguageCode,

    /// Fraction digits kept when a float is expanded to positional form.
    /// Text and decimal input keep every digit regardless.
    pub float_fraction_digits: usize,

    /// Characters stripped from typed text before parsing (e.g. `,`)
    pub grouping_separators: Vec<char>,
}

impl ConverterConfig {
    /// Create a new configuration with default normalization settings
    pub fn new(language: LanguageCode) -> Self {
        Self {
            language,
            float_fraction_digits: DEFAULT_FLOAT_FRACTION_DIGITS,
            grouping_separators: DEFAULT_GROUPING_SEPARATORS.to_vec(),
        }
    }

    /// Builder method: Set float fraction precision
    pub fn with_float_fraction_digits(mut self, digits: usize) -> Self {
        self.float_fraction_digits = digits;
        self
    }

    /// Builder method: Set grouping separators
    pub fn with_grouping_separators(mut self, separators: Vec<char>) -> Self {
        self.grouping_separators = separators;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.float_fraction_digits > MAX_FLOAT_FRACTION_DIGITS {
            return Err(format!(
                "Float fraction digits cannot exceed {}",
                MAX_FLOAT_FRACTION_DIGITS
            ));
        }

        if let Some(bad) = self
            .grouping_separators
            .iter()
            .find(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        {
            return Err(format!("{:?} cannot be used as a grouping separator", bad));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Calculator display configuration
    /// - 20 fraction digits for floats
    /// - Comma, underscore and space separators
    pub fn calculator_display(language: LanguageCode) -> Self {
        Self::new(language)
    }

    /// Financial report configuration
    /// - Floats truncated to cents
    /// - Comma and space separators
    pub fn financial_report(language: LanguageCode) -> Self {
        Self::new(language)
            .with_float_fraction_digits(2)
            .with_grouping_separators(vec![',', ' '])
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(LanguageCode::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ConverterConfig::new(LanguageCode::French);
        assert_eq!(config.language, LanguageCode::French);
        assert_eq!(config.float_fraction_digits, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConverterConfig::new(LanguageCode::German)
            .with_float_fraction_digits(4)
            .with_grouping_separators(vec!['\'']);

        assert_eq!(config.float_fraction_digits, 4);
        assert_eq!(config.grouping_separators, vec!['\'']);
    }

    #[test]
    fn test_validation() {
        let config = ConverterConfig::default().with_grouping_separators(vec!['.']);
        assert!(config.validate().is_err());

        let config = ConverterConfig::default().with_grouping_separators(vec!['7']);
        assert!(config.validate().is_err());

        let config = ConverterConfig::default().with_float_fraction_digits(1_000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let display = ConverterConfig::calculator_display(LanguageCode::Thai);
        assert_eq!(display.float_fraction_digits, 20);

        let report = ConverterConfig::financial_report(LanguageCode::Thai);
        assert_eq!(report.float_fraction_digits, 2);
        assert!(report.validate().is_ok());
    }
}
