// ============================================================================
// Converter Factory
// Creates number converters with proper configuration
// ============================================================================

use crate::domain::{ConverterConfig, LanguageCode};
use crate::engine::NumberConverter;
use crate::languages::strategy_for;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a number converter from configuration
///
/// # Arguments
/// * `config` - Converter configuration
///
/// # Returns
/// * `Result<NumberConverter, String>` - Configured converter or error
///
/// # Example
/// ```
/// use num_verbalizer::prelude::*;
///
/// let config = ConverterConfig::financial_report(LanguageCode::English);
/// let converter = create_from_config(config).unwrap();
/// assert_eq!(converter.convert(12.5), "Twelve point Five");
/// ```
pub fn create_from_config(config: ConverterConfig) -> Result<NumberConverter, String> {
    config.validate()?;

    tracing::debug!(language = %config.language, "creating number converter");
    Ok(NumberConverter::new(strategy_for(config.language), config))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating number converters with fluent API
///
/// # Example
/// ```
/// use num_verbalizer::prelude::*;
///
/// let converter = ConverterBuilder::new(LanguageCode::German)
///     .float_fraction_digits(4)
///     .grouping_separators(vec!['\'', ' '])
///     .build()
///     .unwrap();
///
/// assert_eq!(converter.convert("1'000"), "eintausend");
/// ```
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Create a new builder for the specified language
    pub fn new(language: LanguageCode) -> Self {
        Self {
            config: ConverterConfig::new(language),
        }
    }

    // ========================================================================
    // Normalization Settings
    // ========================================================================

    /// Switch the output language
    pub fn language(mut self, language: LanguageCode) -> Self {
        self.config.language = language;
        self
    }

    /// Set fraction digits kept when expanding floats
    pub fn float_fraction_digits(mut self, digits: usize) -> Self {
        self.config.float_fraction_digits = digits;
        self
    }

    /// Set grouping separators stripped from text input
    pub fn grouping_separators(mut self, separators: Vec<char>) -> Self {
        self.config.grouping_separators = separators;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply calculator display configuration
    pub fn calculator_display(language: LanguageCode) -> Self {
        Self {
            config: ConverterConfig::calculator_display(language),
        }
    }

    /// Apply financial report configuration
    pub fn financial_report(language: LanguageCode) -> Self {
        Self {
            config: ConverterConfig::financial_report(language),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self) -> Result<NumberConverter, String> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_every_language() {
        for code in LanguageCode::ALL {
            let converter = create_from_config(ConverterConfig::new(code)).unwrap();
            assert_eq!(converter.language(), code);
            assert_eq!(converter.strategy().name(), strategy_for(code).name());
        }
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = ConverterConfig::new(LanguageCode::French).with_grouping_separators(vec!['5']);
        assert!(create_from_config(config).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let converter = ConverterBuilder::new(LanguageCode::English)
            .language(LanguageCode::Italian)
            .float_fraction_digits(3)
            .build()
            .unwrap();

        assert_eq!(converter.language(), LanguageCode::Italian);
        assert_eq!(converter.convert(2.5), "due virgola cinque");
    }

    #[test]
    fn test_builder_rejects_excess_precision() {
        let result = ConverterBuilder::new(LanguageCode::English)
            .float_fraction_digits(10_000)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_preset_builders() {
        let calculator = ConverterBuilder::calculator_display(LanguageCode::Korean);
        assert_eq!(calculator.get_config().float_fraction_digits, 20);

        let report = ConverterBuilder::financial_report(LanguageCode::English)
            .build()
            .unwrap();
        assert_eq!(report.convert(1234.5678), "One Thousand Two Hundred Thirty-Four point Five Six");
        assert_eq!(report.convert("1 234"), "One Thousand Two Hundred Thirty-Four");
    }
}
