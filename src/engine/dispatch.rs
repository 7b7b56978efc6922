// ============================================================================
// Dispatcher
// Stateless entry points keyed by language code
// ============================================================================

use crate::domain::{LanguageCode, LanguageInfo, UnsupportedLanguage};
use crate::engine::verbalize;
use crate::languages::strategy_for;
use crate::numeric::{NumberInput, DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS};

/// Convert a number to words in the language named by `code`.
///
/// The code is resolved before the input is looked at, so an unsupported
/// code fails without any conversion work.
///
/// # Example
/// ```
/// use num_verbalizer::convert;
///
/// assert_eq!(convert(1000, "en").unwrap(), "One Thousand");
/// assert_eq!(convert(100000, "zh-CN").unwrap(), "十万");
/// assert!(convert(1, "xx").is_err());
/// ```
pub fn convert(input: impl Into<NumberInput>, code: &str) -> Result<String, UnsupportedLanguage> {
    let language: LanguageCode = code.parse()?;
    Ok(convert_in(input, language))
}

/// Convert a number to words with default normalization settings.
pub fn convert_in(input: impl Into<NumberInput>, language: LanguageCode) -> String {
    let classified =
        input
            .into()
            .classify(DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS);
    verbalize(strategy_for(language), &classified)
}

/// Every supported language with its display name, English first.
pub fn supported_languages() -> Vec<LanguageInfo> {
    LanguageCode::ALL.iter().map(|code| code.info()).collect()
}

/// Supported languages as a JSON array of `{"code", "name"}` objects.
#[cfg(feature = "serde")]
pub fn supported_languages_json() -> serde_json::Result<String> {
    serde_json::to_string(&supported_languages())
}

// ============================================================================
// Per-Language Entry Points
// ============================================================================

/// English words for `input`.
pub fn to_english(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::English)
}

/// Bahasa Malaysia words for `input`.
pub fn to_malay(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Malay)
}

/// Simplified Chinese numerals for `input`.
pub fn to_chinese_simplified(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::ChineseSimplified)
}

/// Traditional Chinese numerals for `input`.
pub fn to_chinese_traditional(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::ChineseTraditional)
}

/// Spanish words for `input`, long scale (`mil millones`).
pub fn to_spanish(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Spanish)
}

/// French words for `input`.
pub fn to_french(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::French)
}

/// German words for `input`.
pub fn to_german(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::German)
}

/// Arabic words for `input`.
pub fn to_arabic(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Arabic)
}

/// Hindi words for `input`, Indian grouping (लाख, करोड़).
pub fn to_hindi(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Hindi)
}

/// Vietnamese words for `input`.
pub fn to_vietnamese(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Vietnamese)
}

/// Korean numerals for `input`.
pub fn to_korean(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Korean)
}

/// European Portuguese words for `input`, long scale.
pub fn to_portuguese(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Portuguese)
}

/// Thai numerals for `input`.
pub fn to_thai(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Thai)
}

/// Italian words for `input`.
pub fn to_italian(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Italian)
}

/// Japanese numerals for `input`.
pub fn to_japanese(input: impl Into<NumberInput>) -> String {
    convert_in(input, LanguageCode::Japanese)
}
