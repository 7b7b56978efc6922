// ============================================================================
// Language Codes
// Closed set of supported languages and their display names
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LanguageCode {
    /// `en`
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    /// `ms` (Bahasa Malaysia)
    #[cfg_attr(feature = "serde", serde(rename = "ms"))]
    Malay,
    /// `zh-CN`
    #[cfg_attr(feature = "serde", serde(rename = "zh-CN"))]
    ChineseSimplified,
    /// `zh-TW`
    #[cfg_attr(feature = "serde", serde(rename = "zh-TW"))]
    ChineseTraditional,
    /// `es`
    #[cfg_attr(feature = "serde", serde(rename = "es"))]
    Spanish,
    /// `fr`
    #[cfg_attr(feature = "serde", serde(rename = "fr"))]
    French,
    /// `de`
    #[cfg_attr(feature = "serde", serde(rename = "de"))]
    German,
    /// `ar`
    #[cfg_attr(feature = "serde", serde(rename = "ar"))]
    Arabic,
    /// `hi`
    #[cfg_attr(feature = "serde", serde(rename = "hi"))]
    Hindi,
    /// `vi`
    #[cfg_attr(feature = "serde", serde(rename = "vi"))]
    Vietnamese,
    /// `ko`
    #[cfg_attr(feature = "serde", serde(rename = "ko"))]
    Korean,
    /// `pt` (European Portuguese forms)
    #[cfg_attr(feature = "serde", serde(rename = "pt"))]
    Portuguese,
    /// `th`
    #[cfg_attr(feature = "serde", serde(rename = "th"))]
    Thai,
    /// `it`
    #[cfg_attr(feature = "serde", serde(rename = "it"))]
    Italian,
    /// `ja`
    #[cfg_attr(feature = "serde", serde(rename = "ja"))]
    Japanese,
}

impl LanguageCode {
    /// Every supported language: English first, the rest in the order a
    /// language selector lists them.
    pub const ALL: [LanguageCode; 15] = [
        LanguageCode::English,
        LanguageCode::Arabic,
        LanguageCode::Malay,
        LanguageCode::ChineseSimplified,
        LanguageCode::ChineseTraditional,
        LanguageCode::French,
        LanguageCode::German,
        LanguageCode::Hindi,
        LanguageCode::Italian,
        LanguageCode::Japanese,
        LanguageCode::Korean,
        LanguageCode::Portuguese,
        LanguageCode::Spanish,
        LanguageCode::Thai,
        LanguageCode::Vietnamese,
    ];

    /// The code as callers pass it, e.g. `"zh-CN"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Malay => "ms",
            LanguageCode::ChineseSimplified => "zh-CN",
            LanguageCode::ChineseTraditional => "zh-TW",
            LanguageCode::Spanish => "es",
            LanguageCode::French => "fr",
            LanguageCode::German => "de",
            LanguageCode::Arabic => "ar",
            LanguageCode::Hindi => "hi",
            LanguageCode::Vietnamese => "vi",
            LanguageCode::Korean => "ko",
            LanguageCode::Portuguese => "pt",
            LanguageCode::Thai => "th",
            LanguageCode::Italian => "it",
            LanguageCode::Japanese => "ja",
        }
    }

    /// Human-readable name for a language selector.
    pub const fn name(self) -> &'static str {
        match self {
            LanguageCode::English => "English",
            LanguageCode::Malay => "Bahasa Malaysia",
            LanguageCode::ChineseSimplified => "Chinese (Simplified)",
            LanguageCode::ChineseTraditional => "Chinese (Traditional)",
            LanguageCode::Spanish => "Spanish",
            LanguageCode::French => "French",
            LanguageCode::German => "German",
            LanguageCode::Arabic => "Arabic",
            LanguageCode::Hindi => "Hindi",
            LanguageCode::Vietnamese => "Vietnamese",
            LanguageCode::Korean => "Korean",
            LanguageCode::Portuguese => "Portuguese",
            LanguageCode::Thai => "Thai",
            LanguageCode::Italian => "Italian",
            LanguageCode::Japanese => "Japanese",
        }
    }

    /// Code and name together.
    pub const fn info(self) -> LanguageInfo {
        LanguageInfo {
            code: self,
            name: self.name(),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    /// Parse a code, ignoring ASCII case and accepting `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        LanguageCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

// ============================================================================
// Capability Entry
// ============================================================================

/// One entry of the capability list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LanguageInfo {
    /// Language code
    pub code: LanguageCode,
    /// Display name
    pub name: &'static str,
}

// ============================================================================
// Errors
// ============================================================================

/// A language code outside the supported set.
///
/// This is a caller bug (for example a stale code persisted before a
/// language was removed), so it is reported rather than silently replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedLanguage(pub String);

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language code: {:?}", self.0)
    }
}

impl std::error::Error for UnsupportedLanguage {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_round_trip_codes() {
        for code in LanguageCode::ALL {
            assert_eq!(code.as_str().parse::<LanguageCode>(), Ok(code));
        }
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!("ZH-cn".parse::<LanguageCode>(), Ok(LanguageCode::ChineseSimplified));
        assert_eq!("zh_TW".parse::<LanguageCode>(), Ok(LanguageCode::ChineseTraditional));
        assert_eq!(" ja ".parse::<LanguageCode>(), Ok(LanguageCode::Japanese));
    }

    #[test]
    fn test_unsupported_code() {
        let err = "xx".parse::<LanguageCode>().unwrap_err();
        assert_eq!(err, UnsupportedLanguage("xx".to_string()));
        assert_eq!(err.to_string(), "unsupported language code: \"xx\"");
        assert!("zh".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn test_all_is_complete_and_unique() {
        let unique: HashSet<_> = LanguageCode::ALL.iter().collect();
        assert_eq!(unique.len(), 15);
        assert_eq!(LanguageCode::ALL[0], LanguageCode::English);
    }

    #[test]
    fn test_info() {
        let info = LanguageCode::Malay.info();
        assert_eq!(info.code, LanguageCode::Malay);
        assert_eq!(info.name, "Bahasa Malaysia");
        assert_eq!(LanguageCode::Malay.to_string(), "ms");
    }
}
