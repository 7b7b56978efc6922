// ============================================================================
// Number Verbalizer Library
// Lossless number-to-words conversion with pluggable language strategies
// ============================================================================

//! # Number Verbalizer
//!
//! Converts numbers into written words in fifteen languages.
//!
//! ## Features
//!
//! - **Lossless digits**: input is normalized once into sign + digit strings,
//!   so a 21-digit value or `0.1 + 0.2` never picks up float noise
//! - **Pluggable language strategies** sharing one segmenter and assembler
//! - **Short, long, myriad, Indian and Thai scales**
//! - **Fixed phrases** for zero, infinities, invalid input and overflow
//!
//! ## Example
//!
//! ```rust
//! use num_verbalizer::prelude::*;
//!
//! // Stateless entry point keyed by language code
//! assert_eq!(convert(1000, "en").unwrap(), "One Thousand");
//! assert_eq!(convert("1.23", "en").unwrap(), "One point Two Three");
//! assert_eq!(convert(100000, "zh-CN").unwrap(), "十万");
//!
//! // Configured converter
//! let converter = ConverterBuilder::financial_report(LanguageCode::French)
//!     .build()
//!     .unwrap();
//! assert_eq!(converter.convert(80.0), "quatre-vingts");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod languages;
pub mod numeric;

pub use engine::{
    convert, supported_languages, to_arabic, to_chinese_simplified, to_chinese_traditional,
    to_english, to_french, to_german, to_hindi, to_italian, to_japanese, to_korean, to_malay,
    to_portuguese, to_spanish, to_thai, to_vietnamese,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConverterConfig, LanguageCode, LanguageInfo, UnsupportedLanguage};
    pub use crate::engine::{
        convert, convert_in, create_from_config, supported_languages, ConverterBuilder,
        NumberConverter,
    };
    pub use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};
    pub use crate::numeric::{CanonicalDecimal, NumberInput, NumericError, SpecialValue};
}
