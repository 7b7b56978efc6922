// ============================================================================
// Engine Module
// Contains the conversion pipeline and its entry points
// ============================================================================

mod converter;
mod dispatch;

pub mod factory;

pub use converter::{verbalize, NumberConverter};
#[cfg(feature = "serde")]
pub use dispatch::supported_languages_json;
pub use dispatch::{
    convert, convert_in, supported_languages, to_arabic, to_chinese_simplified,
    to_chinese_traditional, to_english, to_french, to_german, to_hindi, to_italian, to_japanese,
    to_korean, to_malay, to_portuguese, to_spanish, to_thai, to_vietnamese,
};
pub use factory::{create_from_config, ConverterBuilder};
