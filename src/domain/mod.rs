// ============================================================================
// Domain Models Module
// Language codes, digit chunks and converter configuration
// ============================================================================

pub mod chunk;
pub mod config;
pub mod language;

pub use chunk::{segment, Chunk, Chunks, Grouping, MAX_GROUP_WIDTH};
pub use config::ConverterConfig;
pub use language::{LanguageCode, LanguageInfo, UnsupportedLanguage};
