// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod language_strategy;
mod lexicon;

pub use language_strategy::LanguageStrategy;
pub use lexicon::{FractionLayout, Lexicon};
