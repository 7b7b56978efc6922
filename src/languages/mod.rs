// ============================================================================
// Languages Module
// One verbalizer per supported language
// ============================================================================

mod arabic;
mod chinese;
mod english;
mod french;
mod german;
mod hindi;
mod italian;
mod japanese;
mod korean;
mod malay;
mod portuguese;
mod spanish;
mod thai;
mod vietnamese;

pub use arabic::Arabic;
pub use chinese::{Chinese, Script};
pub use english::English;
pub use french::French;
pub use german::German;
pub use hindi::Hindi;
pub use italian::Italian;
pub use japanese::Japanese;
pub use korean::Korean;
pub use malay::Malay;
pub use portuguese::Portuguese;
pub use spanish::Spanish;
pub use thai::Thai;
pub use vietnamese::Vietnamese;

use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::LanguageStrategy;

/// Shared verbalizer for a language code.
///
/// Strategies are stateless, so one static instance per language serves
/// every caller on every thread.
pub fn strategy_for(code: LanguageCode) -> &'static dyn LanguageStrategy {
    match code {
        LanguageCode::English => &English,
        LanguageCode::Malay => &Malay,
        LanguageCode::ChineseSimplified => &Chinese::SIMPLIFIED,
        LanguageCode::ChineseTraditional => &Chinese::TRADITIONAL,
        LanguageCode::Spanish => &Spanish,
        LanguageCode::French => &French,
        LanguageCode::German => &German,
        LanguageCode::Arabic => &Arabic,
        LanguageCode::Hindi => &Hindi,
        LanguageCode::Vietnamese => &Vietnamese,
        LanguageCode::Korean => &Korean,
        LanguageCode::Portuguese => &Portuguese,
        LanguageCode::Thai => &Thai,
        LanguageCode::Italian => &Italian,
        LanguageCode::Japanese => &Japanese,
    }
}

/// Value of the group at `position`, zero when absent.
///
/// Long-scale languages read groups in (thousands, units) pairs and need
/// random access by position.
pub(crate) fn group_at(chunks: &[Chunk], position: usize) -> u32 {
    chunks
        .iter()
        .find(|c| c.position == position)
        .map_or(0, |c| c.value)
}

/// Full pipeline on text input with default normalization.
#[cfg(test)]
pub(crate) fn say(strategy: &dyn LanguageStrategy, text: &str) -> String {
    use crate::numeric::{NumberInput, DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS};

    let classified =
        NumberInput::from(text).classify(DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS);
    crate::engine::verbalize(strategy, &classified)
}
