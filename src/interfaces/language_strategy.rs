// ============================================================================
// Language Strategy Interface
// Defines the contract for pluggable per-language verbalizers
// ============================================================================

use super::lexicon::{FractionLayout, Lexicon};
use crate::domain::{segment, Chunk, Grouping, LanguageCode};
use crate::numeric::{NumericError, NumericResult};

/// Strategy pattern interface for number verbalization
/// Implementations: one per supported language (English, French, Chinese, ...)
///
/// Every method appends to a caller-owned buffer so a whole conversion
/// builds a single `String`.
pub trait LanguageStrategy: Send + Sync {
    /// Language implemented by this strategy
    fn code(&self) -> LanguageCode;

    /// Get the language name for logging/metrics
    fn name(&self) -> &str {
        self.code().name()
    }

    /// Fixed words: zero, sign, decimal marker, special phrases
    fn lexicon(&self) -> &Lexicon;

    /// Digit grouping; three-digit short scale unless overridden
    fn grouping(&self) -> Grouping {
        Grouping::uniform(3)
    }

    /// Scale words indexed by chunk position (index 0 is the units group)
    fn scale_table(&self) -> &[&'static str];

    /// Number of chunk positions this language can name
    fn scale_count(&self) -> usize {
        self.scale_table().len()
    }

    /// Group verbalizer: the chunk's value in words, without a scale word
    ///
    /// # Arguments
    /// * `chunk` - A non-zero chunk
    /// * `out` - Buffer to append to
    fn chunk_words(&self, chunk: &Chunk, out: &mut String);

    /// Scale-name resolver: chunk words plus the scale word for its position
    ///
    /// Default: `"<words> <scale>"`, bare words for the units group.
    fn scale_phrase(&self, chunk: &Chunk, out: &mut String) {
        self.chunk_words(chunk, out);
        if let Some(scale) = self.scale_table().get(chunk.position) {
            if !scale.is_empty() {
                out.push(' ');
                out.push_str(scale);
            }
        }
    }

    /// Separator between two consecutive non-zero phrases
    fn joiner(&self, _previous: &Chunk, _next: &Chunk) -> &str {
        " "
    }

    /// Assembler: join non-zero chunk phrases from most to least significant
    ///
    /// Zero chunks contribute nothing, so no stray scale word or doubled
    /// joiner appears around them.
    fn assemble(&self, chunks: &[Chunk], out: &mut String) {
        let mut previous: Option<&Chunk> = None;
        for chunk in chunks.iter().filter(|c| !c.is_zero()) {
            if let Some(prev) = previous {
                out.push_str(self.joiner(prev, chunk));
            }
            self.scale_phrase(chunk, out);
            previous = Some(chunk);
        }
    }

    /// Integer part in words; writes nothing when the integer part is zero
    ///
    /// # Errors
    /// Returns `MagnitudeOverflow` when there are more chunks than named
    /// scale positions. Nothing is written in that case.
    fn integer_words(&self, digits: &str, out: &mut String) -> NumericResult<()> {
        let grouping = self.grouping();
        let chunks = segment(digits, grouping);

        if chunks.len() > self.scale_count() {
            return Err(NumericError::MagnitudeOverflow {
                digits: digits.len(),
                max_digits: grouping.capacity(self.scale_count()),
            });
        }

        self.assemble(&chunks, out);
        Ok(())
    }

    /// Decimal-part verbalizer: marker word, then each digit on its own
    ///
    /// Digits are never grouped: `"23"` reads as two then three. An empty
    /// fraction writes nothing.
    fn fraction_words(&self, digits: &str, out: &mut String) {
        if digits.is_empty() {
            return;
        }

        let lexicon = self.lexicon();
        match lexicon.fraction_layout {
            FractionLayout::Spaced => {
                out.push(' ');
                out.push_str(lexicon.point);
                for b in digits.bytes() {
                    out.push(' ');
                    out.push_str(lexicon.digit(b));
                }
            },
            FractionLayout::Compact => {
                out.push_str(lexicon.point);
                for b in digits.bytes() {
                    out.push_str(lexicon.digit(b));
                }
            },
        }
    }
}
