// ============================================================================
// Lexicon
// Fixed words every language supplies outside its group grammar
// ============================================================================

use crate::numeric::SpecialValue;

/// How fraction digits are laid out after the decimal marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionLayout {
    /// `" point One Two"`: spaces around the marker and between digits
    Spaced,
    /// `"点一二"`: marker and digits written as-is, no separators added
    Compact,
}

/// Fixed vocabulary of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon {
    /// Phrase for the value zero
    pub zero: &'static str,
    /// Integer word when only a fraction is present (`0.5`)
    pub integer_zero: &'static str,
    /// Prefix for negative values, including any trailing space
    pub negative: &'static str,
    /// Decimal marker word
    pub point: &'static str,
    /// Names of the digits 0-9 for fraction reading
    pub digits: [&'static str; 10],
    /// Fraction layout
    pub fraction_layout: FractionLayout,
    /// Phrase for positive infinity
    pub infinity: &'static str,
    /// Phrase for negative infinity
    pub negative_infinity: &'static str,
    /// Phrase for NaN and unparsable input
    pub invalid: &'static str,
    /// Phrase when the integer part exceeds the named scales
    pub too_large: &'static str,
}

impl Lexicon {
    /// Fixed phrase for a special value.
    pub fn special(&self, value: SpecialValue) -> &'static str {
        match value {
            SpecialValue::Zero => self.zero,
            SpecialValue::PositiveInfinity => self.infinity,
            SpecialValue::NegativeInfinity => self.negative_infinity,
            SpecialValue::Invalid => self.invalid,
        }
    }

    /// Name of one ASCII digit.
    #[inline]
    pub fn digit(&self, ascii: u8) -> &'static str {
        self.digits[usize::from(ascii.saturating_sub(b'0')).min(9)]
    }
}
