// ============================================================================
// English Verbalizer
// Short scale, three-digit groups, title-cased words
// ============================================================================

use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const SCALES: [&str; 22] = [
    "",
    "Thousand",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
    "Sextillion",
    "Septillion",
    "Octillion",
    "Nonillion",
    "Decillion",
    "Undecillion",
    "Duodecillion",
    "Tredecillion",
    "Quattuordecillion",
    "Quindecillion",
    "Sexdecillion",
    "Septendecillion",
    "Octodecillion",
    "Novemdecillion",
    "Vigintillion",
];

const LEXICON: Lexicon = Lexicon {
    zero: "Zero",
    integer_zero: "Zero",
    negative: "Negative ",
    point: "point",
    digits: [
        "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
    ],
    fraction_layout: FractionLayout::Spaced,
    infinity: "Infinity",
    negative_infinity: "Negative Infinity",
    invalid: "Invalid Number",
    too_large: "Number too large for words",
};

/// English (short scale) verbalizer
///
/// Groups of three digits named Thousand through Vigintillion. The scale
/// word never inflects and keeps its count: `1000` is "One Thousand".
///
/// # Example
/// ```text
/// 1234.5 -> One Thousand Two Hundred Thirty-Four point Five
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl LanguageStrategy for English {
    fn code(&self) -> LanguageCode {
        LanguageCode::English
    }

    fn lexicon(&self) -> &Lexicon {
        &LEXICON
    }

    fn scale_table(&self) -> &[&'static str] {
        &SCALES
    }

    fn chunk_words(&self, chunk: &Chunk, out: &mut String) {
        let hundreds = (chunk.value / 100) as usize;
        let rest = (chunk.value % 100) as usize;

        if hundreds > 0 {
            out.push_str(ONES[hundreds]);
            out.push_str(" Hundred");
            if rest > 0 {
                out.push(' ');
            }
        }

        match rest {
            0 => {},
            1..=9 => out.push_str(ONES[rest]),
            10..=19 => out.push_str(TEENS[rest - 10]),
            _ => {
                out.push_str(TENS[rest / 10]);
                if rest % 10 > 0 {
                    out.push('-');
                    out.push_str(ONES[rest % 10]);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::say;

    #[test]
    fn test_group_boundaries() {
        assert_eq!(say(&English, "999"), "Nine Hundred Ninety-Nine");
        assert_eq!(say(&English, "1000"), "One Thousand");
        assert_eq!(say(&English, "105"), "One Hundred Five");
        assert_eq!(say(&English, "110"), "One Hundred Ten");
        assert_eq!(say(&English, "40"), "Forty");
    }

    #[test]
    fn test_multiple_scales() {
        assert_eq!(
            say(&English, "1234567"),
            "One Million Two Hundred Thirty-Four Thousand Five Hundred Sixty-Seven"
        );
        assert_eq!(say(&English, "1000000001"), "One Billion One");
        assert_eq!(say(&English, "2000000"), "Two Million");
    }

    #[test]
    fn test_fractions_read_digit_by_digit() {
        assert_eq!(say(&English, "1.5"), "One point Five");
        assert_eq!(say(&English, "1.23"), "One point Two Three");
        assert_eq!(say(&English, "0.5"), "Zero point Five");
        assert_eq!(say(&English, "3.05"), "Three point Zero Five");
    }

    #[test]
    fn test_sign_and_specials() {
        assert_eq!(say(&English, "-42"), "Negative Forty-Two");
        assert_eq!(say(&English, "0"), "Zero");
        assert_eq!(say(&English, "-Infinity"), "Negative Infinity");
        assert_eq!(say(&English, "oops"), "Invalid Number");
    }

    #[test]
    fn test_largest_named_scale() {
        let mut digits = String::from("1");
        digits.push_str(&"0".repeat(65));
        assert_eq!(say(&English, &digits), "One Hundred Vigintillion");

        digits.push('0');
        assert_eq!(say(&English, &digits), "Number too large for words");
        assert_eq!(
            say(&English, &format!("-{}", digits)),
            "Negative Number too large for words"
        );
    }
}
