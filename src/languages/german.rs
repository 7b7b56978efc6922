// ============================================================================
// German Verbalizer
// Compound words below a million, units before tens
// ============================================================================

use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const ONES: [&str; 10] = [
    "", "ein", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
];

const TEENS: [&str; 10] = [
    "zehn", "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn",
];

const TENS: [&str; 10] = [
    "", "zehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

const SCALE_FORMS: [(&str, &str); 9] = [
    ("", ""),
    ("tausend", "tausend"),
    ("Million", "Millionen"),
    ("Milliarde", "Milliarden"),
    ("Billion", "Billionen"),
    ("Billiarde", "Billiarden"),
    ("Trillion", "Trillionen"),
    ("Trilliarde", "Trilliarden"),
    ("Quadrillion", "Quadrillionen"),
];

const SCALES: [&str; 9] = [
    "",
    "tausend",
    "Million",
    "Milliarde",
    "Billion",
    "Billiarde",
    "Trillion",
    "Trilliarde",
    "Quadrillion",
];

const LEXICON: Lexicon = Lexicon {
    zero: "Null",
    integer_zero: "null",
    negative: "Minus ",
    point: "Komma",
    digits: [
        "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
    ],
    fraction_layout: FractionLayout::Spaced,
    infinity: "Unendlich",
    negative_infinity: "Negativ Unendlich",
    invalid: "Ungültige Nummer",
    too_large: "Zahl zu groß",
};

/// German verbalizer
///
/// Everything below a million is one word (`zweitausenddreihundert`).
/// Million and above are separate capitalized nouns with a plural.
/// A final 1 reads `eins`, and `eine` before a feminine scale noun
/// (`eine Million`, `einhunderteine Millionen`).
#[derive(Debug, Clone, Copy, Default)]
pub struct German;

impl LanguageStrategy for German {
    fn code(&self) -> LanguageCode {
        LanguageCode::German
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
            out.push_str("hundert");
        }

        match rest {
            0 => {},
            1 if chunk.position == 0 => out.push_str("eins"),
            // Million and above are feminine nouns
            1 if chunk.position >= 2 => out.push_str("eine"),
            1..=9 => out.push_str(ONES[rest]),
            10..=19 => out.push_str(TEENS[rest - 10]),
            _ => {
                if rest % 10 > 0 {
                    out.push_str(ONES[rest % 10]);
                    out.push_str("und");
                }
                out.push_str(TENS[rest / 10]);
            },
        }
    }

    fn scale_phrase(&self, chunk: &Chunk, out: &mut String) {
        match chunk.position {
            0 => self.chunk_words(chunk, out),
            1 => {
                self.chunk_words(chunk, out);
                out.push_str("tausend");
            },
            position => {
                let (one, many) = SCALE_FORMS[position];
                if chunk.value == 1 {
                    out.push_str("eine ");
                    out.push_str(one);
                } else {
                    self.chunk_words(chunk, out);
                    out.push(' ');
                    out.push_str(many);
                }
            },
        }
    }

    fn joiner(&self, previous: &Chunk, _next: &Chunk) -> &str {
        if previous.position == 1 {
            ""
        } else {
            " "
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::say;

    #[test]
    fn test_units_before_tens() {
        assert_eq!(say(&German, "21"), "einundzwanzig");
        assert_eq!(say(&German, "99"), "neunundneunzig");
        assert_eq!(say(&German, "17"), "siebzehn");
    }

    #[test]
    fn test_eins() {
        assert_eq!(say(&German, "1"), "eins");
        assert_eq!(say(&German, "101"), "einhunderteins");
        assert_eq!(say(&German, "1001"), "eintausendeins");
    }

    #[test]
    fn test_compounds_below_a_million() {
        assert_eq!(say(&German, "1000"), "eintausend");
        assert_eq!(
            say(&German, "2345"),
            "zweitausenddreihundertfünfundvierzig"
        );
        assert_eq!(say(&German, "21000"), "einundzwanzigtausend");
    }

    #[test]
    fn test_large_scales() {
        assert_eq!(say(&German, "1000000"), "eine Million");
        assert_eq!(say(&German, "2000000"), "zwei Millionen");
        assert_eq!(say(&German, "1000001"), "eine Million eins");
        assert_eq!(say(&German, "3000000000"), "drei Milliarden");
        assert_eq!(
            say(&German, "2001000"),
            "zwei Millionen eintausend"
        );
    }

    #[test]
    fn test_feminine_one_before_scale_nouns() {
        assert_eq!(say(&German, "101000000"), "einhunderteine Millionen");
        assert_eq!(say(&German, "201000000000"), "zweihunderteine Milliarden");
        assert_eq!(say(&German, "21000000"), "einundzwanzig Millionen");
        assert_eq!(say(&German, "101000"), "einhunderteintausend");
    }

    #[test]
    fn test_fraction_and_sign() {
        assert_eq!(say(&German, "1.5"), "eins Komma fünf");
        assert_eq!(say(&German, "0.1"), "null Komma eins");
        assert_eq!(say(&German, "-7"), "Minus sieben");
        assert_eq!(say(&German, "0"), "Null");
    }
}
