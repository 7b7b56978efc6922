// ============================================================================
// French Verbalizer
// Vigesimal 70-99, invariable mille, long scale millions/milliards
// ============================================================================

use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const ONES: [&str; 10] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];

const TEENS: [&str; 10] = [
    "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
    "dix-neuf",
];

const TENS: [&str; 7] = ["", "dix", "vingt", "trente", "quarante", "cinquante", "soixante"];

/// (singular, plural) per scale position.
const SCALE_FORMS: [(&str, &str); 9] = [
    ("", ""),
    ("mille", "mille"),
    ("million", "millions"),
    ("milliard", "milliards"),
    ("billion", "billions"),
    ("billiard", "billiards"),
    ("trillion", "trillions"),
    ("trilliard", "trilliards"),
    ("quadrillion", "quadrillions"),
];

const SCALES: [&str; 9] = [
    "",
    "mille",
    "million",
    "milliard",
    "billion",
    "billiard",
    "trillion",
    "trilliard",
    "quadrillion",
];

const LEXICON: Lexicon = Lexicon {
    zero: "Zéro",
    integer_zero: "zéro",
    negative: "Moins ",
    point: "virgule",
    digits: [
        "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
    ],
    fraction_layout: FractionLayout::Spaced,
    infinity: "Infini",
    negative_infinity: "Infini Négatif",
    invalid: "Nombre Invalide",
    too_large: "Nombre trop grand",
};

/// French verbalizer
///
/// `cent` and `quatre-vingt` take a plural s only when they end the number
/// and are not followed by `mille`. `mille` never inflects and is never
/// preceded by `un`.
#[derive(Debug, Clone, Copy, Default)]
pub struct French;

impl French {
    /// Words for 0-999; `before_mille` drops the plural s.
    fn group_words(value: u32, before_mille: bool, out: &mut String) {
        let hundreds = (value / 100) as usize;
        let rest = (value % 100) as usize;

        if hundreds > 0 {
            if hundreds > 1 {
                out.push_str(ONES[hundreds]);
                out.push(' ');
            }
            out.push_str("cent");
            if hundreds > 1 && rest == 0 && !before_mille {
                out.push('s');
            }
            if rest > 0 {
                out.push(' ');
            }
        }

        Self::below_hundred(rest, before_mille, out);
    }

    fn below_hundred(n: usize, before_mille: bool, out: &mut String) {
        match n {
            0 => {},
            1..=9 => out.push_str(ONES[n]),
            10..=19 => out.push_str(TEENS[n - 10]),
            20..=69 => {
                out.push_str(TENS[n / 10]);
                match n % 10 {
                    0 => {},
                    1 => out.push_str(" et un"),
                    u => {
                        out.push('-');
                        out.push_str(ONES[u]);
                    },
                }
            },
            70..=79 => {
                out.push_str("soixante");
                if n == 71 {
                    out.push_str(" et onze");
                } else {
                    out.push('-');
                    out.push_str(TEENS[n - 70]);
                }
            },
            _ => {
                out.push_str("quatre-vingt");
                match n {
                    80 if !before_mille => out.push('s'),
                    80 => {},
                    81..=89 => {
                        out.push('-');
                        out.push_str(ONES[n - 80]);
                    },
                    _ => {
                        out.push('-');
                        out.push_str(TEENS[n - 90]);
                    },
                }
            },
        }
    }
}

impl LanguageStrategy for French {
    fn code(&self) -> LanguageCode {
        LanguageCode::French
    }

    fn lexicon(&self) -> &Lexicon {
        &LEXICON
    }

    fn scale_table(&self) -> &[&'static str] {
        &SCALES
    }

    fn chunk_words(&self, chunk: &Chunk, out: &mut String) {
        Self::group_words(chunk.value, chunk.position == 1, out);
    }

    fn scale_phrase(&self, chunk: &Chunk, out: &mut String) {
        match chunk.position {
            0 => self.chunk_words(chunk, out),
            1 if chunk.value == 1 => out.push_str("mille"),
            position => {
                self.chunk_words(chunk, out);
                let (one, many) = SCALE_FORMS[position];
                out.push(' ');
                out.push_str(if chunk.value > 1 { many } else { one });
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::say;

    #[test]
    fn test_seventies_and_nineties() {
        assert_eq!(say(&French, "70"), "soixante-dix");
        assert_eq!(say(&French, "71"), "soixante et onze");
        assert_eq!(say(&French, "75"), "soixante-quinze");
        assert_eq!(say(&French, "91"), "quatre-vingt-onze");
        assert_eq!(say(&French, "99"), "quatre-vingt-dix-neuf");
    }

    #[test]
    fn test_plural_s() {
        assert_eq!(say(&French, "80"), "quatre-vingts");
        assert_eq!(say(&French, "81"), "quatre-vingt-un");
        assert_eq!(say(&French, "200"), "deux cents");
        assert_eq!(say(&French, "201"), "deux cent un");
        assert_eq!(say(&French, "80000"), "quatre-vingt mille");
        assert_eq!(say(&French, "200000"), "deux cent mille");
        assert_eq!(say(&French, "80000000"), "quatre-vingts millions");
    }

    #[test]
    fn test_et_un() {
        assert_eq!(say(&French, "21"), "vingt et un");
        assert_eq!(say(&French, "61"), "soixante et un");
    }

    #[test]
    fn test_scales() {
        assert_eq!(say(&French, "100"), "cent");
        assert_eq!(say(&French, "1000"), "mille");
        assert_eq!(say(&French, "1001"), "mille un");
        assert_eq!(say(&French, "1000000"), "un million");
        assert_eq!(say(&French, "2000000"), "deux millions");
        assert_eq!(say(&French, "3000000000"), "trois milliards");
    }

    #[test]
    fn test_zero_fraction_and_sign() {
        assert_eq!(say(&French, "0"), "Zéro");
        assert_eq!(say(&French, "0.5"), "zéro virgule cinq");
        assert_eq!(say(&French, "1.5"), "un virgule cinq");
        assert_eq!(say(&French, "-3"), "Moins trois");
    }
}
