// ============================================================================
// Italian Verbalizer
// Elided tens, mille/mila compounds, spaced milioni and above
// ============================================================================

use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const ONES: [&str; 10] = [
    "", "uno", "due", "tre", "quattro", "cinque", "sei", "sette", "otto", "nove",
];

const TEENS: [&str; 10] = [
    "dieci",
    "undici",
    "dodici",
    "tredici",
    "quattordici",
    "quindici",
    "sedici",
    "diciassette",
    "diciotto",
    "diciannove",
];

const TENS: [&str; 10] = [
    "", "dieci", "venti", "trenta", "quaranta", "cinquanta", "sessanta", "settanta", "ottanta",
    "novanta",
];

const SCALE_FORMS: [(&str, &str); 8] = [
    ("", ""),
    ("mille", "mila"),
    ("milione", "milioni"),
    ("miliardo", "miliardi"),
    ("bilione", "bilioni"),
    ("biliardo", "biliardi"),
    ("trilione", "trilioni"),
    ("triliardo", "triliardi"),
];

const SCALES: [&str; 8] = [
    "", "mille", "milione", "miliardo", "bilione", "biliardo", "trilione", "triliardo",
];

const LEXICON: Lexicon = Lexicon {
    zero: "Zero",
    integer_zero: "zero",
    negative: "Meno ",
    point: "virgola",
    digits: [
        "zero", "uno", "due", "tre", "quattro", "cinque", "sei", "sette", "otto", "nove",
    ],
    fraction_layout: FractionLayout::Spaced,
    infinity: "Infinito",
    negative_infinity: "Infinito negativo",
    invalid: "Numero non valido",
    too_large: "Numero troppo grande",
};

/// Italian verbalizer
///
/// Tens lose their final vowel before `uno` and `otto`, and `cento` before
/// `otto` and `ottanta`. A final `tre` after tens or hundreds is accented
/// unless `mila` is glued on. Thousands are glued to what follows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Italian;

impl LanguageStrategy for Italian {
    fn code(&self) -> LanguageCode {
        LanguageCode::Italian
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
        // a glued mila drops the accent (ventitremila)
        let accent = chunk.position != 1;

        match hundreds {
            0 => {},
            1 => out.push_str("cento"),
            h => {
                out.push_str(ONES[h]);
                out.push_str("cento");
            },
        }
        if hundreds > 0 && (rest == 8 || rest / 10 == 8) {
            // centotto, centottanta
            out.pop();
        }

        match rest {
            0 => {},
            3 if hundreds > 0 && accent => out.push_str("tré"),
            1..=9 => out.push_str(ONES[rest]),
            10..=19 => out.push_str(TEENS[rest - 10]),
            _ => {
                let tens = TENS[rest / 10];
                let units = rest % 10;
                if units == 1 || units == 8 {
                    // ventuno, ventotto
                    out.push_str(&tens[..tens.len() - 1]);
                } else {
                    out.push_str(tens);
                }
                match units {
                    0 => {},
                    3 if accent => out.push_str("tré"),
                    u => out.push_str(ONES[u]),
                }
            },
        }
    }

    fn scale_phrase(&self, chunk: &Chunk, out: &mut String) {
        let (one, many) = SCALE_FORMS[chunk.position];
        match (chunk.position, chunk.value) {
            (0, _) => self.chunk_words(chunk, out),
            (1, 1) => out.push_str(one),
            (1, _) => {
                self.chunk_words(chunk, out);
                out.push_str(many);
            },
            (_, 1) => {
                out.push_str("un ");
                out.push_str(one);
            },
            _ => {
                self.chunk_words(chunk, out);
                out.push(' ');
                out.push_str(many);
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
    fn test_elision() {
        assert_eq!(say(&Italian, "21"), "ventuno");
        assert_eq!(say(&Italian, "28"), "ventotto");
        assert_eq!(say(&Italian, "23"), "ventitré");
        assert_eq!(say(&Italian, "3"), "tre");
        assert_eq!(say(&Italian, "91"), "novantuno");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(say(&Italian, "100"), "cento");
        assert_eq!(say(&Italian, "200"), "duecento");
        assert_eq!(say(&Italian, "145"), "centoquarantacinque");
        assert_eq!(say(&Italian, "108"), "centotto");
        assert_eq!(say(&Italian, "180"), "centottanta");
        assert_eq!(say(&Italian, "888"), "ottocentottantotto");
        assert_eq!(say(&Italian, "103"), "centotré");
        assert_eq!(say(&Italian, "303"), "trecentotré");
    }

    #[test]
    fn test_accent_dropped_before_mila() {
        assert_eq!(say(&Italian, "23000"), "ventitremila");
        assert_eq!(say(&Italian, "103000"), "centotremila");
        assert_eq!(say(&Italian, "3000"), "tremila");
        assert_eq!(say(&Italian, "23000000"), "ventitré milioni");
    }

    #[test]
    fn test_thousands_are_glued() {
        assert_eq!(say(&Italian, "1000"), "mille");
        assert_eq!(say(&Italian, "2000"), "duemila");
        assert_eq!(say(&Italian, "2300"), "duemilatrecento");
        assert_eq!(say(&Italian, "1100"), "millecento");
    }

    #[test]
    fn test_millions() {
        assert_eq!(say(&Italian, "1000000"), "un milione");
        assert_eq!(say(&Italian, "2000000"), "due milioni");
        assert_eq!(say(&Italian, "1200000"), "un milione duecentomila");
    }

    #[test]
    fn test_zero_fraction_and_sign() {
        assert_eq!(say(&Italian, "0"), "Zero");
        assert_eq!(say(&Italian, "0.5"), "zero virgola cinque");
        assert_eq!(say(&Italian, "-4"), "Meno quattro");
    }
}
