// ============================================================================
// Malay Verbalizer
// Bahasa Malaysia, short scale with "se-" for a single hundred/thousand
// ============================================================================

use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const UNITS: [&str; 10] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "lapan", "sembilan",
];

const BELAS: [&str; 10] = [
    "sepuluh",
    "sebelas",
    "dua belas",
    "tiga belas",
    "empat belas",
    "lima belas",
    "enam belas",
    "tujuh belas",
    "lapan belas",
    "sembilan belas",
];

const PULUH: [&str; 10] = [
    "",
    "sepuluh",
    "dua puluh",
    "tiga puluh",
    "empat puluh",
    "lima puluh",
    "enam puluh",
    "tujuh puluh",
    "lapan puluh",
    "sembilan puluh",
];

const SCALES: [&str; 12] = [
    "",
    "ribu",
    "juta",
    "bilion",
    "trilion",
    "kuadrilion",
    "kuintilion",
    "sekstilion",
    "septilion",
    "oktilion",
    "nonilion",
    "desilion",
];

const LEXICON: Lexicon = Lexicon {
    zero: "Sifar",
    integer_zero: "Sifar",
    negative: "Negatif ",
    point: "perpuluhan",
    digits: [
        "sifar", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "lapan", "sembilan",
    ],
    fraction_layout: FractionLayout::Spaced,
    infinity: "Infiniti",
    negative_infinity: "Negatif Infiniti",
    invalid: "Nombor Tidak Sah",
    too_large: "Nombor terlalu besar untuk perkataan",
};

/// Malay verbalizer
///
/// One hundred and one thousand take the prefix "se-" (`seratus`,
/// `seribu`); higher scales keep `satu` (`satu juta`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Malay;

impl LanguageStrategy for Malay {
    fn code(&self) -> LanguageCode {
        LanguageCode::Malay
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

        if hundreds == 1 {
            out.push_str("seratus");
        } else if hundreds > 1 {
            out.push_str(UNITS[hundreds]);
            out.push_str(" ratus");
        }
        if hundreds > 0 && rest > 0 {
            out.push(' ');
        }

        match rest {
            0 => {},
            1..=9 => out.push_str(UNITS[rest]),
            10..=19 => out.push_str(BELAS[rest - 10]),
            _ => {
                out.push_str(PULUH[rest / 10]);
                if rest % 10 > 0 {
                    out.push(' ');
                    out.push_str(UNITS[rest % 10]);
                }
            },
        }
    }

    fn scale_phrase(&self, chunk: &Chunk, out: &mut String) {
        if chunk.position == 1 && chunk.value == 1 {
            out.push_str("seribu");
            return;
        }
        self.chunk_words(chunk, out);
        if chunk.position > 0 {
            out.push(' ');
            out.push_str(SCALES[chunk.position]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::say;

    #[test]
    fn test_se_prefix() {
        assert_eq!(say(&Malay, "100"), "seratus");
        assert_eq!(say(&Malay, "111"), "seratus sebelas");
        assert_eq!(say(&Malay, "1000"), "seribu");
        assert_eq!(say(&Malay, "1000000"), "satu juta");
    }

    #[test]
    fn test_compound_numbers() {
        assert_eq!(say(&Malay, "2500"), "dua ribu lima ratus");
        assert_eq!(say(&Malay, "21"), "dua puluh satu");
        assert_eq!(say(&Malay, "1001"), "seribu satu");
        assert_eq!(say(&Malay, "12000"), "dua belas ribu");
    }

    #[test]
    fn test_sign_and_fraction() {
        assert_eq!(say(&Malay, "-21"), "Negatif dua puluh satu");
        assert_eq!(say(&Malay, "0.5"), "Sifar perpuluhan lima");
        assert_eq!(say(&Malay, "0"), "Sifar");
    }
}
