// ============================================================================
// Portuguese Verbalizer
// European Portuguese, long scale (milhão, mil milhões, bilião)
// ============================================================================

use super::group_at;
use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const ONES: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const TEENS: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "catorze",
    "quinze",
    "dezasseis",
    "dezassete",
    "dezoito",
    "dezanove",
];

const TENS: [&str; 10] = [
    "", "dez", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

const LIOES: [(&str, &str); 5] = [
    ("milhão", "milhões"),
    ("bilião", "biliões"),
    ("trilião", "triliões"),
    ("quatrilião", "quatriliões"),
    ("quintilião", "quintiliões"),
];

const SCALES: [&str; 12] = [
    "",
    "mil",
    "milhão",
    "mil",
    "bilião",
    "mil",
    "trilião",
    "mil",
    "quatrilião",
    "mil",
    "quintilião",
    "mil",
];

const LEXICON: Lexicon = Lexicon {
    zero: "Zero",
    integer_zero: "zero",
    negative: "Menos ",
    point: "vírgula",
    digits: [
        "zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
    ],
    fraction_layout: FractionLayout::Spaced,
    infinity: "Infinito",
    negative_infinity: "Infinito Negativo",
    invalid: "Número Inválido",
    too_large: "Número demasiado grande",
};

/// Portuguese verbalizer
///
/// `e` joins hundreds, tens and units inside a group. Between groups it
/// appears only before the last non-zero group, and only when that group is
/// below 100 or a round hundred (`mil e duzentos`, `mil duzentos e trinta`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Portuguese;

impl Portuguese {
    fn group_words(value: u32, out: &mut String) {
        if value == 100 {
            out.push_str("cem");
            return;
        }

        let hundreds = (value / 100) as usize;
        let rest = (value % 100) as usize;

        out.push_str(HUNDREDS[hundreds]);
        if hundreds > 0 && rest > 0 {
            out.push_str(" e ");
        }

        match rest {
            0 => {},
            1..=9 => out.push_str(ONES[rest]),
            10..=19 => out.push_str(TEENS[rest - 10]),
            _ => {
                out.push_str(TENS[rest / 10]);
                if rest % 10 > 0 {
                    out.push_str(" e ");
                    out.push_str(ONES[rest % 10]);
                }
            },
        }
    }

    fn connector(out: &mut String, written: bool, is_last: bool, value: u32) {
        if !written {
            return;
        }
        if is_last && (value < 100 || value % 100 == 0) {
            out.push_str(" e ");
        } else {
            out.push(' ');
        }
    }
}

impl LanguageStrategy for Portuguese {
    fn code(&self) -> LanguageCode {
        LanguageCode::Portuguese
    }

    fn lexicon(&self) -> &Lexicon {
        &LEXICON
    }

    fn scale_table(&self) -> &[&'static str] {
        &SCALES
    }

    fn chunk_words(&self, chunk: &Chunk, out: &mut String) {
        Self::group_words(chunk.value, out);
    }

    fn assemble(&self, chunks: &[Chunk], out: &mut String) {
        let top = match chunks.first() {
            Some(chunk) => chunk.position,
            None => return,
        };
        let last = chunks
            .iter()
            .filter(|c| !c.is_zero())
            .map(|c| c.position)
            .min();
        let mut written = false;

        for tier in (0..=top / 2).rev() {
            let thousands = group_at(chunks, tier * 2 + 1);
            let units = group_at(chunks, tier * 2);
            if thousands == 0 && units == 0 {
                continue;
            }

            if thousands > 0 {
                Self::connector(out, written, last == Some(tier * 2 + 1), thousands);
                if thousands > 1 {
                    Self::group_words(thousands, out);
                    out.push(' ');
                }
                out.push_str("mil");
                written = true;
            }
            if units > 0 {
                Self::connector(out, written, last == Some(tier * 2), units);
                Self::group_words(units, out);
                written = true;
            }
            if tier > 0 {
                let (one, many) = LIOES[tier - 1];
                out.push(' ');
                out.push_str(if thousands == 0 && units == 1 { one } else { many });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::say;

    #[test]
    fn test_small_numbers() {
        assert_eq!(say(&Portuguese, "16"), "dezasseis");
        assert_eq!(say(&Portuguese, "19"), "dezanove");
        assert_eq!(say(&Portuguese, "100"), "cem");
        assert_eq!(say(&Portuguese, "101"), "cento e um");
        assert_eq!(say(&Portuguese, "123"), "cento e vinte e três");
    }

    #[test]
    fn test_e_between_groups() {
        assert_eq!(say(&Portuguese, "1000"), "mil");
        assert_eq!(say(&Portuguese, "1001"), "mil e um");
        assert_eq!(say(&Portuguese, "1200"), "mil e duzentos");
        assert_eq!(say(&Portuguese, "1234"), "mil duzentos e trinta e quatro");
        assert_eq!(say(&Portuguese, "1500000"), "um milhão e quinhentos mil");
        assert_eq!(
            say(&Portuguese, "1000123"),
            "um milhão cento e vinte e três"
        );
    }

    #[test]
    fn test_long_scale() {
        assert_eq!(say(&Portuguese, "1000000"), "um milhão");
        assert_eq!(say(&Portuguese, "2000000"), "dois milhões");
        assert_eq!(say(&Portuguese, "1000000000"), "mil milhões");
        assert_eq!(say(&Portuguese, "1000000000000"), "um bilião");
    }

    #[test]
    fn test_zero_fraction_and_sign() {
        assert_eq!(say(&Portuguese, "0"), "Zero");
        assert_eq!(say(&Portuguese, "1.5"), "um vírgula cinco");
        assert_eq!(say(&Portuguese, "-2"), "Menos dois");
    }
}
