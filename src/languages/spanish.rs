// ============================================================================
// Spanish Verbalizer
// Long scale: a -llón word every six digits, "mil" between them
// ============================================================================

use super::group_at;
use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const ONES: [&str; 10] = [
    "", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

const TEENS: [&str; 10] = [
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
];

const TWENTIES: [&str; 10] = [
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

const TENS: [&str; 10] = [
    "", "diez", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

/// (singular, plural) of each -llón, one per pair of groups above the first.
const LLONES: [(&str, &str); 5] = [
    ("millón", "millones"),
    ("billón", "billones"),
    ("trillón", "trillones"),
    ("cuatrillón", "cuatrillones"),
    ("quintillón", "quintillones"),
];

const SCALES: [&str; 12] = [
    "",
    "mil",
    "millón",
    "mil",
    "billón",
    "mil",
    "trillón",
    "mil",
    "cuatrillón",
    "mil",
    "quintillón",
    "mil",
];

const LEXICON: Lexicon = Lexicon {
    zero: "Cero",
    integer_zero: "cero",
    negative: "Menos ",
    point: "punto",
    digits: [
        "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
    ],
    fraction_layout: FractionLayout::Spaced,
    infinity: "Infinito",
    negative_infinity: "Infinito Negativo",
    invalid: "Número Inválido",
    too_large: "Número demasiado grande",
};

/// Spanish verbalizer
///
/// Groups are read in pairs: `<thousands> mil <units> <-llón>`, so
/// `10^9` is "mil millones" and `10^12` is "un billón". Before a scale word
/// `uno` shortens to `un` (`veintiún mil`, `un millón`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Spanish;

impl Spanish {
    /// Words for 0-999; `apocope` shortens a final one before a noun.
    fn group_words(value: u32, apocope: bool, out: &mut String) {
        if value == 100 {
            out.push_str("cien");
            return;
        }

        let hundreds = (value / 100) as usize;
        let rest = (value % 100) as usize;

        out.push_str(HUNDREDS[hundreds]);
        if hundreds > 0 && rest > 0 {
            out.push(' ');
        }

        match rest {
            0 => {},
            1 if apocope => out.push_str("un"),
            1..=9 => out.push_str(ONES[rest]),
            10..=19 => out.push_str(TEENS[rest - 10]),
            21 if apocope => out.push_str("veintiún"),
            20..=29 => out.push_str(TWENTIES[rest - 20]),
            _ => {
                out.push_str(TENS[rest / 10]);
                match rest % 10 {
                    0 => {},
                    1 if apocope => out.push_str(" y un"),
                    u => {
                        out.push_str(" y ");
                        out.push_str(ONES[u]);
                    },
                }
            },
        }
    }
}

impl LanguageStrategy for Spanish {
    fn code(&self) -> LanguageCode {
        LanguageCode::Spanish
    }

    fn lexicon(&self) -> &Lexicon {
        &LEXICON
    }

    fn scale_table(&self) -> &[&'static str] {
        &SCALES
    }

    fn chunk_words(&self, chunk: &Chunk, out: &mut String) {
        Self::group_words(chunk.value, chunk.position > 0, out);
    }

    fn assemble(&self, chunks: &[Chunk], out: &mut String) {
        let top = match chunks.first() {
            Some(chunk) => chunk.position,
            None => return,
        };
        let mut written = false;

        for tier in (0..=top / 2).rev() {
            let thousands = group_at(chunks, tier * 2 + 1);
            let units = group_at(chunks, tier * 2);
            if thousands == 0 && units == 0 {
                continue;
            }
            if written {
                out.push(' ');
            }
            written = true;

            if thousands > 0 {
                if thousands > 1 {
                    Self::group_words(thousands, true, out);
                    out.push(' ');
                }
                out.push_str("mil");
                if units > 0 {
                    out.push(' ');
                }
            }
            if units > 0 {
                Self::group_words(units, tier > 0, out);
            }
            if tier > 0 {
                let (one, many) = LLONES[tier - 1];
                out.push(' ');
                out.push_str(if thousands == 0 && units == 1 { one } else { many });
            }
        }
    }
}
