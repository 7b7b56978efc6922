// ============================================================================
// Vietnamese Verbalizer
// Three-digit groups with euphonic unit forms (mốt, tư, lăm, linh)
// ============================================================================

use smallvec::SmallVec;

use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

const SCALES: [&str; 7] = ["", "nghìn", "triệu", "tỷ", "nghìn tỷ", "triệu tỷ", "tỷ tỷ"];

/// Scale words inside one tỷ tier.
const TIER_SCALES: [&str; 3] = ["", "nghìn", "triệu"];

const BILLION: &str = "tỷ";

const LEXICON: Lexicon = Lexicon {
    zero: "không",
    integer_zero: "không",
    negative: "âm ",
    point: "phẩy",
    digits: DIGITS,
    fraction_layout: FractionLayout::Spaced,
    infinity: "vô hạn",
    negative_infinity: "âm vô hạn",
    invalid: "số không hợp lệ",
    too_large: "số quá lớn",
};

/// Vietnamese verbalizer
///
/// Groups after the first always read their hundreds, even when zero
/// (`1005` is một nghìn không trăm linh năm). Above a tỷ the number is read
/// as `<tỷ count> tỷ <rest>`, so each tier of three groups ends with one tỷ
/// (`1001000000000` is một nghìn không trăm linh một tỷ).
#[derive(Debug, Clone, Copy, Default)]
pub struct Vietnamese;

impl LanguageStrategy for Vietnamese {
    fn code(&self) -> LanguageCode {
        LanguageCode::Vietnamese
    }

    fn lexicon(&self) -> &Lexicon {
        &LEXICON
    }

    fn scale_table(&self) -> &[&'static str] {
        &SCALES
    }

    fn chunk_words(&self, chunk: &Chunk, out: &mut String) {
        let hundreds = (chunk.value / 100) as usize;
        let tens = (chunk.value / 10 % 10) as usize;
        let units = (chunk.value % 10) as usize;
        let full = hundreds > 0 || !chunk.leading;

        let mut words: SmallVec<[&str; 6]> = SmallVec::new();
        if full {
            words.push(DIGITS[hundreds]);
            words.push("trăm");
        }

        match tens {
            0 if units > 0 && full => words.push("linh"),
            0 => {},
            1 => words.push("mười"),
            _ => {
                words.push(DIGITS[tens]);
                words.push("mươi");
            },
        }

        if units > 0 {
            words.push(match units {
                1 if tens > 1 => "mốt",
                4 if tens > 1 => "tư",
                5 if tens > 0 => "lăm",
                _ => DIGITS[units],
            });
        }

        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(word);
        }
    }

    fn assemble(&self, chunks: &[Chunk], out: &mut String) {
        let start = out.len();
        for chunk in chunks {
            if !chunk.is_zero() {
                if out.len() > start {
                    out.push(' ');
                }
                self.chunk_words(chunk, out);
                let scale = TIER_SCALES[chunk.position % 3];
                if !scale.is_empty() {
                    out.push(' ');
                    out.push_str(scale);
                }
            }
            if chunk.position > 0 && chunk.position % 3 == 0 {
                out.push(' ');
                out.push_str(BILLION);
            }
        }
    }
}
