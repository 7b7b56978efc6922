// ============================================================================
// Thai Verbalizer
// Six-digit groups under repeated ล้าน, no separators
// ============================================================================

use crate::domain::{Chunk, Grouping, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const DIGITS: [&str; 10] = [
    "ศูนย์", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];

const PLACES: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

/// Position `p` is ล้าน repeated `p` times.
const SCALES: [&str; 7] = [
    "",
    "ล้าน",
    "ล้านล้าน",
    "ล้านล้านล้าน",
    "ล้านล้านล้านล้าน",
    "ล้านล้านล้านล้านล้าน",
    "ล้านล้านล้านล้านล้านล้าน",
];

const LEXICON: Lexicon = Lexicon {
    zero: "ศูนย์",
    integer_zero: "ศูนย์",
    negative: "ลบ",
    point: "จุด",
    digits: DIGITS,
    fraction_layout: FractionLayout::Compact,
    infinity: "อนันต์",
    negative_infinity: "ลบอนันต์",
    invalid: "เลขไม่ถูกต้อง",
    too_large: "ตัวเลขใหญ่เกินไป",
};

const MILLION: &str = "ล้าน";

/// Thai verbalizer
///
/// Above a million the number is read as `<millions>ล้าน<rest>`, so every
/// group boundary adds one ล้าน (`1500000000000` is หนึ่งล้านห้าแสนล้าน).
/// A units 1 reads เอ็ด after any other digit of its group and in every
/// group below the leading one (`1000001` is หนึ่งล้านเอ็ด). A tens 2 reads
/// ยี่ and a tens 1 is a bare สิบ.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thai;

impl LanguageStrategy for Thai {
    fn code(&self) -> LanguageCode {
        LanguageCode::Thai
    }

    fn lexicon(&self) -> &Lexicon {
        &LEXICON
    }

    fn grouping(&self) -> Grouping {
        Grouping::uniform(6)
    }

    fn scale_table(&self) -> &[&'static str] {
        &SCALES
    }

    fn chunk_words(&self, chunk: &Chunk, out: &mut String) {
        let digits = chunk.digits();
        let len = digits.len();

        for (i, &d) in digits.iter().enumerate() {
            let place = len - 1 - i;
            let word = match (place, d) {
                (_, 0) => continue,
                (1, 1) => "",
                (1, 2) => "ยี่",
                (0, 1) if chunk.value > 1 || !chunk.leading => "เอ็ด",
                _ => DIGITS[usize::from(d)],
            };
            out.push_str(word);
            out.push_str(PLACES[place]);
        }
    }

    fn scale_phrase(&self, chunk: &Chunk, out: &mut String) {
        self.chunk_words(chunk, out);
        out.push_str(SCALES[chunk.position]);
    }

    fn assemble(&self, chunks: &[Chunk], out: &mut String) {
        for chunk in chunks {
            if !chunk.is_zero() {
                self.chunk_words(chunk, out);
            }
            if chunk.position > 0 {
                out.push_str(MILLION);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::say;

    #[test]
    fn test_tens_forms() {
        assert_eq!(say(&Thai, "10"), "สิบ");
        assert_eq!(say(&Thai, "11"), "สิบเอ็ด");
        assert_eq!(say(&Thai, "21"), "ยี่สิบเอ็ด");
        assert_eq!(say(&Thai, "25"), "ยี่สิบห้า");
    }

    #[test]
    fn test_units_one() {
        assert_eq!(say(&Thai, "1"), "หนึ่ง");
        assert_eq!(say(&Thai, "101"), "หนึ่งร้อยเอ็ด");
        assert_eq!(say(&Thai, "1000001"), "หนึ่งล้านเอ็ด");
    }

    #[test]
    fn test_million_cycles() {
        assert_eq!(
            say(&Thai, "123456"),
            "หนึ่งแสนสองหมื่นสามพันสี่ร้อยห้าสิบหก"
        );
        assert_eq!(say(&Thai, "1000000"), "หนึ่งล้าน");
        assert_eq!(say(&Thai, "1000000000000"), "หนึ่งล้านล้าน");
        assert_eq!(say(&Thai, "2000000000000"), "สองล้านล้าน");
        assert_eq!(say(&Thai, "1000000000"), "หนึ่งพันล้าน");
    }

    #[test]
    fn test_millions_of_millions() {
        assert_eq!(say(&Thai, "1500000000000"), "หนึ่งล้านห้าแสนล้าน");
        assert_eq!(say(&Thai, "1000001000000"), "หนึ่งล้านเอ็ดล้าน");
        assert_eq!(say(&Thai, "1000000000001"), "หนึ่งล้านล้านเอ็ด");
        assert_eq!(say(&Thai, "11000000000000"), "สิบเอ็ดล้านล้าน");
    }

    #[test]
    fn test_fraction_and_sign() {
        assert_eq!(say(&Thai, "1.25"), "หนึ่งจุดสองห้า");
        assert_eq!(say(&Thai, "-5"), "ลบห้า");
        assert_eq!(say(&Thai, "0"), "ศูนย์");
    }
}
