// ============================================================================
// Japanese Verbalizer
// Kanji numerals in myriad groups, no separators
// ============================================================================

use crate::domain::{Chunk, Grouping, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const PLACES: [&str; 4] = ["", "十", "百", "千"];

const SCALES: [&str; 12] = [
    "", "万", "億", "兆", "京", "垓", "秭", "穣", "溝", "澗", "正", "載",
];

const LEXICON: Lexicon = Lexicon {
    zero: "ゼロ",
    integer_zero: "〇",
    negative: "マイナス",
    point: "点",
    digits: DIGITS,
    fraction_layout: FractionLayout::Compact,
    infinity: "無限大",
    negative_infinity: "負の無限大",
    invalid: "無効な数字",
    too_large: "数が大きすぎます",
};

/// Japanese verbalizer
///
/// 一 is dropped before 十, 百 and 千 but kept before 万 and higher
/// (`1000` is 千, `10000` is 一万).
#[derive(Debug, Clone, Copy, Default)]
pub struct Japanese;

impl LanguageStrategy for Japanese {
    fn code(&self) -> LanguageCode {
        LanguageCode::Japanese
    }

    fn lexicon(&self) -> &Lexicon {
        &LEXICON
    }

    fn grouping(&self) -> Grouping {
        Grouping::uniform(4)
    }

    fn scale_table(&self) -> &[&'static str] {
        &SCALES
    }

    fn chunk_words(&self, chunk: &Chunk, out: &mut String) {
        let digits = chunk.digits();
        let len = digits.len();

        for (i, &d) in digits.iter().enumerate() {
            let place = len - 1 - i;
            if d == 0 {
                continue;
            }
            if d > 1 || place == 0 {
                out.push_str(DIGITS[usize::from(d)]);
            }
            out.push_str(PLACES[place]);
        }
    }

    fn scale_phrase(&self, chunk: &Chunk, out: &mut String) {
        self.chunk_words(chunk, out);
        out.push_str(SCALES[chunk.position]);
    }

    fn joiner(&self, _previous: &Chunk, _next: &Chunk) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::say;

    #[test]
    fn test_implicit_one() {
        assert_eq!(say(&Japanese, "10"), "十");
        assert_eq!(say(&Japanese, "110"), "百十");
        assert_eq!(say(&Japanese, "1000"), "千");
        assert_eq!(say(&Japanese, "10000"), "一万");
    }

    #[test]
    fn test_groups() {
        assert_eq!(say(&Japanese, "2024"), "二千二十四");
        assert_eq!(say(&Japanese, "12345"), "一万二千三百四十五");
        assert_eq!(say(&Japanese, "100000000"), "一億");
        assert_eq!(say(&Japanese, "100000001"), "一億一");
    }

    #[test]
    fn test_zero_fraction_and_sign() {
        assert_eq!(say(&Japanese, "0"), "ゼロ");
        assert_eq!(say(&Japanese, "0.5"), "〇点五");
        assert_eq!(say(&Japanese, "3.14"), "三点一四");
        assert_eq!(say(&Japanese, "-7"), "マイナス七");
    }
}
