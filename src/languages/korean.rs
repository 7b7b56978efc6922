// ============================================================================
// Korean Verbalizer
// Sino-Korean numerals in myriad groups, groups separated by spaces
// ============================================================================

use crate::domain::{Chunk, Grouping, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const DIGITS: [&str; 10] = ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

const PLACES: [&str; 4] = ["", "십", "백", "천"];

const SCALES: [&str; 12] = [
    "", "만", "억", "조", "경", "해", "자", "양", "구", "간", "정", "재",
];

const LEXICON: Lexicon = Lexicon {
    zero: "영",
    integer_zero: "영",
    negative: "마이너스 ",
    point: " 점 ",
    digits: DIGITS,
    fraction_layout: FractionLayout::Compact,
    infinity: "무한대",
    negative_infinity: "음의 무한대",
    invalid: "유효하지 않은 숫자",
    too_large: "숫자가 너무 큽니다",
};

/// Korean verbalizer
///
/// 일 is dropped before 십, 백 and 천, and a lone 만 is read without it.
/// Digits after the decimal marker are not spaced apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct Korean;

impl LanguageStrategy for Korean {
    fn code(&self) -> LanguageCode {
        LanguageCode::Korean
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
        if !(chunk.position == 1 && chunk.value == 1) {
            self.chunk_words(chunk, out);
        }
        out.push_str(SCALES[chunk.position]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::say;

    #[test]
    fn test_implicit_one() {
        assert_eq!(say(&Korean, "10"), "십");
        assert_eq!(say(&Korean, "111"), "백십일");
        assert_eq!(say(&Korean, "10000"), "만");
        assert_eq!(say(&Korean, "20000"), "이만");
        assert_eq!(say(&Korean, "100000000"), "일억");
    }

    #[test]
    fn test_spaced_groups() {
        assert_eq!(say(&Korean, "12345"), "만 이천삼백사십오");
        assert_eq!(say(&Korean, "100010000"), "일억 만");
        assert_eq!(say(&Korean, "300000005"), "삼억 오");
    }

    #[test]
    fn test_fraction_and_sign() {
        assert_eq!(say(&Korean, "1.5"), "일 점 오");
        assert_eq!(say(&Korean, "0.05"), "영 점 영오");
        assert_eq!(say(&Korean, "-3"), "마이너스 삼");
        assert_eq!(say(&Korean, "0"), "영");
    }
}
