// ============================================================================
// Arabic Verbalizer
// Units before tens, و connectors, scale words agreeing with their count
// ============================================================================

use crate::domain::{Chunk, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const ONES: [&str; 10] = [
    "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
];

const TEENS: [&str; 10] = [
    "عشرة",
    "أحد عشر",
    "اثنا عشر",
    "ثلاثة عشر",
    "أربعة عشر",
    "خمسة عشر",
    "ستة عشر",
    "سبعة عشر",
    "ثمانية عشر",
    "تسعة عشر",
];

const TENS: [&str; 10] = [
    "", "عشرة", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
];

const HUNDREDS: [&str; 10] = [
    "", "مئة", "مئتان", "ثلاثمئة", "أربعمئة", "خمسمئة", "ستمئة", "سبعمئة", "ثمانمئة", "تسعمئة",
];

const AND: &str = " و";

/// Forms of one scale word.
struct ScaleForms {
    singular: &'static str,
    dual: &'static str,
    plural: &'static str,
    accusative: &'static str,
}

const SCALE_FORMS: [ScaleForms; 6] = [
    ScaleForms {
        singular: "ألف",
        dual: "ألفان",
        plural: "آلاف",
        accusative: "ألفًا",
    },
    ScaleForms {
        singular: "مليون",
        dual: "مليونان",
        plural: "ملايين",
        accusative: "مليونًا",
    },
    ScaleForms {
        singular: "مليار",
        dual: "ملياران",
        plural: "مليارات",
        accusative: "مليارًا",
    },
    ScaleForms {
        singular: "تريليون",
        dual: "تريليونان",
        plural: "تريليونات",
        accusative: "تريليونًا",
    },
    ScaleForms {
        singular: "كوادريليون",
        dual: "كوادريليونان",
        plural: "كوادريليونات",
        accusative: "كوادريليونًا",
    },
    ScaleForms {
        singular: "كوينتليون",
        dual: "كوينتليونان",
        plural: "كوينتليونات",
        accusative: "كوينتليونًا",
    },
];

const SCALES: [&str; 7] = [
    "", "ألف", "مليون", "مليار", "تريليون", "كوادريليون", "كوينتليون",
];

const LEXICON: Lexicon = Lexicon {
    zero: "صفر",
    integer_zero: "صفر",
    negative: "سالب ",
    point: "فاصلة",
    digits: [
        "صفر", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
    ],
    fraction_layout: FractionLayout::Spaced,
    infinity: "لانهاية",
    negative_infinity: "لانهاية سالبة",
    invalid: "رقم غير صالح",
    too_large: "رقم كبير جدًا",
};

/// Arabic verbalizer
///
/// Scale words follow the count: alone for 1, dual for 2, plural for
/// 3-10, accusative singular for 11-99 (last two digits), singular
/// otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arabic;

impl LanguageStrategy for Arabic {
    fn code(&self) -> LanguageCode {
        LanguageCode::Arabic
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

        out.push_str(HUNDREDS[hundreds]);
        if hundreds > 0 && rest > 0 {
            out.push_str(AND);
        }

        match rest {
            0 => {},
            1..=9 => out.push_str(ONES[rest]),
            10..=19 => out.push_str(TEENS[rest - 10]),
            _ => {
                if rest % 10 > 0 {
                    out.push_str(ONES[rest % 10]);
                    out.push_str(AND);
                }
                out.push_str(TENS[rest / 10]);
            },
        }
    }

    fn scale_phrase(&self, chunk: &Chunk, out: &mut String) {
        let forms = match chunk.position.checked_sub(1).and_then(|i| SCALE_FORMS.get(i)) {
            Some(forms) => forms,
            None => return self.chunk_words(chunk, out),
        };

        match (chunk.value, chunk.value % 100) {
            (1, _) => out.push_str(forms.singular),
            (2, _) => out.push_str(forms.dual),
            (_, tail) => {
                self.chunk_words(chunk, out);
                out.push(' ');
                out.push_str(match tail {
                    3..=10 => forms.plural,
                    11..=99 => forms.accusative,
                    _ => forms.singular,
                });
            },
        }
    }

    fn joiner(&self, _previous: &Chunk, _next: &Chunk) -> &str {
        AND
    }
}
