// ============================================================================
// Chinese Verbalizer
// Myriad grouping (万/亿) with 零 placeholders; Simplified and Traditional
// ============================================================================

use crate::domain::{Chunk, Grouping, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

const DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Place words inside a four-digit group, indexed from the right.
const PLACES: [&str; 4] = ["", "十", "百", "千"];

const ZERO: &str = "零";

const SIMPLIFIED_SCALES: [&str; 12] = [
    "", "万", "亿", "兆", "京", "垓", "秭", "穰", "沟", "涧", "正", "载",
];

const TRADITIONAL_SCALES: [&str; 12] = [
    "", "萬", "億", "兆", "京", "垓", "秭", "穰", "溝", "澗", "正", "載",
];

const SIMPLIFIED_LEXICON: Lexicon = Lexicon {
    zero: "零",
    integer_zero: "零",
    negative: "负",
    point: "点",
    digits: DIGITS,
    fraction_layout: FractionLayout::Compact,
    infinity: "正无穷",
    negative_infinity: "负无穷",
    invalid: "无效数字",
    too_large: "数字太大，无法转换",
};

const TRADITIONAL_LEXICON: Lexicon = Lexicon {
    zero: "零",
    integer_zero: "零",
    negative: "負",
    point: "點",
    digits: DIGITS,
    fraction_layout: FractionLayout::Compact,
    infinity: "正無窮",
    negative_infinity: "負無窮",
    invalid: "無效數字",
    too_large: "數字太大，無法轉換",
};

/// Character set variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Simplified,
    Traditional,
}

/// Chinese verbalizer
///
/// Four-digit groups. A single 零 stands for any run of skipped zeros, in
/// or between groups, and is never written at the end. A leading `1x`
/// group drops the 一 before 十 (`100000` is 十万).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chinese {
    script: Script,
}

impl Chinese {
    pub const SIMPLIFIED: Chinese = Chinese {
        script: Script::Simplified,
    };
    pub const TRADITIONAL: Chinese = Chinese {
        script: Script::Traditional,
    };

    pub const fn new(script: Script) -> Self {
        Self { script }
    }

    pub fn script(&self) -> Script {
        self.script
    }
}

impl LanguageStrategy for Chinese {
    fn code(&self) -> LanguageCode {
        match self.script {
            Script::Simplified => LanguageCode::ChineseSimplified,
            Script::Traditional => LanguageCode::ChineseTraditional,
        }
    }

    fn lexicon(&self) -> &Lexicon {
        match self.script {
            Script::Simplified => &SIMPLIFIED_LEXICON,
            Script::Traditional => &TRADITIONAL_LEXICON,
        }
    }

    fn grouping(&self) -> Grouping {
        Grouping::uniform(4)
    }

    fn scale_table(&self) -> &[&'static str] {
        match self.script {
            Script::Simplified => &SIMPLIFIED_SCALES,
            Script::Traditional => &TRADITIONAL_SCALES,
        }
    }

    fn chunk_words(&self, chunk: &Chunk, out: &mut String) {
        let digits = chunk.digits();
        let len = digits.len();
        let mut started = false;
        let mut pending_zero = false;

        for (i, &d) in digits.iter().enumerate() {
            let place = len - 1 - i;
            if d == 0 {
                // leading zeros of a padded group are the assembler's business
                pending_zero |= started;
                continue;
            }
            if pending_zero {
                out.push_str(ZERO);
                pending_zero = false;
            }
            let bare_ten = d == 1 && place == 1 && i == 0 && chunk.leading;
            if !bare_ten {
                out.push_str(DIGITS[usize::from(d)]);
            }
            out.push_str(PLACES[place]);
            started = true;
        }
    }

    fn scale_phrase(&self, chunk: &Chunk, out: &mut String) {
        self.chunk_words(chunk, out);
        if let Some(scale) = self.scale_table().get(chunk.position) {
            out.push_str(scale);
        }
    }

    fn assemble(&self, chunks: &[Chunk], out: &mut String) {
        let mut started = false;
        let mut pending_zero = false;

        for chunk in chunks {
            if chunk.is_zero() {
                pending_zero |= started;
                continue;
            }
            // a non-leading group under 1000 starts with skipped zeros
            if started && (pending_zero || chunk.value < 1000) {
                out.push_str(ZERO);
            }
            self.scale_phrase(chunk, out);
            started = true;
            pending_zero = false;
        }
    }
}
