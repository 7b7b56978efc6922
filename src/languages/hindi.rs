// ============================================================================
// Hindi Verbalizer
// Indian numbering: hundreds, then pairs named हज़ार, लाख, करोड़, ...
// ============================================================================

use crate::domain::{Chunk, Grouping, LanguageCode};
use crate::interfaces::{FractionLayout, LanguageStrategy, Lexicon};

/// Every number 1-99 has its own word.
#[rustfmt::skip]
const NUMBERS: [&str; 100] = [
    "", "एक", "दो", "तीन", "चार", "पाँच", "छह", "सात", "आठ", "नौ",
    "दस", "ग्यारह", "बारह", "तेरह", "चौदह", "पंद्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
    "बीस", "इक्कीस", "बाईस", "तेईस", "चौबीस", "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाईस", "उनतीस",
    "तीस", "इकतीस", "बत्तीस", "तैंतीस", "चौंतीस", "पैंतीस", "छत्तीस", "सैंतीस", "अड़तीस", "उनतालीस",
    "चालीस", "इकतालीस", "बयालीस", "तैंतालीस", "चौवालीस", "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास",
    "पचास", "इक्यावन", "बावन", "तिरपन", "चौवन", "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ",
    "साठ", "इकसठ", "बासठ", "तिरसठ", "चौंसठ", "पैंसठ", "छियासठ", "सड़सठ", "अड़सठ", "उनहत्तर",
    "सत्तर", "इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर", "पचहत्तर", "छिहत्तर", "सतहत्तर", "अठहत्तर", "उनासी",
    "अस्सी", "इक्यासी", "बयासी", "तिरासी", "चौरासी", "पचासी", "छियासी", "सतासी", "अठासी", "नवासी",
    "नब्बे", "इक्यानबे", "बानबे", "तिरानबे", "चौरानबे", "पंचानबे", "छियानबे", "सतानबे", "अट्ठानबे", "निन्यानबे",
];

const SCALES: [&str; 9] = [
    "", "हज़ार", "लाख", "करोड़", "अरब", "खरब", "नील", "पद्म", "शंख",
];

const LEXICON: Lexicon = Lexicon {
    zero: "शून्य",
    integer_zero: "शून्य",
    negative: "ऋण ",
    point: "दशमलव",
    digits: [
        "शून्य", "एक", "दो", "तीन", "चार", "पाँच", "छह", "सात", "आठ", "नौ",
    ],
    fraction_layout: FractionLayout::Spaced,
    infinity: "अनंत",
    negative_infinity: "ऋण अनंत",
    invalid: "अमान्य संख्या",
    too_large: "बहुत बड़ी संख्या",
};

/// Hindi verbalizer
///
/// The lowest group has three digits, every higher group two, so only the
/// units group ever needs सौ.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hindi;

impl LanguageStrategy for Hindi {
    fn code(&self) -> LanguageCode {
        LanguageCode::Hindi
    }

    fn lexicon(&self) -> &Lexicon {
        &LEXICON
    }

    fn grouping(&self) -> Grouping {
        Grouping::indian()
    }

    fn scale_table(&self) -> &[&'static str] {
        &SCALES
    }

    fn chunk_words(&self, chunk: &Chunk, out: &mut String) {
        let hundreds = (chunk.value / 100) as usize;
        let rest = (chunk.value % 100) as usize;

        if hundreds > 0 {
            out.push_str(NUMBERS[hundreds]);
            out.push_str(" सौ");
            if rest > 0 {
                out.push(' ');
            }
        }
        out.push_str(NUMBERS[rest]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::say;

    #[test]
    fn test_irregular_tens() {
        assert_eq!(say(&Hindi, "45"), "पैंतालीस");
        assert_eq!(say(&Hindi, "99"), "निन्यानबे");
        assert_eq!(say(&Hindi, "101"), "एक सौ एक");
    }

    #[test]
    fn test_indian_scales() {
        assert_eq!(say(&Hindi, "100000"), "एक लाख");
        assert_eq!(say(&Hindi, "10000000"), "एक करोड़");
        assert_eq!(say(&Hindi, "12345"), "बारह हज़ार तीन सौ पैंतालीस");
        assert_eq!(
            say(&Hindi, "123456789"),
            "बारह करोड़ चौंतीस लाख छप्पन हज़ार सात सौ नवासी"
        );
    }

    #[test]
    fn test_capacity() {
        let max = "9".repeat(19);
        assert!(say(&Hindi, &max).starts_with("निन्यानबे शंख"));
        assert_eq!(say(&Hindi, &"1".repeat(20)), "बहुत बड़ी संख्या");
    }

    #[test]
    fn test_fraction_and_sign() {
        assert_eq!(say(&Hindi, "0.5"), "शून्य दशमलव पाँच");
        assert_eq!(say(&Hindi, "-7"), "ऋण सात");
    }
}
