//! Arabic letter table used by the rule detectors.
//!
//! Every letter the detectors reference is a named constant here, and the
//! same constants are exposed by symbolic name through [`letter`].

use std::ops::RangeInclusive;

/// Sukun: the consonant carries no vowel
pub const SUKUN: char = '\u{0652}';
/// Shadda: gemination mark
pub const SHADDA: char = '\u{0651}';

pub const ALIF: char = '\u{0627}';
pub const BA: char = '\u{0628}';
pub const TA: char = '\u{062A}';
pub const THA: char = '\u{062B}';
pub const JEEM: char = '\u{062C}';
pub const DAL: char = '\u{062F}';
pub const DHA: char = '\u{0630}';
pub const RA: char = '\u{0631}';
pub const ZAY: char = '\u{0632}';
pub const SIN: char = '\u{0633}';
pub const SHIN: char = '\u{0634}';
pub const SAAD: char = '\u{0635}';
pub const DAD: char = '\u{0636}';
pub const TAA: char = '\u{0637}';
pub const DHAA: char = '\u{0638}';
pub const QAF: char = '\u{0642}';
pub const KAF: char = '\u{0643}';
pub const LAM: char = '\u{0644}';
pub const MIM: char = '\u{0645}';
pub const NUN: char = '\u{0646}';
pub const WAW: char = '\u{0648}';
pub const YA: char = '\u{064A}';

/// Harakat, tanween, shadda and sukun (fathatan through sukun)
pub const DIACRITICS: RangeInclusive<char> = '\u{064B}'..='\u{0652}';

/// Symbolic name to code point, in table order
pub const LETTERS: &[(&str, char)] = &[
    ("sukun", SUKUN),
    ("shadda", SHADDA),
    ("nun", NUN),
    ("ba", BA),
    ("ta", TA),
    ("tha", THA),
    ("dal", DAL),
    ("dha", DHA),
    ("sin", SIN),
    ("shin", SHIN),
    ("saad", SAAD),
    ("dad", DAD),
    ("taa", TAA),
    ("dhaa", DHAA),
    ("zay", ZAY),
    ("qaf", QAF),
    ("kaf", KAF),
    ("jeem", JEEM),
    ("waw", WAW),
    ("ya", YA),
    ("alif", ALIF),
    ("ra", RA),
    ("lam", LAM),
    ("mim", MIM),
];

/// Look up a letter or mark by its symbolic name
pub fn letter(name: &str) -> Option<char> {
    LETTERS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
}

/// True for marks in the U+064B..=U+0652 range
pub fn is_diacritic(c: char) -> bool {
    DIACRITICS.contains(&c)
}

/// Regex fragment for "any run of characters that are not diacritics"
pub(crate) fn non_diacritic_run() -> String {
    format!(
        "[^\\x{{{:04X}}}-\\x{{{:04X}}}]*",
        *DIACRITICS.start() as u32,
        *DIACRITICS.end() as u32
    )
}

/// Regex character class for a set of letters
pub(crate) fn char_class(letters: &[char]) -> String {
    let mut class = String::from("[");
    class.extend(letters.iter());
    class.push(']');
    class
}
