//! Positional word comparison between an attempt and its reference

use crate::{Comparison, WordMatch, WordMistake, EMPTY_WORD};

/// Split text on runs of whitespace
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Compare two texts word by word by position.
///
/// Every index in `0..max(len(user), len(correct))` lands in exactly one of
/// the two lists. Words are compared byte for byte, so diacritics matter.
pub fn compare_words(user_text: &str, correct_text: &str) -> Comparison {
    let user_words = words(user_text);
    let correct_words = words(correct_text);
    let max_len = user_words.len().max(correct_words.len());

    let mut comparison = Comparison::default();
    for index in 0..max_len {
        let got = user_words.get(index).copied().unwrap_or("");
        let expected = correct_words.get(index).copied().unwrap_or("");
        if got == expected {
            comparison.matches.push(WordMatch {
                index,
                word: got.to_string(),
            });
        } else {
            comparison.mistakes.push(WordMistake {
                index,
                expected: expected.to_string(),
                got: (if got.is_empty() { EMPTY_WORD } else { got }).to_string(),
            });
        }
    }
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_all_match() {
        let c = compare_words("بسم الله الرحمن", "بسم الله الرحمن");
        assert!(c.mistakes.is_empty());
        let indices: Vec<usize> = c.matches.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(c.matches[1].word, "الله");
    }

    #[test]
    fn test_empty_attempt_uses_placeholder() {
        let c = compare_words("", "كلمة واحدة");
        assert!(c.matches.is_empty());
        assert_eq!(c.mistakes.len(), 2);
        assert_eq!(c.mistakes[0].index, 0);
        assert_eq!(c.mistakes[0].expected, "كلمة");
        assert_eq!(c.mistakes[0].got, "(empty)");
        assert_eq!(c.mistakes[1].index, 1);
        assert_eq!(c.mistakes[1].expected, "واحدة");
        assert_eq!(c.mistakes[1].got, "(empty)");
    }

    #[test]
    fn test_longer_attempt_has_empty_expected() {
        let c = compare_words("بسم الله زيادة", "بسم الله");
        assert_eq!(c.matches.len(), 2);
        assert_eq!(c.mistakes.len(), 1);
        assert_eq!(c.mistakes[0].index, 2);
        assert_eq!(c.mistakes[0].expected, "");
        assert_eq!(c.mistakes[0].got, "زيادة");
    }

    #[test]
    fn test_diacritics_are_significant() {
        let c = compare_words("بسم", "بِسْمِ");
        assert_eq!(c.mistakes.len(), 1);
        assert_eq!(c.mistakes[0].got, "بسم");
        assert_eq!(c.mistakes[0].expected, "بِسْمِ");
    }

    #[test]
    fn test_whitespace_runs_are_one_separator() {
        let c = compare_words("  بسم \t\n الله  ", "بسم الله");
        assert_eq!(c.matches.len(), 2);
        assert!(c.mistakes.is_empty());
    }

    #[test]
    fn test_both_empty() {
        let c = compare_words("", "   ");
        assert!(c.is_empty());
    }

    #[test]
    fn test_mixed_positions_partition() {
        let c = compare_words("a x c", "a b c d");
        let m: Vec<usize> = c.matches.iter().map(|m| m.index).collect();
        let x: Vec<usize> = c.mistakes.iter().map(|m| m.index).collect();
        assert_eq!(m, vec![0, 2]);
        assert_eq!(x, vec![1, 3]);
        assert_eq!(c.mistakes[1].got, EMPTY_WORD);
    }
}
