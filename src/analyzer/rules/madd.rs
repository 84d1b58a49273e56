//! Madd: a long vowel letter at the end of a word is prolonged.

use super::TajweedRule;
use crate::alphabet::{char_class, ALIF, WAW, YA};
use crate::{RuleKind, RuleMatch};
use regex::Regex;
use std::sync::OnceLock;

/// Letters of prolongation
pub const MADD_LETTERS: [char; 3] = [ALIF, WAW, YA];

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"{}\s+", char_class(&MADD_LETTERS))).expect("madd pattern is valid")
    })
}

/// Rule for detecting madd
pub struct MaddRule;

impl MaddRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MaddRule {
    fn default() -> Self {
        Self::new()
    }
}

impl TajweedRule for MaddRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Madd
    }

    fn detect(&self, text: &str) -> Vec<RuleMatch> {
        // The whitespace run is consumed by the scan but not reported.
        pattern()
            .find_iter(text)
            .map(|m| RuleMatch::new(RuleKind::Madd, m.as_str().trim_end()))
            .collect()
    }
}
