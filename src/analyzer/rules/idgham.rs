//! Idgham: silent nun merges into a following ya, ra, waw, lam, mim or nun.

use super::{scan, silent_nun_pattern, TajweedRule};
use crate::alphabet::{LAM, MIM, NUN, RA, WAW, YA};
use crate::{RuleKind, RuleMatch};
use regex::Regex;
use std::sync::OnceLock;

/// Letters that trigger idgham (يرملون)
pub const IDGHAM_LETTERS: [char; 6] = [YA, RA, WAW, LAM, MIM, NUN];

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| silent_nun_pattern(&IDGHAM_LETTERS))
}

/// Rule for detecting idgham
pub struct IdghamRule;

impl IdghamRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IdghamRule {
    fn default() -> Self {
        Self::new()
    }
}

impl TajweedRule for IdghamRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Idgham
    }

    fn detect(&self, text: &str) -> Vec<RuleMatch> {
        scan(pattern(), RuleKind::Idgham, text)
    }
}
