//! Ikhfa: silent nun is hidden with nasalisation before a set of letters.

use super::{scan, silent_nun_pattern, TajweedRule};
use crate::alphabet::{DAD, DAL, DHA, DHAA, SAAD, SHIN, SIN, TA, TAA, THA, ZAY};
use crate::{RuleKind, RuleMatch};
use regex::Regex;
use std::sync::OnceLock;

/// Letters that trigger ikhfa (dal appears once; repeats in a class are no-ops)
pub const IKHFA_LETTERS: [char; 11] = [TA, THA, DAL, DHA, SIN, SHIN, SAAD, DAD, TAA, DHAA, ZAY];

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| silent_nun_pattern(&IKHFA_LETTERS))
}

/// Rule for detecting ikhfa
pub struct IkhfaRule;

impl IkhfaRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IkhfaRule {
    fn default() -> Self {
        Self::new()
    }
}

impl TajweedRule for IkhfaRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Ikhfa
    }

    fn detect(&self, text: &str) -> Vec<RuleMatch> {
        scan(pattern(), RuleKind::Ikhfa, text)
    }
}
