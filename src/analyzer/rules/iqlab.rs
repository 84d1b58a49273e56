//! Iqlab: silent nun followed by ba is pronounced as mim.

use super::{scan, silent_nun_pattern, TajweedRule};
use crate::alphabet::BA;
use crate::{RuleKind, RuleMatch};
use regex::Regex;
use std::sync::OnceLock;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| silent_nun_pattern(&[BA]))
}

/// Rule for detecting iqlab
pub struct IqlabRule;

impl IqlabRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IqlabRule {
    fn default() -> Self {
        Self::new()
    }
}

impl TajweedRule for IqlabRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Iqlab
    }

    fn detect(&self, text: &str) -> Vec<RuleMatch> {
        scan(pattern(), RuleKind::Iqlab, text)
    }
}
