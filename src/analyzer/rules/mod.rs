//! Tajweed rule detectors

pub mod idgham;
pub mod ikhfa;
pub mod iqlab;
pub mod madd;

pub use idgham::IdghamRule;
pub use ikhfa::IkhfaRule;
pub use iqlab::IqlabRule;
pub use madd::MaddRule;

use crate::alphabet::{char_class, non_diacritic_run, NUN, SUKUN};
use crate::{RuleKind, RuleMatch};
use regex::Regex;

/// Trait for rule detectors
pub trait TajweedRule: Send + Sync {
    /// Rule reported by this detector
    fn kind(&self) -> RuleKind;

    /// Config identifier of the rule
    fn name(&self) -> &'static str {
        self.kind().id()
    }

    /// Scan text and return every match, left to right
    fn detect(&self, text: &str) -> Vec<RuleMatch>;
}

/// All detectors in reporting order
pub fn default_rules() -> Vec<Box<dyn TajweedRule>> {
    vec![
        Box::new(IqlabRule::new()),
        Box::new(IdghamRule::new()),
        Box::new(IkhfaRule::new()),
        Box::new(MaddRule::new()),
    ]
}

/// Silent nun (nun + sukun), any non-diacritic filler, then one of `letters`.
/// The filler is greedy, so a match ends at the last trigger letter before
/// the next diacritic.
pub(crate) fn silent_nun_pattern(letters: &[char]) -> Regex {
    let pattern = format!(
        "{}{}{}{}",
        NUN,
        SUKUN,
        non_diacritic_run(),
        char_class(letters)
    );
    Regex::new(&pattern).expect("silent nun pattern is valid")
}

/// Non-overlapping matches of `pattern`, reported as `kind`
pub(crate) fn scan(pattern: &Regex, kind: RuleKind, text: &str) -> Vec<RuleMatch> {
    pattern
        .find_iter(text)
        .map(|m| RuleMatch::new(kind, m.as_str()))
        .collect()
}
