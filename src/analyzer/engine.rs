//! Analysis engine - orchestrates rule detection, comparison and scoring

use crate::config::Config;
use crate::{Comparison, Feedback, FeedbackError, RuleKind, RuleMatch};
use rayon::prelude::*;
use tracing::debug;

use super::comparator::{compare_words, words};
use super::rules::{default_rules, TajweedRule};
use super::scoring::{ScoreCalculator, DEFAULT_SUCCESS_THRESHOLD};

/// Main engine: stateless apart from the rule set and threshold chosen at
/// construction, so one instance can serve any number of threads.
pub struct TajweedEngine {
    /// Enabled detectors, in reporting order
    rules: Vec<Box<dyn TajweedRule>>,
    /// Accuracy must be strictly above this for a success status
    success_threshold: u8,
}

impl TajweedEngine {
    /// Create an engine with every rule enabled and the default threshold
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            success_threshold: DEFAULT_SUCCESS_THRESHOLD,
        }
    }

    /// Build an engine from a loaded config
    pub fn from_config(config: &Config) -> Self {
        let mut engine = Self::new().with_success_threshold(config.success_threshold());
        for kind in RuleKind::ALL {
            if !config.is_rule_enabled(kind) {
                engine = engine.without_rule(kind);
            }
        }
        engine
    }

    /// Override the success threshold
    pub fn with_success_threshold(mut self, threshold: u8) -> Self {
        self.success_threshold = threshold;
        self
    }

    /// Disable one rule
    pub fn without_rule(mut self, kind: RuleKind) -> Self {
        self.rules.retain(|r| r.kind() != kind);
        self
    }

    pub fn success_threshold(&self) -> u8 {
        self.success_threshold
    }

    /// Rules this engine reports, in order
    pub fn enabled_rules(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    /// Run every enabled detector over `text`. Detectors are independent, so
    /// one span may be reported under several rules.
    pub fn analyze(&self, text: &str) -> Vec<RuleMatch> {
        let mut matches = Vec::new();
        for rule in &self.rules {
            let found = rule.detect(text);
            debug!(rule = rule.name(), matches = found.len(), "rule scan");
            matches.extend(found);
        }
        matches
    }

    /// Positional word comparison of an attempt against the reference
    pub fn compare(&self, user_text: &str, correct_text: &str) -> Comparison {
        let comparison = compare_words(user_text, correct_text);
        debug!(
            positions = comparison.len(),
            mistakes = comparison.mistakes.len(),
            "compared words"
        );
        comparison
    }

    /// Build the full feedback record for one attempt.
    ///
    /// Rules are detected in the reference text only. Fails with
    /// [`FeedbackError::EmptyReference`] when the reference has no words.
    pub fn get_feedback(
        &self,
        user_text: &str,
        correct_text: &str,
    ) -> Result<Feedback, FeedbackError> {
        let rule_matches = self.analyze(correct_text);
        let comparison = self.compare(user_text, correct_text);
        let total_words = words(correct_text).len();
        let accuracy = ScoreCalculator::accuracy(comparison.mistakes.len(), total_words)?;
        let status = ScoreCalculator::status(accuracy, self.success_threshold);

        Ok(Feedback {
            status,
            accuracy,
            user_text: user_text.to_string(),
            correct_text: correct_text.to_string(),
            mistakes: comparison.mistakes,
            matches: comparison.matches,
            rule_matches,
        })
    }

    /// Feedback for many (attempt, reference) pairs in parallel, in input order
    pub fn get_feedback_many(
        &self,
        pairs: &[(String, String)],
    ) -> Vec<Result<Feedback, FeedbackError>> {
        pairs
            .par_iter()
            .map(|(user, correct)| self.get_feedback(user, correct))
            .collect()
    }
}

impl Default for TajweedEngine {
    fn default() -> Self {
        Self::new()
    }
}
