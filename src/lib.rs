//! Tajweed: recitation analysis for Arabic text
//!
//! This library detects silent-nun and prolongation rules in a reference
//! text and compares a learner's attempt against it word by word, producing
//! a feedback record with an accuracy score.

pub mod alphabet;
pub mod analyzer;
pub mod config;
pub mod reporter;
pub mod service;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use analyzer::TajweedEngine;

/// Placeholder reported as `got` when the attempt has no word at a position
pub const EMPTY_WORD: &str = "(empty)";

/// Tajweed rules the engine can detect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Iqlab,
    Idgham,
    Ikhfa,
    Madd,
}

impl RuleKind {
    /// All rules in detection order
    pub const ALL: [RuleKind; 4] = [
        RuleKind::Iqlab,
        RuleKind::Idgham,
        RuleKind::Ikhfa,
        RuleKind::Madd,
    ];

    /// Lowercase identifier used in config files
    pub fn id(self) -> &'static str {
        match self {
            RuleKind::Iqlab => "iqlab",
            RuleKind::Idgham => "idgham",
            RuleKind::Ikhfa => "ikhfa",
            RuleKind::Madd => "madd",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    /// Arabic name of the rule
    pub fn arabic_name(self) -> &'static str {
        match self {
            RuleKind::Iqlab => "الإقلاب",
            RuleKind::Idgham => "الإدغام",
            RuleKind::Ikhfa => "الإخفاء",
            RuleKind::Madd => "المد",
        }
    }

    /// Short Arabic description of what the rule does to the sound
    pub fn description(self) -> &'static str {
        match self {
            RuleKind::Iqlab => "نون ساكنة تُقلب ميمًا قبل الباء",
            RuleKind::Idgham => "نون ساكنة تدخل في الحرف التالي",
            RuleKind::Ikhfa => "نون ساكنة تُخفى بصوت الغنة",
            RuleKind::Madd => "إطالة الصوت",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::Iqlab => write!(f, "Iqlab"),
            RuleKind::Idgham => write!(f, "Idgham"),
            RuleKind::Ikhfa => write!(f, "Ikhfa"),
            RuleKind::Madd => write!(f, "Madd"),
        }
    }
}

/// One occurrence of a rule in the reference text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Rule that matched
    pub rule: RuleKind,
    /// Arabic rule name
    #[serde(rename = "ar")]
    pub arabic_name: String,
    /// Arabic description
    #[serde(rename = "desc")]
    pub description: String,
    /// Matched text
    pub example: String,
}

impl RuleMatch {
    pub fn new(rule: RuleKind, example: impl Into<String>) -> Self {
        Self {
            rule,
            arabic_name: rule.arabic_name().to_string(),
            description: rule.description().to_string(),
            example: example.into(),
        }
    }
}

/// A position where the attempt equals the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// 0-based word position
    pub index: usize,
    pub word: String,
}

/// A position where the attempt differs from the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMistake {
    /// 0-based word position
    pub index: usize,
    /// Reference word (empty when the attempt is longer)
    pub expected: String,
    /// Submitted word, or [`EMPTY_WORD`] when missing
    pub got: String,
}

/// Result of a positional word comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub mistakes: Vec<WordMistake>,
    #[serde(rename = "correct")]
    pub matches: Vec<WordMatch>,
}

impl Comparison {
    /// Number of positions compared
    pub fn len(&self) -> usize {
        self.mistakes.len() + self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome label shown to the learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "✅ تم بنجاح")]
    Success,
    #[serde(rename = "🔁 أعد المحاولة")]
    Retry,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Success => "✅ تم بنجاح",
            Status::Retry => "🔁 أعد المحاولة",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Full feedback for one attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub status: Status,
    /// Accuracy percentage (0-100)
    pub accuracy: u8,
    /// Submitted text, verbatim
    pub user_text: String,
    /// Reference text, verbatim
    pub correct_text: String,
    pub mistakes: Vec<WordMistake>,
    #[serde(rename = "correct")]
    pub matches: Vec<WordMatch>,
    /// Rules found in the reference text
    #[serde(rename = "ahkam")]
    pub rule_matches: Vec<RuleMatch>,
}

/// Errors produced while building feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// Accuracy is undefined when the reference has no words
    #[error("division by zero: reference text contains no words")]
    EmptyReference,
}
