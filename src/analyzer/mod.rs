//! Analyzer module - rule detection, comparison and scoring

pub mod comparator;
pub mod engine;
pub mod rules;
pub mod scoring;

pub use comparator::compare_words;
pub use engine::TajweedEngine;
pub use scoring::ScoreCalculator;
