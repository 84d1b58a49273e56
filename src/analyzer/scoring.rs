//! Accuracy and status calculation for a recitation attempt

use crate::{FeedbackError, Status};

/// Default success threshold; accuracy must be strictly above it
pub const DEFAULT_SUCCESS_THRESHOLD: u8 = 80;

/// Calculator for accuracy scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Percentage of reference words that were not mistaken, rounded half
    /// to even and clamped at 0.
    ///
    /// Mistakes can exceed the reference length when the attempt is longer,
    /// which is what the clamp is for.
    pub fn accuracy(mistake_count: usize, total_words: usize) -> Result<u8, FeedbackError> {
        if total_words == 0 {
            return Err(FeedbackError::EmptyReference);
        }
        let ratio = 1.0 - (mistake_count as f64 / total_words as f64);
        let percent = (ratio * 100.0).round_ties_even();
        Ok(percent.clamp(0.0, 100.0) as u8)
    }

    /// Success only when accuracy is strictly greater than the threshold
    pub fn status(accuracy: u8, threshold: u8) -> Status {
        if accuracy > threshold {
            Status::Success
        } else {
            Status::Retry
        }
    }

    /// Encouragement shown under the score
    pub fn status_description(status: Status) -> &'static str {
        match status {
            Status::Success => "Recitation matches the reference closely",
            Status::Retry => "Review the highlighted words and try again",
        }
    }
}
