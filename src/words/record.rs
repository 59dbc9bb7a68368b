//! Per-word performance statistics
//!
//! Field names match the persisted JSON layout (camelCase).

use serde::{Deserialize, Serialize};

use crate::consts::HISTORY_LEN;

/// Statistics for one vocabulary word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    /// Text as entered (display case preserved)
    pub word: String,
    /// Attempts judged incorrect, never above `total_attempts`
    pub incorrect_count: u32,
    /// Completed attempts
    pub total_attempts: u32,
    /// Running mean of elapsed time, 0 before the first attempt
    #[serde(default, alias = "averageTime")]
    pub average_time_ms: f64,
    /// Most recent outcomes, oldest first (true = correct)
    #[serde(default)]
    pub history: Vec<bool>,
}

impl WordRecord {
    /// Fresh record with zeroed counters
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            incorrect_count: 0,
            total_attempts: 0,
            average_time_ms: 0.0,
            history: Vec::with_capacity(HISTORY_LEN),
        }
    }

    /// Case-insensitive identity key
    pub fn key(&self) -> String {
        normalize(&self.word)
    }

    /// Attempts answered correctly
    pub fn correct_count(&self) -> u32 {
        self.total_attempts - self.incorrect_count
    }

    /// Fraction answered correctly, `None` if never attempted
    pub fn correct_rate(&self) -> Option<f64> {
        if self.total_attempts == 0 {
            return None;
        }
        Some(self.correct_count() as f64 / self.total_attempts as f64)
    }

    /// Fold one completed attempt into the statistics
    pub fn apply_attempt(&mut self, is_correct: bool, elapsed_ms: f64) {
        let elapsed_ms = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };

        let old_total = self.total_attempts as f64;
        self.total_attempts += 1;
        if !is_correct {
            self.incorrect_count += 1;
        }
        self.average_time_ms =
            (self.average_time_ms * old_total + elapsed_ms) / self.total_attempts as f64;

        self.history.push(is_correct);
        if self.history.len() > HISTORY_LEN {
            let excess = self.history.len() - HISTORY_LEN;
            self.history.drain(..excess);
        }
    }

    /// Check the invariants a persisted record must satisfy
    pub fn is_well_formed(&self) -> bool {
        !self.word.trim().is_empty()
            && self.incorrect_count <= self.total_attempts
            && self.history.len() <= HISTORY_LEN
            && self.average_time_ms.is_finite()
            && self.average_time_ms >= 0.0
    }
}

/// Normalize word text for duplicate detection
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}
