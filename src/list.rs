//! Word list ordering for the management screen
//!
//! Sorting is a view over the store; it never reorders the records.

use std::cmp::Ordering;

use crate::words::WordRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Word,
    Attempts,
    CorrectRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Active column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Click on a column: same column flips direction, a new one starts ascending
    pub fn request(&mut self, key: SortKey) {
        self.direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.key = key;
    }
}

/// Correct rate for ordering (untried words rank below every tried word)
fn sort_rate(record: &WordRecord) -> f64 {
    record.correct_rate().unwrap_or(-1.0)
}

fn compare(a: &WordRecord, b: &WordRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Word => a.word.to_lowercase().cmp(&b.word.to_lowercase()),
        SortKey::Attempts => a.total_attempts.cmp(&b.total_attempts),
        SortKey::CorrectRate => sort_rate(a).total_cmp(&sort_rate(b)),
    }
}

/// Records in display order (stable for ties)
pub fn sorted<'a>(records: &'a [WordRecord], config: SortConfig) -> Vec<&'a WordRecord> {
    let mut view: Vec<&WordRecord> = records.iter().collect();
    view.sort_by(|a, b| {
        let ord = compare(a, b, config.key);
        match config.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    view
}

/// Correct rate column text: `-` if untried, else a rounded percentage
pub fn format_correct_rate(record: &WordRecord) -> String {
    match record.correct_rate() {
        Some(rate) => format!("{}%", (rate * 100.0).round() as u32),
        None => "-".to_string(),
    }
}
