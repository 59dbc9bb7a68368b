//! Weighted random word selection
//!
//! Words with a lower correct rate are drawn more often. Weights are
//! recomputed from the current statistics on every call.

use rand::Rng;

use super::record::WordRecord;
use crate::consts::{UNTRIED_CORRECT_RATE, WEIGHT_OFFSET};

/// Correct rate used for scheduling (prior for untried words)
pub fn scheduling_rate(record: &WordRecord) -> f64 {
    record.correct_rate().unwrap_or(UNTRIED_CORRECT_RATE)
}

/// Selection weight, in (1 / (1 + offset), 1 / offset]
pub fn weight(record: &WordRecord) -> f64 {
    1.0 / (scheduling_rate(record) + WEIGHT_OFFSET)
}

/// Pick the record whose cumulative weight first reaches `draw`
///
/// Falls back to the last record if rounding leaves the sum short.
pub fn pick_at(records: &[WordRecord], draw: f64) -> Option<&WordRecord> {
    let mut cumulative = 0.0;
    for record in records {
        cumulative += weight(record);
        if draw <= cumulative {
            return Some(record);
        }
    }
    records.last()
}

/// Choose the next word to present, `None` only for an empty collection
pub fn choose<'a, R: Rng + ?Sized>(records: &'a [WordRecord], rng: &mut R) -> Option<&'a WordRecord> {
    if records.is_empty() {
        return None;
    }
    let total: f64 = records.iter().map(weight).sum();
    let draw = rng.random::<f64>() * total;
    let chosen = pick_at(records, draw);
    if let Some(rec) = chosen {
        log::debug!("Selected '{}' (draw {:.3} of {:.3})", rec.word, draw, total);
    }
    chosen
}

/// Selection probability of each record, in collection order
pub fn probabilities(records: &[WordRecord]) -> Vec<f64> {
    let weights: Vec<f64> = records.iter().map(weight).collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}
