//! Spelling Bee - a spoken-word spelling drill
//!
//! Core modules:
//! - `words`: Per-word statistics, the persisted store, weighted selection
//! - `session`: Attempt loop (choose, time, score, record)
//! - `persistence`: Key-value blob storage (LocalStorage on web)
//! - `settings`: Speech preferences
//! - `dictionary`: Definition lookup for display
//! - `list`: Word list ordering

pub mod dictionary;
pub mod list;
pub mod persistence;
pub mod session;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod speech;
pub mod words;

pub use session::{Feedback, StudySession, SubmitOutcome};
pub use settings::SpeechSettings;
pub use words::{WordRecord, WordStore};

/// Storage keys and selection constants
pub mod consts {
    /// Word list blob
    pub const WORDS_KEY: &str = "spelling-bee-words";
    /// Preferred voice URI
    pub const VOICE_KEY: &str = "spelling-bee-voice";
    /// Speaking rate
    pub const RATE_KEY: &str = "spelling-bee-rate";

    /// Attempts kept in each word's history
    pub const HISTORY_LEN: usize = 10;
    /// Correct rate assumed for a word never attempted
    pub const UNTRIED_CORRECT_RATE: f64 = 0.33;
    /// Added to the correct rate before inverting (caps weight at 10)
    pub const WEIGHT_OFFSET: f64 = 0.1;
}
