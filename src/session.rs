//! Study session flow
//!
//! One attempt at a time: choose a word, time the answer, score it, report it
//! to the store. Times are wall-clock milliseconds supplied by the caller.

use rand::Rng;

use crate::persistence::BlobStore;
use crate::words::WordStore;

/// Feedback for the current word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// Waiting for an answer
    #[default]
    Idle,
    Correct,
    Incorrect,
}

/// What the caller should do after a submit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// No word loaded
    NoWord,
    /// Blank input: say the word again
    Replay,
    /// Answer already shown: move on
    Advance,
    /// Attempt scored and recorded
    Scored { correct: bool, elapsed_ms: f64 },
}

/// Whether a typed answer matches the target word
pub fn is_correct_spelling(input: &str, target: &str) -> bool {
    input.trim().to_lowercase() == target.to_lowercase()
}

/// Attempt loop state
#[derive(Debug, Default)]
pub struct StudySession {
    started: bool,
    current: Option<String>,
    feedback: Feedback,
    started_at_ms: Option<f64>,
    /// Elapsed time frozen when the attempt was scored
    final_elapsed_ms: Option<f64>,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn current_word(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Begin the session with its first word
    pub fn start<S: BlobStore, R: Rng + ?Sized>(
        &mut self,
        store: &WordStore<S>,
        rng: &mut R,
        now_ms: f64,
    ) -> Option<&str> {
        self.started = true;
        log::info!("Study session started ({} words)", store.len());
        self.next_word(store, rng, now_ms)
    }

    /// Load the next word and restart the timer
    ///
    /// Returns `None` (and keeps no current word) when the store is empty.
    pub fn next_word<S: BlobStore, R: Rng + ?Sized>(
        &mut self,
        store: &WordStore<S>,
        rng: &mut R,
        now_ms: f64,
    ) -> Option<&str> {
        self.feedback = Feedback::Idle;
        self.final_elapsed_ms = None;
        match store.choose_next(rng) {
            Some(word) => {
                self.current = Some(word.to_string());
                self.started_at_ms = Some(now_ms);
            }
            None => {
                self.current = None;
                self.started_at_ms = None;
            }
        }
        self.current.as_deref()
    }

    /// Handle a submitted answer
    pub fn submit<S: BlobStore>(
        &mut self,
        store: &mut WordStore<S>,
        input: &str,
        now_ms: f64,
    ) -> SubmitOutcome {
        let Some(word) = self.current.as_deref() else {
            return SubmitOutcome::NoWord;
        };
        if input.trim().is_empty() {
            return SubmitOutcome::Replay;
        }
        if self.feedback != Feedback::Idle {
            return SubmitOutcome::Advance;
        }

        let correct = is_correct_spelling(input, word);
        let elapsed_ms = self
            .started_at_ms
            .map(|start| (now_ms - start).max(0.0))
            .unwrap_or(0.0);

        store.record_attempt(word, correct, elapsed_ms);
        self.feedback = if correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };
        self.final_elapsed_ms = Some(elapsed_ms);

        SubmitOutcome::Scored {
            correct,
            elapsed_ms,
        }
    }

    /// Timer value for display
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        if let Some(frozen) = self.final_elapsed_ms {
            return frozen;
        }
        self.started_at_ms
            .map(|start| (now_ms - start).max(0.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WORDS_KEY;
    use crate::persistence::MemoryStore;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn store_with(words: &[&str]) -> WordStore<MemoryStore> {
        let mut store = WordStore::open(MemoryStore::with_blob(WORDS_KEY, "[]"));
        for w in words {
            store.add_word(w);
        }
        store
    }

    #[test]
    fn test_spelling_check() {
        assert!(is_correct_spelling("  Berlin ", "Berlin"));
        assert!(is_correct_spelling("berlin", "Berlin"));
        assert!(is_correct_spelling("AU REVOIR", "au revoir"));
        assert!(!is_correct_spelling("berlinn", "Berlin"));
        assert!(!is_correct_spelling("au  revoir", "au revoir"));
    }

    #[test]
    fn test_correct_attempt_flow() {
        let mut store = store_with(&["Berlin"]);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut session = StudySession::new();
        assert!(!session.has_started());

        assert_eq!(session.start(&store, &mut rng, 1_000.0), Some("Berlin"));
        assert!(session.has_started());
        assert_eq!(session.elapsed_ms(1_500.0), 500.0);

        let outcome = session.submit(&mut store, "berlin", 3_500.0);
        assert_eq!(
            outcome,
            SubmitOutcome::Scored {
                correct: true,
                elapsed_ms: 2_500.0
            }
        );
        assert_eq!(session.feedback(), Feedback::Correct);
        // Timer frozen after scoring
        assert_eq!(session.elapsed_ms(9_000.0), 2_500.0);

        let rec = store.get("Berlin").unwrap();
        assert_eq!(rec.total_attempts, 1);
        assert_eq!(rec.incorrect_count, 0);
        assert_eq!(rec.average_time_ms, 2_500.0);
    }

    #[test]
    fn test_incorrect_then_advance() {
        let mut store = store_with(&["gaunt"]);
        let mut rng = Pcg32::seed_from_u64(2);
        let mut session = StudySession::new();
        session.start(&store, &mut rng, 0.0);

        let outcome = session.submit(&mut store, "gont", 800.0);
        assert!(matches!(outcome, SubmitOutcome::Scored { correct: false, .. }));
        assert_eq!(session.feedback(), Feedback::Incorrect);

        // A second submit while feedback is shown does not record again
        assert_eq!(session.submit(&mut store, "gaunt", 900.0), SubmitOutcome::Advance);
        assert_eq!(store.get("gaunt").unwrap().total_attempts, 1);

        session.next_word(&store, &mut rng, 1_000.0);
        assert_eq!(session.feedback(), Feedback::Idle);
        assert_eq!(session.elapsed_ms(1_250.0), 250.0);
    }

    #[test]
    fn test_blank_input_replays() {
        let mut store = store_with(&["ajar"]);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut session = StudySession::new();
        session.start(&store, &mut rng, 0.0);

        assert_eq!(session.submit(&mut store, "   ", 100.0), SubmitOutcome::Replay);
        assert_eq!(session.feedback(), Feedback::Idle);
        assert_eq!(store.get("ajar").unwrap().total_attempts, 0);
    }

    #[test]
    fn test_empty_store() {
        let mut store = store_with(&[]);
        let mut rng = Pcg32::seed_from_u64(4);
        let mut session = StudySession::new();
        assert_eq!(session.start(&store, &mut rng, 0.0), None);
        assert_eq!(session.current_word(), None);
        assert_eq!(session.submit(&mut store, "anything", 10.0), SubmitOutcome::NoWord);
    }

    #[test]
    fn test_deleted_word_attempt_is_ignored() {
        let mut store = store_with(&["tulle"]);
        let mut rng = Pcg32::seed_from_u64(5);
        let mut session = StudySession::new();
        session.start(&store, &mut rng, 0.0);
        store.delete_word("tulle");

        let outcome = session.submit(&mut store, "tulle", 100.0);
        assert!(matches!(outcome, SubmitOutcome::Scored { correct: true, .. }));
        assert!(store.is_empty());
    }
}
