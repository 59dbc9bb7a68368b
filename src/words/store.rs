//! Persisted word collection
//!
//! The only mutation surface for word statistics. Every change is written
//! through to the blob store as one JSON array under `WORDS_KEY`.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use super::defaults::STARTER_WORDS;
use super::record::{WordRecord, normalize};
use super::selector;
use crate::consts::WORDS_KEY;
use crate::persistence::BlobStore;

/// Why a persisted blob was rejected
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("unparsable word list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid record for '{0}'")]
    Invalid(String),
    #[error("duplicate word '{0}'")]
    Duplicate(String),
}

/// Decode and validate a persisted word list
pub fn parse_snapshot(blob: &str) -> Result<Vec<WordRecord>, SnapshotError> {
    let records: Vec<WordRecord> = serde_json::from_str(blob)?;
    let mut seen = HashSet::with_capacity(records.len());
    for rec in &records {
        if !rec.is_well_formed() {
            return Err(SnapshotError::Invalid(rec.word.clone()));
        }
        if !seen.insert(rec.key()) {
            return Err(SnapshotError::Duplicate(rec.word.clone()));
        }
    }
    Ok(records)
}

/// Starter vocabulary with zeroed statistics
pub fn starter_records() -> Vec<WordRecord> {
    STARTER_WORDS.iter().map(|w| WordRecord::new(*w)).collect()
}

/// Word collection backed by a blob store
pub struct WordStore<S: BlobStore> {
    records: Vec<WordRecord>,
    storage: S,
}

impl<S: BlobStore> WordStore<S> {
    /// Restore from storage, seeding the starter list if nothing usable is saved
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            records: Vec::new(),
            storage,
        };
        let blob = store.storage.load(WORDS_KEY);
        store.restore(blob.as_deref());
        store
    }

    /// All records in insertion order
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    /// Record with an exact key match
    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.records.iter().find(|r| r.word == word)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Underlying blob store
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn contains_normalized(&self, key: &str) -> bool {
        self.records.iter().any(|r| r.key() == key)
    }

    /// Add a word (trimmed). Returns false for blanks and case-insensitive duplicates.
    pub fn add_word(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.contains_normalized(&normalize(trimmed)) {
            return false;
        }
        self.records.push(WordRecord::new(trimmed));
        log::info!("Added word '{}'", trimmed);
        self.persist();
        true
    }

    /// Remove the record with an exact key match
    pub fn delete_word(&mut self, word: &str) -> bool {
        let Some(idx) = self.records.iter().position(|r| r.word == word) else {
            return false;
        };
        self.records.remove(idx);
        log::info!("Deleted word '{}'", word);
        self.persist();
        true
    }

    /// Fold one attempt into the matching record. Unknown words are ignored.
    pub fn record_attempt(&mut self, word: &str, is_correct: bool, elapsed_ms: f64) -> bool {
        let Some(rec) = self.records.iter_mut().find(|r| r.word == word) else {
            return false;
        };
        rec.apply_attempt(is_correct, elapsed_ms);
        log::debug!(
            "Attempt '{}': correct={} elapsed={:.0}ms ({} of {} wrong)",
            word,
            is_correct,
            elapsed_ms,
            rec.incorrect_count,
            rec.total_attempts
        );
        self.persist();
        true
    }

    /// Discard every record and re-seed the starter vocabulary
    pub fn reset_all(&mut self) {
        self.records = starter_records();
        log::info!("Seeded {} starter words", self.records.len());
        self.persist();
    }

    /// Append starter words that are missing. Returns how many were added.
    pub fn add_missing_defaults(&mut self) -> usize {
        let existing: HashSet<String> = self.records.iter().map(WordRecord::key).collect();
        let before = self.records.len();
        self.records.extend(
            STARTER_WORDS
                .iter()
                .filter(|w| !existing.contains(&normalize(w)))
                .map(|w| WordRecord::new(*w)),
        );
        let added = self.records.len() - before;
        if added > 0 {
            log::info!("Added {} missing starter words", added);
            self.persist();
        }
        added
    }

    /// Serialize the whole collection
    pub fn snapshot(&self) -> String {
        // Plain structs with finite floats always serialize
        serde_json::to_string(&self.records).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace the collection from a persisted blob
    ///
    /// Absent or malformed blobs fall back to `reset_all`.
    pub fn restore(&mut self, blob: Option<&str>) {
        match blob.map(parse_snapshot) {
            Some(Ok(records)) => {
                log::info!("Loaded {} words from storage", records.len());
                self.records = records;
            }
            Some(Err(e)) => {
                log::warn!("Discarding saved words ({}), re-seeding", e);
                self.reset_all();
            }
            None => {
                log::info!("No saved words found, seeding defaults");
                self.reset_all();
            }
        }
    }

    /// Choose the next word to present
    pub fn choose_next<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        selector::choose(&self.records, rng).map(|r| r.word.as_str())
    }

    fn persist(&mut self) {
        let blob = self.snapshot();
        if let Err(e) = self.storage.save(WORDS_KEY, &blob) {
            log::warn!("Failed to save words: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn empty_store() -> WordStore<MemoryStore> {
        WordStore::open(MemoryStore::with_blob(WORDS_KEY, "[]"))
    }

    fn saved_records(store: &WordStore<MemoryStore>) -> Vec<WordRecord> {
        let blob = store.storage().load(WORDS_KEY).unwrap();
        parse_snapshot(&blob).unwrap()
    }

    #[test]
    fn test_open_without_blob_seeds_defaults() {
        let store = WordStore::open(MemoryStore::new());
        assert_eq!(store.len(), STARTER_WORDS.len());
        assert!(store.records().iter().all(|r| r.total_attempts == 0));
        assert_eq!(store.storage().writes, 1);
        assert_eq!(saved_records(&store).len(), STARTER_WORDS.len());
    }

    #[test]
    fn test_open_with_garbage_seeds_defaults() {
        let store = WordStore::open(MemoryStore::with_blob(WORDS_KEY, "{not json"));
        assert_eq!(store.len(), STARTER_WORDS.len());
    }

    #[test]
    fn test_open_with_invalid_records_seeds_defaults() {
        let bad_counts = r#"[{"word":"cat","incorrectCount":5,"totalAttempts":2,"averageTimeMs":0,"history":[]}]"#;
        let store = WordStore::open(MemoryStore::with_blob(WORDS_KEY, bad_counts));
        assert_eq!(store.len(), STARTER_WORDS.len());

        let dupes = r#"[{"word":"Cat","incorrectCount":0,"totalAttempts":0},{"word":"cat","incorrectCount":0,"totalAttempts":0}]"#;
        assert!(matches!(parse_snapshot(dupes), Err(SnapshotError::Duplicate(_))));
    }

    #[test]
    fn test_open_with_empty_list_keeps_it() {
        let store = empty_store();
        assert!(store.is_empty());
        assert_eq!(store.storage().writes, 0);
    }

    #[test]
    fn test_add_word_trims_and_dedups() {
        let mut store = empty_store();
        assert!(store.add_word("  Apple "));
        assert!(!store.add_word("apple"));
        assert!(!store.add_word("APPLE"));
        assert!(!store.add_word("   "));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].word, "Apple");
        assert_eq!(store.storage().writes, 1);
    }

    #[test]
    fn test_delete_word_exact_match() {
        let mut store = empty_store();
        store.add_word("Apple");
        store.add_word("pear");
        let before = store.records().to_vec();

        assert!(!store.delete_word("missing"));
        assert!(!store.delete_word("apple"));
        assert_eq!(store.records(), &before[..]);

        assert!(store.delete_word("Apple"));
        assert_eq!(store.len(), 1);
        assert_eq!(saved_records(&store), store.records());
    }

    #[test]
    fn test_record_attempt_updates_and_persists() {
        let mut store = empty_store();
        store.add_word("heron");
        assert!(store.record_attempt("heron", false, 4000.0));
        assert!(store.record_attempt("heron", true, 2000.0));

        let rec = store.get("heron").unwrap();
        assert_eq!(rec.total_attempts, 2);
        assert_eq!(rec.incorrect_count, 1);
        assert_eq!(rec.history, vec![false, true]);
        assert!((rec.average_time_ms - 3000.0).abs() < 1e-9);
        assert_eq!(saved_records(&store)[0], *rec);
    }

    #[test]
    fn test_record_attempt_unknown_word_is_noop() {
        let mut store = empty_store();
        store.add_word("heron");
        let writes = store.storage().writes;
        assert!(!store.record_attempt("Heron", true, 100.0));
        assert!(!store.record_attempt("egret", true, 100.0));
        assert_eq!(store.get("heron").unwrap().total_attempts, 0);
        assert_eq!(store.storage().writes, writes);
    }

    #[test]
    fn test_reset_all_restores_starter_list() {
        let mut store = WordStore::open(MemoryStore::new());
        store.add_word("zzyzx");
        store.record_attempt("acrobat", false, 900.0);
        store.reset_all();

        assert_eq!(store.len(), STARTER_WORDS.len());
        assert!(store.get("zzyzx").is_none());
        assert_eq!(store.get("acrobat").unwrap().total_attempts, 0);
    }

    #[test]
    fn test_add_missing_defaults() {
        let mut store = empty_store();
        store.add_word("ACROBAT");
        store.record_attempt("ACROBAT", true, 500.0);

        let added = store.add_missing_defaults();
        assert_eq!(added, STARTER_WORDS.len() - 1);
        assert_eq!(store.len(), STARTER_WORDS.len());
        // Existing record untouched, not duplicated
        assert_eq!(store.get("ACROBAT").unwrap().total_attempts, 1);
        assert!(store.get("acrobat").is_none());

        let writes = store.storage().writes;
        assert_eq!(store.add_missing_defaults(), 0);
        assert_eq!(store.storage().writes, writes);
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut store = empty_store();
        for w in ["cat", "dog", "hors d'oeuvres", "señor"] {
            store.add_word(w);
        }
        store.record_attempt("cat", false, 1234.5);
        store.record_attempt("señor", true, 800.25);

        let blob = store.snapshot();
        let mut other = empty_store();
        other.restore(Some(&blob));
        assert_eq!(other.records(), store.records());
    }

    #[test]
    fn test_choose_next() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut store = empty_store();
        assert_eq!(store.choose_next(&mut rng), None);

        store.add_word("solo");
        assert_eq!(store.choose_next(&mut rng), Some("solo"));
    }

    proptest! {
        #[test]
        fn prop_round_trip_any_valid_collection(
            entries in prop::collection::vec(
                ("[a-zA-Z]{1,12}", prop::collection::vec((any::<bool>(), 0u32..100_000), 0..15)),
                0..20,
            )
        ) {
            let mut store = empty_store();
            for (word, attempts) in &entries {
                store.add_word(word);
                for &(ok, ms) in attempts {
                    store.record_attempt(word, ok, ms as f64);
                }
            }
            let mut restored = empty_store();
            restored.restore(Some(&store.snapshot()));
            prop_assert_eq!(restored.records(), store.records());
        }
    }
}
