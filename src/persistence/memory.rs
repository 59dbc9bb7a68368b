use std::collections::HashMap;

use super::{BlobStore, StorageError};

/// In-memory blob store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    /// Number of successful writes (saves and removes)
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one blob
    pub fn with_blob(key: &str, blob: &str) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.to_string(), blob.to_string());
        store
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.blobs.insert(key.to_string(), blob.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.blobs.remove(key);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k"), None);

        store.save("k", "v1").unwrap();
        store.save("k", "v2").unwrap();
        assert_eq!(store.load("k").as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert_eq!(store.load("k"), None);
        assert_eq!(store.writes, 3);
    }

    #[test]
    fn test_with_blob() {
        let store = MemoryStore::with_blob("words", "[]");
        assert_eq!(store.load("words").as_deref(), Some("[]"));
        assert_eq!(store.writes, 0);
    }
}
