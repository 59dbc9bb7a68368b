//! Key-value blob storage
//!
//! Backends:
//! - `LocalStorage`: browser LocalStorage (wasm32 only)
//! - `MemoryStore`: in-process map for native runs and tests
//!
//! Writes are last-writer-wins; nothing here coordinates between tabs.

mod memory;
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

use thiserror::Error;

/// Failure writing to a blob store
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage backend available (private mode, sandboxed frame)
    #[error("storage unavailable")]
    Unavailable,
    /// Backend rejected the write (quota exceeded, etc.)
    #[error("storage write failed for '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Opaque persisted blobs under string keys
pub trait BlobStore {
    /// Read the blob under `key`, `None` if absent or unreadable
    fn load(&self, key: &str) -> Option<String>;

    /// Replace the blob under `key`
    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;

    /// Delete the blob under `key` (absent keys are fine)
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
