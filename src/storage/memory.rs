//! In-memory storage container
//!
//! The test double for the shared key-value namespace, and the reference
//! implementation of the single-writer / many-reader contract: a mutex
//! guards the map, so every read sees a whole pre- or post-write value.

use super::Storage;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mutex-guarded map of keys to raw bytes
///
/// Share one instance via `Arc` to model an app-group container visible to
/// both the store and the widget reader.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if no keys are stored
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned map still holds whole values, so recover it
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, bytes: Vec<u8>) {
        self.lock().insert(key.to_string(), bytes);
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}
