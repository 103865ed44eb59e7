//! Key-value slot abstraction
//!
//! Callers that persist a single serialized unit (bookmarks, for instance)
//! depend on this trait rather than on SQLite, so the store can be injected.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::database::Database;
use crate::error::StorageError;
use crate::Result;

pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl KeyValueStore for Database {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.get_slot(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.set_slot(key, value)
    }
}

/// Volatile store used by tests and by shells started without a data directory.
#[derive(Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single slot.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .lock()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(StorageError::EmptyKey);
        }
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
