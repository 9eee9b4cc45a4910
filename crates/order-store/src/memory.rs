use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{Result, StorageError, storage::Storage, validate_key};

#[derive(Debug, Default)]
struct InMemoryState {
    slots: HashMap<String, Vec<u8>>,
    fail_on_read: bool,
    fail_on_write: bool,
}

/// In-memory storage for tests and throwaway sessions.
///
/// Clones share the same slots. Reads and writes can be made to fail to
/// exercise the order store's recovery paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage with one slot already populated.
    pub fn with_slot(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        let storage = Self::new();
        storage
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .slots
            .insert(key.into(), value.into());
        storage
    }

    /// Configures subsequent reads to fail.
    pub fn set_fail_on_read(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_read = fail;
    }

    /// Configures subsequent writes to fail.
    pub fn set_fail_on_write(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_write = fail;
    }

    /// Returns the raw blob in a slot, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .slots
            .get(key)
            .cloned()
    }

    /// Returns the number of populated slots.
    pub fn slot_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .slots
            .len()
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        let state = self
            .state
            .read()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))?;

        if state.fail_on_read {
            return Err(StorageError::Unavailable("read refused".to_string()));
        }
        Ok(state.slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        let mut state = self
            .state
            .write()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))?;

        if state.fail_on_write {
            return Err(StorageError::Unavailable("write refused".to_string()));
        }
        state.slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_reads_as_none() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.get("orders").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_whole_value() {
        let storage = InMemoryStorage::new();
        storage.set("orders", b"[1,2,3]").unwrap();
        storage.set("orders", b"[]").unwrap();
        assert_eq!(storage.get("orders").unwrap(), Some(b"[]".to_vec()));
        assert_eq!(storage.slot_count(), 1);
    }

    #[test]
    fn test_clones_share_slots() {
        let storage = InMemoryStorage::new();
        let other = storage.clone();
        storage.set("orders", b"x").unwrap();
        assert_eq!(other.get("orders").unwrap(), Some(b"x".to_vec()));
    }

    #[test]
    fn test_injected_failures() {
        let storage = InMemoryStorage::with_slot("orders", "[]");

        storage.set_fail_on_read(true);
        assert!(matches!(
            storage.get("orders"),
            Err(StorageError::Unavailable(_))
        ));

        storage.set_fail_on_write(true);
        assert!(matches!(
            storage.set("orders", b"[1]"),
            Err(StorageError::Unavailable(_))
        ));
        assert_eq!(storage.raw("orders"), Some(b"[]".to_vec()));

        storage.set_fail_on_read(false);
        assert_eq!(storage.get("orders").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let storage = InMemoryStorage::new();
        assert!(matches!(
            storage.set("../x", b"1"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
