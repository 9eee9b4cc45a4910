use std::sync::Arc;

use crate::{Result, StorageError};

/// Raw key-value storage: whole blobs in, whole blobs out.
///
/// A `set` replaces the previous value of the slot entirely. Implementations
/// must be thread-safe (Send + Sync).
pub trait Storage: Send + Sync {
    /// Reads the blob stored under `key`.
    ///
    /// Returns None if the slot has never been written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the blob stored under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Validates a slot name.
///
/// Keys double as file names in [`crate::FileStorage`], so they are limited to
/// ASCII letters, digits, `_` and `-`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
