//! Durable key-value storage scopes.
//!
//! [`KeyValueStorage`] mirrors the browser storage API: string keys, string
//! values, whole-value reads and writes. Everything written through one scope
//! is visible to every later read through the same scope; there is no change
//! notification between readers.

mod file;
mod memory;

use std::sync::Arc;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Error type for storage backend failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The value could not be serialized.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The key cannot be mapped onto the backend.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// A writer panicked while holding the in-memory scope.
    #[error("Storage lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A single-writer key-value scope.
pub trait KeyValueStorage {
    /// Value stored under `key`, or `None` if the key was never written.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
