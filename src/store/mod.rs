//! Preference persistence backends.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: the key-value persistence trait
//! - [`MemoryStore`]: volatile in-process storage
//! - [`JsonFileStore`]: a JSON-file-backed store
//! - [`StoreError`]: errors a backend may produce
//!
//! Backends hold one string per key. Every error is caught at the
//! controller boundary and degrades to in-memory state; nothing here is
//! allowed to take the theme machinery down.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Error produced by a [`PreferenceStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend cannot be reached at all.
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
    /// The underlying file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The stored contents are not the expected JSON shape.
    #[error("malformed store contents: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Key-value persistence for theme preferences.
pub trait PreferenceStore {
    /// Reads the value stored under `key`; `Ok(None)` when absent.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for &mut P {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}
