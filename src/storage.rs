//! String key-value persistence seam.
//!
//! The feedback board persists through [`KeyValueStore`] so it can run against
//! `window.localStorage` in the browser ([`BrowserStorage`], hydrate only) and
//! against [`MemoryStorage`] everywhere else.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the write is refused.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store with optional failure injection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    /// Largest value accepted by `set_item`, in bytes.
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects values longer than `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { quota: Some(bytes), ..Self::default() }
    }

    /// A store whose reads and writes all fail, like a browser with storage
    /// turned off.
    #[must_use]
    pub fn disabled() -> Self {
        Self { disabled: true, ..Self::default() }
    }

    /// Seed a raw value, bypassing quota and the disabled switch.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        if self.quota.is_some_and(|quota| value.len() > quota) {
            return Err(StorageError::QuotaExceeded);
        }
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`. Requires a browser environment.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    /// Resolve `localStorage`; a missing window or storage object leaves the
    /// handle unavailable rather than failing.
    #[must_use]
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage is not accessible: {err:?}");
                None
            }
        });
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| StorageError::QuotaExceeded)
    }
}
