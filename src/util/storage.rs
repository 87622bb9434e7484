//! Durable key-value storage for the dark mode preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store talks to a `PreferenceStorage` instead of `localStorage`
//! directly, so the same code runs in the browser (`hydrate`) and in native
//! tests or server rendering with an in-memory map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DarkModeError;

/// String key-value storage scoped to the browsing context.
pub trait PreferenceStorage: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Storage`] when the backend is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, DarkModeError>;

    /// Overwrite the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DarkModeError::Storage`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), DarkModeError>;
}

/// Load a JSON value for `key`.
///
/// Missing keys, backend failures, and malformed values all yield `None`;
/// the latter two are logged.
pub fn load_json<T: DeserializeOwned>(storage: &dyn PreferenceStorage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("reading {key}: {err}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring unparseable {key} value {raw:?}: {err}");
            None
        }
    }
}

/// Save a JSON value for `key`. Failures are logged, not returned.
pub fn save_json<T: Serialize>(storage: &dyn PreferenceStorage, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("encoding {key}: {err}");
            return;
        }
    };
    if let Err(err) = storage.set(key, &raw) {
        log::warn!("writing {key}: {err}");
    }
}

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Storage pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.insert(key, value);
        storage
    }

    /// Current raw value for `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DarkModeError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DarkModeError> {
        self.insert(key, value);
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, DarkModeError> {
        let window = web_sys::window().ok_or_else(|| DarkModeError::Storage("no window".to_owned()))?;
        window
            .local_storage()
            .map_err(|err| DarkModeError::Storage(format!("{err:?}")))?
            .ok_or_else(|| DarkModeError::Storage("localStorage unavailable".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DarkModeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| DarkModeError::Storage(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DarkModeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| DarkModeError::Storage(format!("{err:?}")))
    }
}

/// Storage backend for the current build: `localStorage` in the browser,
/// an empty in-memory map elsewhere.
pub fn platform_storage() -> Box<dyn PreferenceStorage> {
    #[cfg(feature = "hydrate")]
    {
        Box::new(LocalStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Box::new(MemoryStorage::default())
    }
}
