//! Local persistence for UI preferences.
//!
//! Persistence is best effort: every read or write failure is logged and then treated as
//! "no stored value", so callers never see storage errors.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus_logger::tracing::warn;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String key-value store with browser `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same map, which lets a test "reload the page" by
/// building a second controller over the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, resolved on every call so a storage that becomes available (or
/// disabled) mid-session is picked up.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Decode a stored flag. Only the exact string `"true"` is true.
pub fn decode_flag(raw: &str) -> bool {
    raw == "true"
}

pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Read a boolean preference. `None` covers both "never stored" and "storage failed".
pub fn load_flag<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<bool> {
    match store.get(key) {
        Ok(raw) => raw.as_deref().map(decode_flag),
        Err(err) => {
            warn!("Could not load `{key}`: {err}");
            None
        }
    }
}

/// Write a boolean preference, logging (not returning) any failure.
pub fn save_flag<S: KeyValueStore + ?Sized>(store: &S, key: &str, value: bool) {
    if let Err(err) = store.set(key, encode_flag(value)) {
        warn!("Could not save `{key}`: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.into(),
                reason: "SecurityError".into(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.into(),
                reason: "QuotaExceededError".into(),
            })
        }
    }

    #[test]
    fn only_literal_true_decodes_true() {
        assert!(decode_flag("true"));
        for raw in ["false", "TRUE", "1", "", "yes"] {
            assert!(!decode_flag(raw), "{raw:?}");
        }
    }

    #[test]
    fn flag_survives_store_roundtrip() {
        let store = MemoryStore::new();
        save_flag(&store, "sidebarCollapsed", true);
        assert_eq!(store.raw("sidebarCollapsed").as_deref(), Some("true"));
        assert_eq!(load_flag(&store, "sidebarCollapsed"), Some(true));
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(load_flag(&MemoryStore::new(), "sidebarCollapsed"), None);
    }

    #[test]
    fn failures_degrade_to_absent() {
        assert_eq!(load_flag(&BrokenStore, "sidebarCollapsed"), None);
        save_flag(&BrokenStore, "sidebarCollapsed", true);
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        save_flag(&store, "k", false);
        assert_eq!(other.raw("k").as_deref(), Some("false"));
    }
}
