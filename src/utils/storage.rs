// ============================================================================
// STORAGE - Key/value persistence (localStorage in the browser)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use crate::error::PortalError;

/// String key/value store with localStorage semantics
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PortalError>;
    fn remove_item(&self, key: &str);
}

pub type SharedStore = Rc<dyn KeyValueStore>;

/// `window.localStorage` through gloo-storage
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PortalError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| PortalError::Storage(format!("Could not write '{}' to localStorage", key)))
    }

    fn remove_item(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory store for tests and hosts without a window
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Rc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PortalError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

pub fn save_to_storage<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), PortalError> {
    let json = serde_json::to_string(value)
        .map_err(|e| PortalError::Storage(format!("Could not serialize '{}': {}", key, e)))?;
    store.set_item(key, &json)
}

/// Missing or malformed entries read as `None`
pub fn load_from_storage<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = store.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Ignoring malformed '{}': {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_through_memory_store() {
        let store = MemoryStorage::new();
        save_to_storage(&store, "numbers", &vec![1, 2, 3]).unwrap();
        assert_eq!(load_from_storage::<Vec<u32>>(&store, "numbers"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn malformed_json_reads_as_none() {
        let store = MemoryStorage::new();
        store.set_item("numbers", "{not json").unwrap();
        assert_eq!(load_from_storage::<Vec<u32>>(&store, "numbers"), None);
        assert_eq!(load_from_storage::<Vec<u32>>(&store, "absent"), None);
    }

    #[test]
    fn remove_deletes_key() {
        let store = MemoryStorage::new();
        store.set_item("token", "abc").unwrap();
        store.remove_item("token");
        assert_eq!(store.get_item("token"), None);
    }
}
