//! Key-value storage abstraction
//!
//! The engine never blocks on storage: reads fall back to `None` on any
//! failure and writes are log-and-ignore. On the web the backing store is
//! LocalStorage; everywhere else (including tests) an in-memory map stands
//! in.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Best-effort string key-value store
pub trait KvStore {
    /// Read a value; `None` on absence or any backend failure
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value; failures are swallowed (logged at the backend)
    fn set(&self, key: &str, value: &str);
    /// Remove a key; failures are swallowed
    fn remove(&self, key: &str);
}

/// In-memory store for native builds and tests. Cloning shares the map, so
/// tests can keep a handle to a store handed to a session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KvStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The platform's default store
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Box<dyn KvStore> {
    Box::new(LocalStore::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Box<dyn KvStore> {
    Box::new(MemoryStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));

        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_clones_share_the_map() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v");
        assert_eq!(handle.get("k"), Some("v".to_string()));
    }
}
