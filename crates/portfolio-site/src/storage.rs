//! Browser-scoped string preferences.
//!
//! Only two values ever live here (theme and language), both stored as plain
//! strings so the page's inline head script can read them before the wasm
//! module loads.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::SiteError;

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`. When storage is unavailable (disabled cookies,
/// sandboxed iframes) reads return nothing and writes are dropped.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::debug!("localStorage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };
        storage
            .set_item(key, value)
            .map_err(|e| SiteError::Storage {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(other.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get(LANGUAGE_KEY), None);
    }
}
