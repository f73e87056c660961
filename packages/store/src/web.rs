//! localStorage-backed KeyValue store for the web platform.
//!
//! Every operation reaches through `window.localStorage` fresh; there is no
//! handle to cache. All errors (storage disabled, quota, private mode) are
//! swallowed so the UI degrades to an unauthenticated session instead of
//! crashing.

use crate::KeyValue;

/// Browser localStorage store.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValue for WebStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
