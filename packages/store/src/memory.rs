use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::KeyValue;

/// In-memory KeyValue store for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("token").is_none());

        store.set("token", "abc123");
        assert_eq!(store.get("token").as_deref(), Some("abc123"));

        store.set("token", "def456");
        assert_eq!(store.get("token").as_deref(), Some("def456"));

        store.remove("token");
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("user", "{}");
        assert_eq!(other.get("user").as_deref(), Some("{}"));
    }
}
