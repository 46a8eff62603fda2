use std::sync::Arc;

use dashmap::DashMap;

use crate::store::{Error, KeyValueStore};

/// An in-memory key-value store.
///
/// Slots live in a concurrent map shared by every clone of the store, which
/// makes it the drop-in fake for tests and a reasonable backend for carts
/// that only need to live as long as the process.
///
/// ### Note
///
/// Nothing is written to disk; use [`FileStore`](crate::store::FileStore)
/// for carts that must survive a restart.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    slots: Arc<DashMap<String, String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            slots: Arc::new(DashMap::new()),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.slots.get(key).map(|slot| slot.value().clone()))
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();

        assert_eq!(store.get_item("checkout").unwrap(), None);

        store.set_item("checkout", "[]").unwrap();
        assert_eq!(store.get_item("checkout").unwrap().as_deref(), Some("[]"));

        store.remove_item("checkout").unwrap();
        assert_eq!(store.get_item("checkout").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_prior_value() {
        let store = MemoryStore::new();

        store.set_item("checkout", "old").unwrap();
        store.set_item("checkout", "new").unwrap();

        assert_eq!(store.get_item("checkout").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_clones_share_slots() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set_item("checkout", "[]").unwrap();
        assert_eq!(clone.get_item("checkout").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_missing_slot_is_not_an_error() {
        let store = MemoryStore::new();
        store.remove_item("never-written").unwrap();
    }
}
