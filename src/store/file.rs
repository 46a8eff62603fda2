use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;

use crate::store::{Error, KeyValueStore};

/// A file-backed key-value store.
///
/// Every slot is a single file under the configured root directory, so carts
/// persist across process runs. Slot names are base64-encoded (URL-safe, no
/// padding) into file names, which keeps arbitrary keys path-safe.
///
/// Writes are plain whole-file writes. A write interrupted mid-way can leave
/// a truncated slot behind; transactional guarantees are out of scope here,
/// and a corrupted slot surfaces as a decode error on the next load until it
/// is overwritten or cleared.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory holding the slot files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(BASE64_URL_SAFE_NO_PAD.encode(key))
    }
}

impl KeyValueStore for FileStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_survives_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::new(dir.path()).unwrap();
        store.set_item("checkout", "[{\"id\":1}]").unwrap();

        let reopened = FileStore::new(dir.path()).unwrap();
        assert_eq!(
            reopened.get_item("checkout").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }

    #[test]
    fn test_missing_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert_eq!(store.get_item("never-written").unwrap(), None);
    }

    #[test]
    fn test_remove_deletes_the_slot_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set_item("checkout", "[]").unwrap();
        store.remove_item("checkout").unwrap();

        assert_eq!(store.get_item("checkout").unwrap(), None);
        // removing again stays a no-op
        store.remove_item("checkout").unwrap();
    }

    #[test]
    fn test_path_hostile_keys_stay_inside_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set_item("../escape/cart:v1", "[]").unwrap();
        assert_eq!(
            store.get_item("../escape/cart:v1").unwrap().as_deref(),
            Some("[]")
        );

        // the encoded file landed under the root, not beside it
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_distinct_keys_use_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set_item("cart-a", "a").unwrap();
        store.set_item("cart-b", "b").unwrap();

        assert_eq!(store.get_item("cart-a").unwrap().as_deref(), Some("a"));
        assert_eq!(store.get_item("cart-b").unwrap().as_deref(), Some("b"));
    }
}
