//! File-backed storage backend.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// A storage backend keeping one file per key under a root directory.
///
/// This is the durable equivalent of browser local storage: the value for
/// key `cart` lives at `<root>/cart.json`. The root directory is created
/// lazily on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a file store rooted at `root`.
    ///
    /// The directory does not have to exist yet; reads from a missing
    /// directory behave like reads of an absent key.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
