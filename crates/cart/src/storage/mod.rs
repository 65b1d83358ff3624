//! Key-value persistence collaborator.
//!
//! The engine persists the cart through a minimal string key-value
//! interface — the shape of browser `localStorage`. Backends decide where
//! the bytes live; the engine controls what is stored under which key.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors a storage backend can report on write.
///
/// The engine treats writes as best-effort: a failed write is logged and
/// the in-memory cart stays authoritative for the rest of the session.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A string key-value store.
///
/// Methods take `&self` so implementations use interior mutability where
/// they need it; the engine itself is single-threaded.
pub trait Storage {
    /// Retrieve the value stored under `key`, or `None` if absent.
    ///
    /// Unreadable state is indistinguishable from absent state on purpose:
    /// the caller recovers from both the same way.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend could not complete the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
