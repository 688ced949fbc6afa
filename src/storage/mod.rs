// ABOUTME: Local key-value storage used to keep the deck between runs

pub mod error;
pub mod persistence;
pub mod store;

pub use error::StorageError;
pub use persistence::{decode_deck, load_deck, save_deck, STORAGE_KEY};
pub use store::{FileStore, MemoryStore};

/// A synchronous string key-value slot, owned by a single process.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
