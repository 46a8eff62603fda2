//! Key-value persistence backends.
//!
//! A [`CartStore`](crate::CartStore) talks to whatever implements
//! [`KeyValueStore`]; the crate ships [`FileStore`] for carts that must
//! survive a restart and [`MemoryStore`] for ephemeral carts and tests.

mod file;
mod memory;

pub use file::*;
pub use memory::*;

use serde::{Serialize, de::DeserializeOwned};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Encoding failed with: {0}")]
    Encode(String),

    #[error("Decoding failed with: {0}")]
    Decode(String),

    #[error("{0}")]
    Backend(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Backend(err.to_string())
    }
}

/// A named slot of persisted text.
///
/// The contract is deliberately small: a store holds at most one text value
/// per key, and reading a key that was never written (or was removed) yields
/// `None`. Implementations are shared behind an [`Arc`](std::sync::Arc), so
/// all methods take `&self`.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Writes `value` to the slot named `key`, overwriting any prior value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Returns the text stored at `key`, or `None` when the slot is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

    /// Deletes the slot named `key`. Removing an absent slot is not an error.
    fn remove_item(&self, key: &str) -> Result<(), Error>;
}

pub(crate) fn serialize_value<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|e| Error::Encode(e.to_string()))
}

pub(crate) fn deserialize_value<T: DeserializeOwned>(value: &str) -> Result<T, Error> {
    serde_json::from_str(value).map_err(|e| Error::Decode(e.to_string()))
}
