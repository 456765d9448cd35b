pub mod file;
pub mod keys;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::settings::StoreConfig;
use crate::error::{AdminError, Result};

pub use file::FileStore;
pub use memory::MemoryStore;

/// String-keyed, string-valued persistent store. Mirrors the storage the
/// original panel ran against: synchronous semantics, no expiry, no
/// transactions; a write replaces the whole value under its key.
///
/// Injected everywhere as a trait object so tests run on [`MemoryStore`]
/// while the binary runs on [`FileStore`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw string under a key, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw string under a key, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; deleting an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Read a JSON collection under a key. A missing key yields the empty
/// collection; so does a corrupt value, which is logged and dropped rather
/// than surfaced (the panel must keep working over a damaged store).
pub async fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>> {
    match store.get(key).await? {
        None => Ok(Vec::new()),
        Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(
                    key,
                    error = %e,
                    "corrupt collection in store, treating as empty"
                );
                Ok(Vec::new())
            }
        },
    }
}

/// Serialize and rewrite a whole JSON collection under a key.
/// Every mutation goes through here: read-modify-write of the full array,
/// last writer wins.
pub async fn write_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw).await
}

/// Read a single JSON value under a key; corrupt values are reported as
/// [`AdminError::StorageCorrupt`] for the caller to decide on.
pub async fn read_value<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>> {
    match store.get(key).await? {
        None => Ok(None),
        Some(raw) => {
            serde_json::from_str::<T>(&raw)
                .map(Some)
                .map_err(|_| AdminError::StorageCorrupt(key.to_string()))
        }
    }
}

/// Serialize and write a single JSON value under a key
pub async fn write_value<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

/// Initialize the store backend for the server binary
pub async fn init_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store = FileStore::open(&config.path).await?;
    info!(path = %config.path.display(), "file store opened");
    Ok(Arc::new(store))
}
