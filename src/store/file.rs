use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex as TokioMutex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::store::KeyValueStore;

/// JSON-file-backed store. The whole key space is one serialized map on
/// disk, rewritten on every mutation; concurrent processes writing the same
/// file clobber each other last-writer-wins, exactly like the browser
/// storage this replaces. The mutex only serializes writers inside this
/// process.
pub struct FileStore {
    path: PathBuf,
    data: TokioMutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store file, creating parent directories as needed. A corrupt
    /// file is logged and restarted empty; the panel must come up anyway.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = match tokio::fs::read_to_string(path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt store file, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = data.len(), "store file loaded");

        Ok(Self {
            path: path.to_path_buf(),
            data: TokioMutex::new(data),
        })
    }

    async fn flush(&self, data: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self.data.lock().await;
        Ok(data.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self.data.lock().await;
        data.insert(key.to_string(), value.to_string());
        self.flush(&data).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut data = self.data.lock().await;
        if data.remove(key).is_some() {
            self.flush(&data).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = FileStore::open(&path).await.unwrap();
            store.set("users", "[]").await.unwrap();
            store.set("tema", "claro").await.unwrap();
        }

        let store = FileStore::open(&path).await.unwrap();
        assert_eq!(store.get("users").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("tema").await.unwrap().as_deref(), Some("claro"));
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let store = FileStore::open(&path).await.unwrap();
        assert_eq!(store.get("users").await.unwrap(), None);
    }
}
