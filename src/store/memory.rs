use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex as TokioMutex;

use crate::error::Result;
use crate::store::KeyValueStore;

/// In-memory store implementation (useful for testing)
pub struct MemoryStore {
    data: TokioMutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self {
            data: TokioMutex::new(HashMap::new()),
        }
    }

    /// Number of keys currently held
    pub async fn len(&self) -> usize {
        self.data.lock().await.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self.data.lock().await;
        Ok(data.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self.data.lock().await;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut data = self.data.lock().await;
        data.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove_roundtrip() {
        let store = MemoryStore::new();
        store.set("tema", "oscuro").await.unwrap();
        assert_eq!(store.get("tema").await.unwrap().as_deref(), Some("oscuro"));

        store.remove("tema").await.unwrap();
        assert_eq!(store.get("tema").await.unwrap(), None);
        // removing again is fine
        store.remove("tema").await.unwrap();
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("token", "a").await.unwrap();
        store.set("token", "b").await.unwrap();
        assert_eq!(store.get("token").await.unwrap().as_deref(), Some("b"));
        assert_eq!(store.len().await, 1);
    }
}
