//! In-process storage backend

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::backend::{KeyValueStorage, Result};

/// Storage held entirely in memory
///
/// Nothing survives the process. Useful as the default backend for
/// previews and as a fixture in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: RwLock::new(map) }
    }

    /// Synchronous read, for assertions outside an async context
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.write().remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set("@app_theme", "admin").await.unwrap();
        assert_eq!(storage.get("@app_theme").await.unwrap().as_deref(), Some("admin"));
        assert_eq!(storage.peek("@app_theme").as_deref(), Some("admin"));

        assert!(storage.remove("@app_theme").await.unwrap());
        assert!(!storage.remove("@app_theme").await.unwrap());
        assert_eq!(storage.get("@app_theme").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_with_entries() {
        let storage = MemoryStorage::with_entries([("@app_theme", "dark"), ("other", "x")]);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("@app_theme").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_overwrite() {
        let storage = MemoryStorage::new();
        storage.set("k", "a").await.unwrap();
        storage.set("k", "b").await.unwrap();
        assert_eq!(storage.peek("k").as_deref(), Some("b"));
        assert_eq!(storage.len(), 1);
    }
}
