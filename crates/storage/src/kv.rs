//! Sled-backed key-value store
//!
//! Values are stored as JSON so typed settings and plain theme names share
//! one on-disk format. [`KvStore`] also implements
//! [`KeyValueStorage`](crate::backend::KeyValueStorage), which is how the
//! theme session persists its preference.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::{KeyValueStorage, StorageError};

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid key
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None for immediate flush)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "prism_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024,
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Persistent key-value store
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open a store with the given configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression);

        if let Some(ms) = config.flush_every_ms {
            db_config = db_config.flush_every_ms(Some(ms));
        }

        let db = db_config.open()?;
        tracing::debug!(path = %config.path, "opened key-value store");

        Ok(Self { db: Arc::new(db) })
    }

    /// Create a temporary store that is discarded on drop (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn check_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        Ok(())
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        Self::check_key(key)?;
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        Self::check_key(key)?;
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Remove a value by key, returning whether it existed
    pub fn remove(&self, key: &str) -> Result<bool> {
        Self::check_key(key)?;
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

#[async_trait]
impl KeyValueStorage for KvStore {
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        Ok(KvStore::get::<String>(self, key)?)
    }

    async fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        KvStore::set(self, key, value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> std::result::Result<bool, StorageError> {
        Ok(KvStore::remove(self, key)?)
    }
}
