//! Storage abstraction shared by the theme session and its tests

use async_trait::async_trait;
use thiserror::Error;

use crate::kv::KvError;

/// Errors surfaced by a [`KeyValueStorage`] backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// The sled-backed store failed
    #[error(transparent)]
    Kv(#[from] KvError),

    /// The backend could not be reached
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage backends
pub type Result<T> = std::result::Result<T, StorageError>;

/// Asynchronous string key-value storage
///
/// Implementations must be cheap to share behind an `Arc`; callers may
/// issue writes from detached tasks.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`, returning whether it was present
    async fn remove(&self, key: &str) -> Result<bool>;
}
