//! Storage layer for Prism Kit
//!
//! This crate provides the asynchronous key-value abstraction the theme
//! session persists through, plus two backends: an in-memory map and a
//! sled-backed store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod kv;
pub mod memory;

pub use backend::{KeyValueStorage, StorageError};
pub use kv::{KvConfig, KvError, KvStore};
pub use memory::MemoryStorage;
