//! Prism Kit
//!
//! Themeable component kit: named themes, token resolution, a persisted
//! theme session with local overrides, and component style builders.
//!
//! # Crates
//!
//! - [`storage`] - Async key-value storage and its backends
//! - [`theme`] - Theme registry, resolution, fonts and the theme session
//! - [`app_ui`] - Component style builders

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_ui;
pub use storage;
pub use theme;

pub use app_ui::components;
pub use storage::{KeyValueStorage, KvConfig, KvStore, MemoryStorage, StorageError};
pub use theme::{
    ResolvedTheme, ThemeConfig, ThemeDefinition, ThemeError, ThemeProvider, ThemeRegistry,
    ThemeScope,
};
