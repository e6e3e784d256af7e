//! Theme session configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::themes::DEFAULT_THEME;

/// Storage key the selected theme name is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "@app_theme";

/// Configuration for a [`ThemeProvider`](crate::context::ThemeProvider)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Theme used until the stored selection is read
    pub initial_theme: String,
    /// Storage key for the selected theme name
    pub storage_key: String,
    /// Whether theme switches are written to storage
    pub persist: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial_theme: DEFAULT_THEME.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist: true,
        }
    }
}

impl ThemeConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the initial theme
    pub fn with_initial_theme(mut self, name: impl Into<String>) -> Self {
        self.initial_theme = name.into();
        self
    }

    /// Set the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Enable or disable persistence
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}
