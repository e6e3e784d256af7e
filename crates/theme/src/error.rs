//! Error types for the theme engine

use storage::StorageError;
use thiserror::Error;

/// Theme engine error types
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A theme was consumed or overridden without an enclosing provider
    #[error("theme consumed outside of a ThemeProvider; create the scope from a provider")]
    NoProvider,

    /// A theme with this name is already registered
    #[error("theme already registered: {0}")]
    DuplicateTheme(String),

    /// No theme with this name is registered
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// A theme definition failed validation
    #[error("invalid theme {name:?}: {reason}")]
    InvalidTheme {
        /// Theme name
        name: String,
        /// Why validation failed
        reason: String,
    },

    /// A theme or config document could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Persistent storage failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

/// A token name did not match any key of the requested kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} key: {key:?}")]
pub struct UnknownKey {
    /// The key family, e.g. `SpacingKey`
    pub kind: &'static str,
    /// The rejected input
    pub key: String,
}
