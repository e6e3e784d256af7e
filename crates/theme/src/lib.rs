//! Theme engine for Prism Kit
//!
//! This crate holds the named themes, resolves semantic style tokens
//! against them, and owns the theme session an application renders with.
//!
//! # Built-in Themes
//!
//! Six themes are registered by [`ThemeRegistry::builtin`], in order:
//! `modern` (the default), `dark`, `minimal`, `vibrant`, `admin` and `pink`.
//! Custom themes can be registered from a [`ThemeDefinition`] or from JSON.
//!
//! # Modules
//!
//! - [`registry`] - Named themes and cycling order
//! - [`theme`] - Theme definitions and their resolved form
//! - [`tokens`] - Spacing, radius, shadow, animation and status bar scales
//! - [`typography`] - Font groups, weights and text scales
//! - [`color`] - Derived colors
//! - [`resolve`] - Token resolution for style inputs
//! - [`fonts`] - Font aggregation and loading
//! - [`context`] - Theme session and override scopes
//! - [`config`] - Session configuration
//!
//! # Example
//!
//! ```rust
//! use theme::registry::ThemeRegistry;
//! use theme::resolve::{resolve_color, resolve_spacing};
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//! let modern = registry.get("modern");
//!
//! assert_eq!(resolve_spacing(&modern, &"md".into()).as_number(), Some(12.0));
//! assert_eq!(resolve_color(&modern, "textMuted"), modern.text_muted());
//! assert_eq!(resolve_color(&modern, "#FF00FF"), "#FF00FF");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod fonts;
pub mod registry;
pub mod resolve;
pub mod theme;
pub mod themes;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use config::ThemeConfig;
pub use context::{OverrideGuard, ProviderPhase, ThemeProvider, ThemeScope, ThemeSource};
pub use error::{Result, ThemeError, UnknownKey};
pub use fonts::{
    collect_fonts, load_fonts, FontDescriptor, FontLoadError, FontLoader, FontManifest,
    FontStatus,
};
pub use registry::ThemeRegistry;
pub use resolve::{
    resolve_border_radius, resolve_color, resolve_dimension, resolve_gap, resolve_margin,
    resolve_padding, resolve_spacing, EdgeSpacing, SpacingInput, StyleMap, StyleValue, TokenValue,
};
pub use theme::{ColorKey, ResolvedTheme, ThemeColors, ThemeDefinition};
pub use tokens::{
    Animation, BarStyle, BorderRadii, Platform, PlatformShadow, RadiusKey, Shadow, ShadowKey,
    ShadowSet, SpacingKey, SpacingScale, Speed, StatusBar,
};
pub use typography::{
    FontFace, FontGroup, FontGroupKey, FontSet, FontSizeKey, FontWeight, LineHeightKey,
    Typography, SYSTEM_FONT,
};
