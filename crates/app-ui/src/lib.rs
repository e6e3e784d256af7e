//! Themed components for Prism Kit
//!
//! Components here are plain data: serializable props with builder methods.
//! Each one resolves against a [`theme::ResolvedTheme`] into the concrete
//! style attributes a renderer applies, so the same props render
//! consistently under every registered theme.
//!
//! # Modules
//!
//! - [`components`] - Text, layout, buttons, badges, inputs, selects and toggles
//!
//! # Example
//!
//! ```rust
//! use app_ui::components::{Button, ButtonVariant};
//! use theme::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//! let dark = registry.get("dark");
//!
//! let styles = Button::new("Save")
//!     .with_variant(ButtonVariant::Outline)
//!     .computed_styles(&dark);
//! assert_eq!(styles.background, "transparent");
//! assert_eq!(styles.text_color, dark.colors.primary);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;

// Re-export commonly used types
pub use components::{
    Alignment, Badge, Button, Card, Checkbox, Container, Divider, FloatingActionButton,
    IconButton, Input, JustifyContent, Layout, NotificationBadge, SearchInput, Select, Switch,
    Text,
};
