//! Theme definitions and their resolved form
//!
//! A [`ThemeDefinition`] is what a theme author writes: a complete set of
//! tokens. A [`ResolvedTheme`] is what components consume: the definition
//! plus derived tokens, computed once when the theme is registered or pushed
//! as an override.
//!
//! # Usage
//!
//! ```rust
//! use theme::registry::ThemeRegistry;
//! use theme::theme::ColorKey;
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//! let dark = registry.get("dark");
//! assert_eq!(dark.color(ColorKey::Background), "#1f2937");
//! assert_eq!(dark.color(ColorKey::TextMuted), "rgba(201, 221, 248, 0.6)");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;

use crate::color::{derive_text_muted, Color};
use crate::error::{Result, ThemeError};
use crate::tokens::{Animation, BorderRadii, ShadowSet, SpacingScale, StatusBar};
use crate::typography::{FontSet, FontWeight, Typography};

// =============================================================================
// Semantic Colors
// =============================================================================

token_key! {
    /// Semantic color keys
    pub enum ColorKey {
        /// Brand color
        Primary => "primary",
        /// Brand accent
        PrimaryAccent => "primaryAccent",
        /// Light brand tint
        PrimaryLight => "primaryLight",
        /// Dark brand shade
        PrimaryDark => "primaryDark",
        /// Secondary color
        Secondary => "secondary",
        /// Secondary accent
        SecondaryAccent => "secondaryAccent",
        /// Tertiary color
        Tertiary => "tertiary",
        /// Tertiary accent
        TertiaryAccent => "tertiaryAccent",
        /// Positive state
        Success => "success",
        /// Cautionary state
        Warning => "warning",
        /// Destructive state
        Error => "error",
        /// Informational state
        Info => "info",
        /// Screen background
        Background => "background",
        /// Raised surface
        Surface => "surface",
        /// Alternate surface
        SurfaceAccent => "surfaceAccent",
        /// Card background
        Card => "card",
        /// Body text
        Text => "text",
        /// Text on brand-colored backgrounds
        TextContrast => "textContrast",
        /// Text at reduced emphasis; derived, never authored
        TextMuted => "textMuted",
        /// Borders
        Border => "border",
        /// Subtle borders
        BorderLight => "borderLight",
        /// Modal backdrop
        Backdrop => "backdrop",
        /// Overlay tint
        Overlay => "overlay",
    }
}

/// Authored semantic colors of a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Brand color
    pub primary: Color,
    /// Brand accent
    pub primary_accent: Color,
    /// Light brand tint
    pub primary_light: Color,
    /// Dark brand shade
    pub primary_dark: Color,
    /// Secondary color
    pub secondary: Color,
    /// Secondary accent
    pub secondary_accent: Color,
    /// Tertiary color
    pub tertiary: Color,
    /// Tertiary accent
    pub tertiary_accent: Color,
    /// Positive state
    pub success: Color,
    /// Cautionary state
    pub warning: Color,
    /// Destructive state
    pub error: Color,
    /// Informational state
    pub info: Color,
    /// Screen background
    pub background: Color,
    /// Raised surface
    pub surface: Color,
    /// Alternate surface
    pub surface_accent: Color,
    /// Card background
    pub card: Color,
    /// Body text; must be `#RRGGBB` for `textMuted` to be derived
    pub text: Color,
    /// Text on brand-colored backgrounds
    pub text_contrast: Color,
    /// Borders
    pub border: Color,
    /// Subtle borders
    pub border_light: Color,
    /// Modal backdrop
    pub backdrop: Color,
    /// Overlay tint
    pub overlay: Color,
    /// Additional theme-specific colors, addressable by name
    #[serde(flatten, default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Color>,
}

impl ThemeColors {
    /// Get an authored color; `TextMuted` is not authored and yields `None`
    pub fn get(&self, key: ColorKey) -> Option<&str> {
        let color = match key {
            ColorKey::Primary => &self.primary,
            ColorKey::PrimaryAccent => &self.primary_accent,
            ColorKey::PrimaryLight => &self.primary_light,
            ColorKey::PrimaryDark => &self.primary_dark,
            ColorKey::Secondary => &self.secondary,
            ColorKey::SecondaryAccent => &self.secondary_accent,
            ColorKey::Tertiary => &self.tertiary,
            ColorKey::TertiaryAccent => &self.tertiary_accent,
            ColorKey::Success => &self.success,
            ColorKey::Warning => &self.warning,
            ColorKey::Error => &self.error,
            ColorKey::Info => &self.info,
            ColorKey::Background => &self.background,
            ColorKey::Surface => &self.surface,
            ColorKey::SurfaceAccent => &self.surface_accent,
            ColorKey::Card => &self.card,
            ColorKey::Text => &self.text,
            ColorKey::TextContrast => &self.text_contrast,
            ColorKey::TextMuted => return None,
            ColorKey::Border => &self.border,
            ColorKey::BorderLight => &self.border_light,
            ColorKey::Backdrop => &self.backdrop,
            ColorKey::Overlay => &self.overlay,
        };
        Some(color)
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Complete, authored theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    /// Unique theme name
    pub name: String,
    /// Font faces by group and weight
    pub fonts: FontSet,
    /// Semantic colors
    pub colors: ThemeColors,
    /// Spacing scale
    pub spacing: SpacingScale,
    /// Font sizes, weights and line heights
    pub typography: Typography,
    /// Border radius scale
    pub border_radius: BorderRadii,
    /// Shadow scale
    pub shadows: ShadowSet,
    /// Animation timing
    pub animation: Animation,
    /// Status bar hint
    pub status_bar: StatusBar,
}

impl ThemeDefinition {
    /// Parse a definition from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the invariants the type system cannot express
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| ThemeError::InvalidTheme {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        if !self.spacing.is_monotonic() {
            return Err(invalid("spacing must not decrease from xs to xxxl".to_string()));
        }
        for (key, group) in self.fonts.groups() {
            if group.face(FontWeight::Regular).is_none() {
                return Err(invalid(format!("font group {} has no regular face", key)));
            }
        }
        if self.colors.extra.contains_key(ColorKey::TextMuted.as_str()) {
            return Err(invalid("textMuted is derived and cannot be authored".to_string()));
        }
        Ok(())
    }
}

// =============================================================================
// Resolved Theme
// =============================================================================

/// A theme with its derived tokens, ready for components
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    definition: ThemeDefinition,
    text_muted: Color,
}

impl ResolvedTheme {
    /// Validate a definition and derive its tokens
    pub fn resolve(definition: ThemeDefinition) -> Result<Self> {
        definition.validate()?;
        let text_muted = derive_text_muted(&definition.colors.text);
        Ok(Self { definition, text_muted })
    }

    /// Theme name
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// The authored definition
    pub fn definition(&self) -> &ThemeDefinition {
        &self.definition
    }

    /// Muted text color derived from `colors.text`
    pub fn text_muted(&self) -> &str {
        &self.text_muted
    }

    /// Color for a semantic key, including derived keys
    pub fn color(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::TextMuted => &self.text_muted,
            other => self.definition.colors.get(other).unwrap_or_default(),
        }
    }

    /// Color by name: semantic keys first, then the theme's extra colors
    pub fn named_color(&self, name: &str) -> Option<&str> {
        match name.parse::<ColorKey>() {
            Ok(key) => Some(self.color(key)),
            Err(_) => self.definition.colors.extra.get(name).map(String::as_str),
        }
    }

    /// Whether this is the dark theme
    pub fn is_dark(&self) -> bool {
        self.definition.name == "dark"
    }
}

impl Deref for ResolvedTheme {
    type Target = ThemeDefinition;

    fn deref(&self) -> &Self::Target {
        &self.definition
    }
}
