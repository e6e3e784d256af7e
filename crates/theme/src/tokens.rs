//! Design tokens for Prism Kit themes
//!
//! Scales for spacing, border radius, shadows, animation timing and the
//! status bar hint. Every scale is a typed struct, so a theme that compiles
//! (or deserializes) defines every key.

use serde::{Deserialize, Serialize};

use crate::color::Color;

// =============================================================================
// Spacing
// =============================================================================

token_key! {
    /// Spacing scale keys, smallest first
    pub enum SpacingKey {
        /// Extra small
        Xs => "xs",
        /// Small
        Sm => "sm",
        /// Medium
        Md => "md",
        /// Large
        Lg => "lg",
        /// Extra large
        Xl => "xl",
        /// 2x large
        Xxl => "xxl",
        /// 3x large
        Xxxl => "xxxl",
    }
}

/// Spacing scale in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    /// Extra small
    pub xs: f32,
    /// Small
    pub sm: f32,
    /// Medium
    pub md: f32,
    /// Large
    pub lg: f32,
    /// Extra large
    pub xl: f32,
    /// 2x large
    pub xxl: f32,
    /// 3x large
    pub xxxl: f32,
}

impl SpacingScale {
    /// Get the pixel value for a key
    pub fn get(&self, key: SpacingKey) -> f32 {
        match key {
            SpacingKey::Xs => self.xs,
            SpacingKey::Sm => self.sm,
            SpacingKey::Md => self.md,
            SpacingKey::Lg => self.lg,
            SpacingKey::Xl => self.xl,
            SpacingKey::Xxl => self.xxl,
            SpacingKey::Xxxl => self.xxxl,
        }
    }

    /// Whether values never decrease from `xs` to `xxxl`
    pub fn is_monotonic(&self) -> bool {
        SpacingKey::ALL.windows(2).all(|pair| self.get(pair[0]) <= self.get(pair[1]))
    }
}

// =============================================================================
// Border Radius
// =============================================================================

/// Radius used for pill and circle shapes
pub const PILL_RADIUS: f32 = 9999.0;

token_key! {
    /// Border radius keys
    pub enum RadiusKey {
        /// No rounding
        None => "none",
        /// Small
        Sm => "sm",
        /// Medium
        Md => "md",
        /// Large
        Lg => "lg",
        /// Extra large
        Xl => "xl",
        /// 2x large
        Xxl => "xxl",
        /// Pill shape
        Full => "full",
    }
}

/// Border radius scale in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderRadii {
    /// No rounding
    pub none: f32,
    /// Small
    pub sm: f32,
    /// Medium
    pub md: f32,
    /// Large
    pub lg: f32,
    /// Extra large
    pub xl: f32,
    /// 2x large
    pub xxl: f32,
    /// Pill shape
    #[serde(default = "pill_radius")]
    pub full: f32,
}

fn pill_radius() -> f32 {
    PILL_RADIUS
}

impl BorderRadii {
    /// Get the pixel value for a key
    pub fn get(&self, key: RadiusKey) -> f32 {
        match key {
            RadiusKey::None => self.none,
            RadiusKey::Sm => self.sm,
            RadiusKey::Md => self.md,
            RadiusKey::Lg => self.lg,
            RadiusKey::Xl => self.xl,
            RadiusKey::Xxl => self.xxl,
            RadiusKey::Full => self.full,
        }
    }
}

// =============================================================================
// Shadows
// =============================================================================

token_key! {
    /// Shadow depth keys
    pub enum ShadowKey {
        /// No shadow
        None => "none",
        /// Subtle
        Sm => "sm",
        /// Default card depth
        Md => "md",
        /// Raised
        Lg => "lg",
        /// Floating
        Xl => "xl",
    }
}

/// Target platform for shadow descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Shadow drawn from color, offset, opacity and blur radius
    #[default]
    Ios,
    /// Shadow drawn from a single elevation value
    Android,
}

/// Shadow offset in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowOffset {
    /// Horizontal offset
    pub width: f32,
    /// Vertical offset
    pub height: f32,
}

/// A shadow carrying both platform representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Offset
    pub offset: ShadowOffset,
    /// Opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Blur radius
    pub radius: f32,
    /// Android elevation
    pub elevation: f32,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(
        color: impl Into<Color>,
        offset_y: f32,
        opacity: f32,
        radius: f32,
        elevation: f32,
    ) -> Self {
        Self {
            color: color.into(),
            offset: ShadowOffset { width: 0.0, height: offset_y },
            opacity,
            radius,
            elevation,
        }
    }

    /// Shadow generated from an elevation alone
    ///
    /// Offset is half the elevation and the blur radius equals it, at a fixed
    /// 0.25 opacity.
    pub fn from_elevation(elevation: f32) -> Self {
        Self::new("#000", elevation / 2.0, 0.25, elevation, elevation)
    }

    /// The descriptor the given platform understands
    pub fn for_platform(&self, platform: Platform) -> PlatformShadow {
        match platform {
            Platform::Ios => PlatformShadow::Ios {
                shadow_color: self.color.clone(),
                shadow_offset: self.offset,
                shadow_opacity: self.opacity,
                shadow_radius: self.radius,
            },
            Platform::Android => PlatformShadow::Android { elevation: self.elevation },
        }
    }
}

/// Platform-specific shadow attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum PlatformShadow {
    /// iOS shadow attributes
    Ios {
        /// Shadow color
        shadow_color: Color,
        /// Offset
        shadow_offset: ShadowOffset,
        /// Opacity
        shadow_opacity: f32,
        /// Blur radius
        shadow_radius: f32,
    },
    /// Android elevation
    Android {
        /// Elevation
        elevation: f32,
    },
}

/// Shadow scale; the `none` key has no entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowSet {
    /// Subtle
    pub sm: Shadow,
    /// Default card depth
    pub md: Shadow,
    /// Raised
    pub lg: Shadow,
    /// Floating
    pub xl: Shadow,
}

impl ShadowSet {
    /// Get the shadow for a key; `None` yields no shadow
    pub fn get(&self, key: ShadowKey) -> Option<&Shadow> {
        match key {
            ShadowKey::None => None,
            ShadowKey::Sm => Some(&self.sm),
            ShadowKey::Md => Some(&self.md),
            ShadowKey::Lg => Some(&self.lg),
            ShadowKey::Xl => Some(&self.xl),
        }
    }
}

// =============================================================================
// Animation
// =============================================================================

/// Animation speed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    /// Quick feedback
    Fast,
    /// Default transitions
    Normal,
    /// Emphasized transitions
    Slow,
}

/// Animation durations in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    /// Fast
    pub fast: u32,
    /// Normal
    pub normal: u32,
    /// Slow
    pub slow: u32,
}

impl Durations {
    /// Duration for a speed
    pub fn get(&self, speed: Speed) -> u32 {
        match speed {
            Speed::Fast => self.fast,
            Speed::Normal => self.normal,
            Speed::Slow => self.slow,
        }
    }
}

/// Animation tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    /// Durations by speed
    pub duration: Durations,
}

// =============================================================================
// Status Bar
// =============================================================================

/// Status bar content style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarStyle {
    /// Light glyphs for dark backgrounds
    LightContent,
    /// Dark glyphs for light backgrounds
    DarkContent,
}

/// Status bar hint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBar {
    /// Glyph style
    pub bar_style: BarStyle,
    /// Bar background color
    pub background_color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> SpacingScale {
        SpacingScale { xs: 4.0, sm: 8.0, md: 12.0, lg: 16.0, xl: 24.0, xxl: 32.0, xxxl: 48.0 }
    }

    #[test]
    fn test_spacing_get() {
        let s = scale();
        assert_eq!(s.get(SpacingKey::Xs), 4.0);
        assert_eq!(s.get(SpacingKey::Md), 12.0);
        assert_eq!(s.get(SpacingKey::Xxxl), 48.0);
    }

    #[test]
    fn test_spacing_monotonic() {
        assert!(scale().is_monotonic());

        let broken = SpacingScale { lg: 2.0, ..scale() };
        assert!(!broken.is_monotonic());
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("xxl".parse::<SpacingKey>(), Ok(SpacingKey::Xxl));
        assert_eq!("full".parse::<RadiusKey>(), Ok(RadiusKey::Full));
        assert_eq!(ShadowKey::Md.to_string(), "md");

        let err = "huge".parse::<SpacingKey>().unwrap_err();
        assert_eq!(err.kind, "SpacingKey");
        assert_eq!(err.key, "huge");
    }

    #[test]
    fn test_key_order() {
        assert!(SpacingKey::Xs < SpacingKey::Xxxl);
        assert_eq!(SpacingKey::ALL.len(), 7);
        assert_eq!(RadiusKey::ALL.first(), Some(&RadiusKey::None));
    }

    #[test]
    fn test_border_radius_full_default() {
        let radii: BorderRadii = serde_json::from_str(
            r#"{"none":0,"sm":4,"md":6,"lg":8,"xl":12,"xxl":16}"#,
        )
        .unwrap();
        assert_eq!(radii.get(RadiusKey::Full), PILL_RADIUS);
        assert_eq!(radii.get(RadiusKey::Md), 6.0);
    }

    #[test]
    fn test_shadow_for_platform() {
        let shadow = Shadow::new("#000", 2.0, 0.22, 2.22, 4.0);

        match shadow.for_platform(Platform::Ios) {
            PlatformShadow::Ios { shadow_offset, shadow_opacity, .. } => {
                assert_eq!(shadow_offset.height, 2.0);
                assert_eq!(shadow_opacity, 0.22);
            }
            other => panic!("expected ios shadow, got {:?}", other),
        }
        assert_eq!(
            shadow.for_platform(Platform::Android),
            PlatformShadow::Android { elevation: 4.0 }
        );
    }

    #[test]
    fn test_platform_shadow_serializes_camel_case() {
        let json = serde_json::to_value(Shadow::from_elevation(6.0).for_platform(Platform::Ios))
            .unwrap();
        assert_eq!(json["shadowRadius"], 6.0);
        assert_eq!(json["shadowOffset"]["height"], 3.0);
        assert_eq!(json["shadowOpacity"], 0.25);
    }

    #[test]
    fn test_bar_style_serde() {
        let json = serde_json::to_string(&BarStyle::DarkContent).unwrap();
        assert_eq!(json, "\"dark-content\"");
    }
}
