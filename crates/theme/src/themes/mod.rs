//! Built-in themes
//!
//! Six themes ship with the kit, registered in this order: modern, dark,
//! minimal, vibrant, admin and pink. They share spacing, type scale and
//! animation timing, and differ in palette, fonts, radii and shadows.

mod fonts;

use crate::theme::{ThemeColors, ThemeDefinition};
use crate::tokens::{
    Animation, BarStyle, BorderRadii, Durations, Shadow, ShadowSet, SpacingScale, StatusBar,
    PILL_RADIUS,
};
use crate::typography::{FontSet, FontSizeScale, FontWeightScale, LineHeights, Typography};

/// Name of the theme used when nothing else is configured
pub const DEFAULT_THEME: &str = "modern";

/// All built-in definitions, in registration order
pub fn all() -> Vec<ThemeDefinition> {
    vec![modern(), dark(), minimal(), vibrant(), admin(), pink()]
}

// =============================================================================
// Shared Scales
// =============================================================================

fn spacing() -> SpacingScale {
    SpacingScale { xs: 4.0, sm: 8.0, md: 12.0, lg: 16.0, xl: 24.0, xxl: 32.0, xxxl: 48.0 }
}

fn typography() -> Typography {
    Typography {
        font_size: FontSizeScale {
            xs: 12.0,
            sm: 14.0,
            md: 16.0,
            lg: 18.0,
            xl: 20.0,
            xxl: 24.0,
            xxxl: 32.0,
            h1: 40.0,
            h2: 32.0,
            h3: 28.0,
            h4: 24.0,
            h5: 20.0,
            h6: 18.0,
        },
        font_weight: FontWeightScale::default(),
        line_height: LineHeights { tight: 1.25, normal: 1.5, relaxed: 1.75 },
    }
}

fn animation() -> Animation {
    Animation { duration: Durations { fast: 150, normal: 250, slow: 350 } }
}

fn radii(sm: f32, md: f32, lg: f32, xl: f32, xxl: f32) -> BorderRadii {
    BorderRadii { none: 0.0, sm, md, lg, xl, xxl, full: PILL_RADIUS }
}

/// Shadows on the standard geometry, varying only color and opacity
fn shadows(color: &str, opacity: [f32; 4]) -> ShadowSet {
    ShadowSet {
        sm: Shadow::new(color, 1.0, opacity[0], 1.0, 2.0),
        md: Shadow::new(color, 2.0, opacity[1], 2.22, 4.0),
        lg: Shadow::new(color, 4.0, opacity[2], 3.84, 8.0),
        xl: Shadow::new(color, 6.0, opacity[3], 4.65, 12.0),
    }
}

fn status_bar(bar_style: BarStyle, background: &str) -> StatusBar {
    StatusBar { bar_style, background_color: background.to_string() }
}

// =============================================================================
// Modern Theme
// =============================================================================

/// Blue and orange on a soft blue background
pub fn modern() -> ThemeDefinition {
    ThemeDefinition {
        name: "modern".to_string(),
        fonts: FontSet {
            primary: fonts::urbanist(),
            secondary: fonts::montserrat_alternates(),
            monospace: fonts::jetbrains_mono(),
        },
        colors: ThemeColors {
            primary: "#3F84E5".into(),
            primary_accent: "#98B3E6".into(),
            primary_light: "#C6D8FF".into(),
            primary_dark: "#2563EB".into(),
            secondary: "#F45D01".into(),
            secondary_accent: "#FEB485".into(),
            tertiary: "#8b5cf6".into(),
            tertiary_accent: "#7c3aed".into(),
            success: "#10b981".into(),
            warning: "#fbbf24".into(),
            error: "#ef4444".into(),
            info: "#3B82F6".into(),
            background: "#C6D8FF".into(),
            surface: "#E2E7F3".into(),
            surface_accent: "#f3f4f6".into(),
            card: "#E2E7F3".into(),
            text: "#0C2F5A".into(),
            text_contrast: "#C9DDF8".into(),
            border: "#e5e7eb".into(),
            border_light: "#f3f4f6".into(),
            backdrop: "rgba(31, 41, 55, 0.5)".into(),
            overlay: "rgba(31, 41, 55, 0.3)".into(),
            extra: Default::default(),
        },
        spacing: spacing(),
        typography: typography(),
        border_radius: radii(4.0, 6.0, 8.0, 12.0, 16.0),
        shadows: shadows("#000", [0.18, 0.22, 0.25, 0.3]),
        animation: animation(),
        status_bar: status_bar(BarStyle::DarkContent, "#C6D8FF"),
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Slate surfaces with light blue text
pub fn dark() -> ThemeDefinition {
    ThemeDefinition {
        name: "dark".to_string(),
        fonts: FontSet {
            primary: fonts::urbanist(),
            secondary: fonts::montserrat_alternates(),
            monospace: fonts::share_tech_mono(),
        },
        colors: ThemeColors {
            primary: "#4D9BF9".into(),
            primary_accent: "#2563eb".into(),
            primary_light: "#60a5fa".into(),
            primary_dark: "#1D4ED8".into(),
            secondary: "#FF570A".into(),
            secondary_accent: "#8F2D00".into(),
            tertiary: "#E2ADF2".into(),
            tertiary_accent: "#8E1CB0".into(),
            success: "#70B97C".into(),
            warning: "#FFD400".into(),
            error: "#E03616".into(),
            info: "#4D9BF9".into(),
            background: "#1f2937".into(),
            surface: "#374151".into(),
            surface_accent: "#4b5563".into(),
            card: "#374151".into(),
            text: "#C9DDF8".into(),
            text_contrast: "#0C2F5A".into(),
            border: "#60a5fa".into(),
            border_light: "#C9DDF8".into(),
            backdrop: "rgba(0, 0, 0, 0.7)".into(),
            overlay: "rgba(0, 0, 0, 0.5)".into(),
            extra: Default::default(),
        },
        spacing: spacing(),
        typography: typography(),
        border_radius: radii(4.0, 8.0, 12.0, 16.0, 24.0),
        shadows: shadows("#000", [0.3, 0.35, 0.4, 0.45]),
        animation: animation(),
        status_bar: status_bar(BarStyle::LightContent, "#1f2937"),
    }
}

// =============================================================================
// Minimal Theme
// =============================================================================

/// Grayscale, square corners and faint shadows
pub fn minimal() -> ThemeDefinition {
    ThemeDefinition {
        name: "minimal".to_string(),
        fonts: FontSet {
            primary: fonts::advent_pro(),
            secondary: fonts::syne_mono(),
            monospace: fonts::nova_mono(),
        },
        colors: ThemeColors {
            primary: "#374151".into(),
            primary_accent: "#111827".into(),
            primary_light: "#6b7280".into(),
            primary_dark: "#111827".into(),
            secondary: "#9ca3af".into(),
            secondary_accent: "#4b5563".into(),
            tertiary: "#4b5563".into(),
            tertiary_accent: "#374151".into(),
            success: "#047857".into(),
            warning: "#d97706".into(),
            error: "#b91c1c".into(),
            info: "#0EA5E9".into(),
            background: "#f9fafb".into(),
            surface: "#e9e8e8".into(),
            surface_accent: "#f3f4f6".into(),
            card: "#e9e8e8".into(),
            text: "#111827".into(),
            text_contrast: "#e9e8e8".into(),
            border: "#e5e7eb".into(),
            border_light: "#f3f4f6".into(),
            backdrop: "rgba(55, 65, 81, 0.4)".into(),
            overlay: "rgba(55, 65, 81, 0.2)".into(),
            extra: Default::default(),
        },
        spacing: spacing(),
        typography: typography(),
        // Pills and circles keep `full`; everything else is square.
        border_radius: radii(0.0, 0.0, 0.0, 0.0, 0.0),
        shadows: ShadowSet {
            sm: Shadow::new("#000", 1.0, 0.08, 1.0, 1.0),
            md: Shadow::new("#000", 2.0, 0.1, 2.0, 2.0),
            lg: Shadow::new("#000", 3.0, 0.12, 3.0, 4.0),
            xl: Shadow::new("#000", 4.0, 0.15, 4.0, 6.0),
        },
        animation: animation(),
        status_bar: status_bar(BarStyle::DarkContent, "#f9fafb"),
    }
}

// =============================================================================
// Vibrant Theme
// =============================================================================

/// Warm orange surfaces with teal text and handwritten fonts
pub fn vibrant() -> ThemeDefinition {
    ThemeDefinition {
        name: "vibrant".to_string(),
        fonts: FontSet {
            primary: fonts::gloria_hallelujah(),
            secondary: fonts::bungee_spice(),
            monospace: fonts::vt323(),
        },
        colors: ThemeColors {
            primary: "#2176AE".into(),
            primary_accent: "#175178".into(),
            primary_light: "#60a5fa".into(),
            primary_dark: "#175178".into(),
            secondary: "#f97316".into(),
            secondary_accent: "#c2410c".into(),
            tertiary: "#D12B1F".into(),
            tertiary_accent: "#E83151".into(),
            success: "#16a34a".into(),
            warning: "#f59e0b".into(),
            error: "#dc2626".into(),
            info: "#2176AE".into(),
            background: "#F2822C".into(),
            surface: "#FBB13C".into(),
            surface_accent: "#a8121e82".into(),
            card: "#FBB13C".into(),
            text: "#0A6270".into(),
            text_contrast: "#FFB885".into(),
            border: "#2176AE".into(),
            border_light: "#fed7aa".into(),
            backdrop: "rgba(239, 68, 68, 0.4)".into(),
            overlay: "rgba(239, 68, 68, 0.2)".into(),
            extra: Default::default(),
        },
        spacing: spacing(),
        typography: typography(),
        border_radius: radii(8.0, 12.0, 16.0, 24.0, 32.0),
        shadows: shadows("#E11D48", [0.15, 0.2, 0.25, 0.3]),
        animation: animation(),
        status_bar: status_bar(BarStyle::LightContent, "#2176AE"),
    }
}

// =============================================================================
// Admin Theme
// =============================================================================

/// Near-black dashboard theme with gold accents
pub fn admin() -> ThemeDefinition {
    ThemeDefinition {
        name: "admin".to_string(),
        fonts: FontSet {
            primary: fonts::jura(),
            secondary: fonts::kode_mono(),
            monospace: fonts::roboto_mono(),
        },
        colors: ThemeColors {
            primary: "#EEC643".into(),
            primary_accent: "#f59e0b".into(),
            primary_light: "#fbbf24".into(),
            primary_dark: "#d97706".into(),
            secondary: "#ffffff".into(),
            secondary_accent: "#808080".into(),
            tertiary: "#83C5BE".into(),
            tertiary_accent: "#006D77".into(),
            success: "#10b981".into(),
            warning: "#ffc107".into(),
            error: "#B42F2D".into(),
            info: "#0284C7".into(),
            background: "#141414".into(),
            surface: "#333333".into(),
            surface_accent: "#444444".into(),
            card: "#333333".into(),
            text: "#96A2B0".into(),
            text_contrast: "#141414".into(),
            border: "#dee2e6".into(),
            border_light: "#f8f9fa".into(),
            backdrop: "rgba(73, 80, 87, 0.6)".into(),
            overlay: "rgba(73, 80, 87, 0.4)".into(),
            extra: Default::default(),
        },
        spacing: spacing(),
        typography: typography(),
        border_radius: radii(2.0, 4.0, 4.0, 4.0, 28.0),
        shadows: shadows("#1E40AF", [0.1, 0.15, 0.2, 0.25]),
        animation: animation(),
        status_bar: status_bar(BarStyle::LightContent, "#141414"),
    }
}

// =============================================================================
// Pink Theme
// =============================================================================

/// Rose and coral with green secondary
pub fn pink() -> ThemeDefinition {
    ThemeDefinition {
        name: "pink".to_string(),
        fonts: FontSet {
            primary: fonts::josefin_sans(),
            secondary: fonts::borel(),
            monospace: fonts::jetbrains_mono(),
        },
        colors: ThemeColors {
            primary: "#CC0C49".into(),
            primary_accent: "#FF6B81".into(),
            primary_light: "#F9A8D4".into(),
            primary_dark: "#BE185D".into(),
            secondary: "#4F9C46".into(),
            secondary_accent: "#67B55E".into(),
            tertiary: "#7663F2".into(),
            tertiary_accent: "#A49BDE".into(),
            success: "#10b981".into(),
            warning: "#fbbf24".into(),
            error: "#ef4444".into(),
            info: "#3B82F6".into(),
            background: "#BD4F6C".into(),
            surface: "#EE9480".into(),
            surface_accent: "#E07BA2".into(),
            card: "#EE9480".into(),
            text: "#853251".into(),
            text_contrast: "#ecf3fe".into(),
            border: "#155946".into(),
            border_light: "#f3f4f6".into(),
            backdrop: "rgba(31, 41, 55, 0.5)".into(),
            overlay: "rgba(31, 41, 55, 0.3)".into(),
            extra: Default::default(),
        },
        spacing: spacing(),
        typography: typography(),
        border_radius: radii(4.0, 6.0, 8.0, 12.0, 16.0),
        shadows: shadows("#EC4899", [0.15, 0.2, 0.25, 0.3]),
        animation: animation(),
        status_bar: status_bar(BarStyle::LightContent, "#CC0C49"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{RadiusKey, SpacingKey};
    use crate::typography::{FontGroupKey, FontWeight};

    #[test]
    fn test_all_builtin_themes_validate() {
        for def in all() {
            def.validate().unwrap_or_else(|e| panic!("{} failed: {}", def.name, e));
        }
    }

    #[test]
    fn test_registration_order() {
        let names: Vec<String> = all().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["modern", "dark", "minimal", "vibrant", "admin", "pink"]);
        assert_eq!(names[0], DEFAULT_THEME);
    }

    #[test]
    fn test_spacing_identical_across_themes() {
        for def in all() {
            assert_eq!(def.spacing.get(SpacingKey::Md), 12.0, "{}", def.name);
            assert!(def.spacing.is_monotonic());
        }
    }

    #[test]
    fn test_minimal_is_square() {
        let def = minimal();
        for key in RadiusKey::ALL.iter().filter(|k| **k != RadiusKey::Full) {
            assert_eq!(def.border_radius.get(*key), 0.0);
        }
        assert_eq!(def.border_radius.get(RadiusKey::Full), PILL_RADIUS);
    }

    #[test]
    fn test_font_sources_point_at_gstatic() {
        for def in all() {
            for (_, group) in def.fonts.groups() {
                for (_, face) in group.faces() {
                    assert!(face.source.starts_with("https://fonts.gstatic.com/s/"));
                    assert!(face.source.ends_with(".ttf"));
                }
            }
        }
    }

    #[test]
    fn test_partial_font_groups() {
        let dark = dark();
        assert_eq!(dark.fonts.get(FontGroupKey::Monospace).faces().count(), 1);

        let vibrant = vibrant();
        assert_eq!(vibrant.fonts.primary.family_for(FontWeight::Black), "GloriaHallelujah");

        // modern's monospace stops at extrabold
        assert!(modern().fonts.monospace.face(FontWeight::Black).is_none());
    }
}
