//! Typography tokens
//!
//! Font groups map weights to concrete font faces. A theme does not have to
//! ship every weight: [`FontGroup::family_for`] walks a per-weight fallback
//! chain, then `regular`, and finally the platform [`SYSTEM_FONT`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Font Weights and Groups
// =============================================================================

/// Family name used when a theme has no face for a weight
pub const SYSTEM_FONT: &str = "System";

token_key! {
    /// Font weight keys, lightest first
    pub enum FontWeight {
        /// 100
        Thin => "thin",
        /// 200
        ExtraLight => "extralight",
        /// 300
        Light => "light",
        /// 400
        Regular => "regular",
        /// 500
        Medium => "medium",
        /// 600
        SemiBold => "semibold",
        /// 700
        Bold => "bold",
        /// 800
        ExtraBold => "extrabold",
        /// 900
        Black => "black",
    }
}

impl FontWeight {
    /// Weights to try, in order, when a group has no face for `self`
    pub fn fallbacks(&self) -> &'static [FontWeight] {
        use FontWeight::*;
        match self {
            Thin => &[ExtraLight, Light, Regular],
            ExtraLight => &[Light, Regular, Thin],
            Light => &[Regular, ExtraLight, Thin],
            Regular => &[Medium, Light],
            Medium => &[Regular, SemiBold],
            SemiBold => &[Bold, Medium, Regular],
            Bold => &[SemiBold, ExtraBold, Medium],
            ExtraBold => &[Bold, Black, SemiBold],
            Black => &[ExtraBold, Bold],
        }
    }

    /// CSS-style numeric weight
    pub fn numeric(&self) -> &'static str {
        match self {
            FontWeight::Thin => "100",
            FontWeight::ExtraLight => "200",
            FontWeight::Light => "300",
            FontWeight::Regular => "400",
            FontWeight::Medium => "500",
            FontWeight::SemiBold => "600",
            FontWeight::Bold => "700",
            FontWeight::ExtraBold => "800",
            FontWeight::Black => "900",
        }
    }
}

token_key! {
    /// Font groups a theme provides
    pub enum FontGroupKey {
        /// Headings and body text
        Primary => "primary",
        /// Captions and overlines
        Secondary => "secondary",
        /// Code
        Monospace => "monospace",
    }
}

/// A loadable font face
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontFace {
    /// Family name as registered with the renderer
    pub family: String,
    /// Where the font file can be fetched from
    pub source: String,
}

impl FontFace {
    /// Create a font face
    pub fn new(family: impl Into<String>, source: impl Into<String>) -> Self {
        Self { family: family.into(), source: source.into() }
    }
}

/// The faces a group provides, keyed by weight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontGroup {
    faces: BTreeMap<FontWeight, FontFace>,
}

impl FontGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a face for a weight
    pub fn with_face(
        mut self,
        weight: FontWeight,
        family: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.faces.insert(weight, FontFace::new(family, source));
        self
    }

    /// The face declared for exactly this weight
    pub fn face(&self, weight: FontWeight) -> Option<&FontFace> {
        self.faces.get(&weight)
    }

    /// Declared faces, lightest first
    pub fn faces(&self) -> impl Iterator<Item = (FontWeight, &FontFace)> {
        self.faces.iter().map(|(w, f)| (*w, f))
    }

    /// Whether the group declares no faces
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Family for a weight, walking the fallback chain
    ///
    /// Order: the weight itself, its [`FontWeight::fallbacks`], `regular`,
    /// then [`SYSTEM_FONT`].
    pub fn family_for(&self, weight: FontWeight) -> &str {
        std::iter::once(weight)
            .chain(weight.fallbacks().iter().copied())
            .chain(std::iter::once(FontWeight::Regular))
            .find_map(|w| self.face(w))
            .map(|f| f.family.as_str())
            .unwrap_or(SYSTEM_FONT)
    }

    /// Family for a weight, or `regular`, or [`SYSTEM_FONT`]
    ///
    /// Components that only need a close match use this instead of the full
    /// fallback chain.
    pub fn family_or_regular(&self, weight: FontWeight) -> &str {
        self.face(weight)
            .or_else(|| self.face(FontWeight::Regular))
            .map(|f| f.family.as_str())
            .unwrap_or(SYSTEM_FONT)
    }
}

/// Font groups of a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSet {
    /// Headings and body text
    pub primary: FontGroup,
    /// Captions and overlines
    pub secondary: FontGroup,
    /// Code
    pub monospace: FontGroup,
}

impl FontSet {
    /// Get a group by key
    pub fn get(&self, key: FontGroupKey) -> &FontGroup {
        match key {
            FontGroupKey::Primary => &self.primary,
            FontGroupKey::Secondary => &self.secondary,
            FontGroupKey::Monospace => &self.monospace,
        }
    }

    /// Groups in canonical order
    pub fn groups(&self) -> impl Iterator<Item = (FontGroupKey, &FontGroup)> {
        FontGroupKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }
}

// =============================================================================
// Font Size, Weight and Line Height Scales
// =============================================================================

token_key! {
    /// Font size keys
    pub enum FontSizeKey {
        /// Extra small
        Xs => "xs",
        /// Small
        Sm => "sm",
        /// Medium (body)
        Md => "md",
        /// Large
        Lg => "lg",
        /// Extra large
        Xl => "xl",
        /// 2x large
        Xxl => "xxl",
        /// 3x large
        Xxxl => "xxxl",
        /// Heading 1
        H1 => "h1",
        /// Heading 2
        H2 => "h2",
        /// Heading 3
        H3 => "h3",
        /// Heading 4
        H4 => "h4",
        /// Heading 5
        H5 => "h5",
        /// Heading 6
        H6 => "h6",
    }
}

/// Font sizes in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct FontSizeScale {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
    pub h4: f32,
    pub h5: f32,
    pub h6: f32,
}

impl FontSizeScale {
    /// Get a size by key
    pub fn get(&self, key: FontSizeKey) -> f32 {
        match key {
            FontSizeKey::Xs => self.xs,
            FontSizeKey::Sm => self.sm,
            FontSizeKey::Md => self.md,
            FontSizeKey::Lg => self.lg,
            FontSizeKey::Xl => self.xl,
            FontSizeKey::Xxl => self.xxl,
            FontSizeKey::Xxxl => self.xxxl,
            FontSizeKey::H1 => self.h1,
            FontSizeKey::H2 => self.h2,
            FontSizeKey::H3 => self.h3,
            FontSizeKey::H4 => self.h4,
            FontSizeKey::H5 => self.h5,
            FontSizeKey::H6 => self.h6,
        }
    }
}

/// Numeric weight strings the renderer accepts
///
/// Themes do not author `thin` or `extralight`; those resolve to their
/// standard numeric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct FontWeightScale {
    pub light: String,
    pub regular: String,
    pub medium: String,
    pub semibold: String,
    pub bold: String,
    pub extrabold: String,
    pub black: String,
}

impl FontWeightScale {
    /// Numeric weight for a font weight key
    pub fn get(&self, weight: FontWeight) -> &str {
        match weight {
            FontWeight::Thin | FontWeight::ExtraLight => weight.numeric(),
            FontWeight::Light => &self.light,
            FontWeight::Regular => &self.regular,
            FontWeight::Medium => &self.medium,
            FontWeight::SemiBold => &self.semibold,
            FontWeight::Bold => &self.bold,
            FontWeight::ExtraBold => &self.extrabold,
            FontWeight::Black => &self.black,
        }
    }
}

impl Default for FontWeightScale {
    fn default() -> Self {
        Self {
            light: FontWeight::Light.numeric().to_string(),
            regular: FontWeight::Regular.numeric().to_string(),
            medium: FontWeight::Medium.numeric().to_string(),
            semibold: FontWeight::SemiBold.numeric().to_string(),
            bold: FontWeight::Bold.numeric().to_string(),
            extrabold: FontWeight::ExtraBold.numeric().to_string(),
            black: FontWeight::Black.numeric().to_string(),
        }
    }
}

token_key! {
    /// Line height keys
    pub enum LineHeightKey {
        /// Headings
        Tight => "tight",
        /// Body text
        Normal => "normal",
        /// Long-form text
        Relaxed => "relaxed",
    }
}

/// Line height multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    /// Headings
    pub tight: f32,
    /// Body text
    pub normal: f32,
    /// Long-form text
    pub relaxed: f32,
}

impl LineHeights {
    /// Multiplier for a key
    pub fn get(&self, key: LineHeightKey) -> f32 {
        match key {
            LineHeightKey::Tight => self.tight,
            LineHeightKey::Normal => self.normal,
            LineHeightKey::Relaxed => self.relaxed,
        }
    }
}

/// Typography scales of a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font sizes
    pub font_size: FontSizeScale,
    /// Numeric weights
    #[serde(default)]
    pub font_weight: FontWeightScale,
    /// Line height multipliers
    pub line_height: LineHeights,
}

impl Typography {
    /// Line height in pixels for a size and multiplier
    pub fn line_height_px(&self, size: FontSizeKey, line_height: LineHeightKey) -> f32 {
        self.font_size.get(size) * self.line_height.get(line_height)
    }
}
