//! Text component

use serde::{Deserialize, Serialize};
use theme::color::Color;
use theme::fonts::FontStatus;
use theme::theme::{ColorKey, ResolvedTheme};
use theme::typography::{FontGroupKey, FontSizeKey, FontWeight, LineHeightKey};

use super::{color_or, ComponentId};

/// Semantic text variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    /// Heading level 1
    H1,
    /// Heading level 2
    H2,
    /// Heading level 3
    H3,
    /// Heading level 4
    H4,
    /// Heading level 5
    H5,
    /// Heading level 6
    H6,
    /// Regular paragraph text
    #[default]
    Body,
    /// Caption/help text
    Caption,
    /// Small uppercase label
    Overline,
    /// Code/monospace text
    Monospace,
}

impl TextVariant {
    /// Default weight for the variant
    pub fn weight(&self) -> FontWeight {
        match self {
            TextVariant::H1 | TextVariant::H2 => FontWeight::Bold,
            TextVariant::H3 | TextVariant::H4 => FontWeight::SemiBold,
            TextVariant::H5 | TextVariant::H6 | TextVariant::Overline => FontWeight::Medium,
            TextVariant::Body | TextVariant::Caption | TextVariant::Monospace => {
                FontWeight::Regular
            }
        }
    }

    /// Default font group for the variant
    pub fn font_group(&self) -> FontGroupKey {
        match self {
            TextVariant::Caption | TextVariant::Overline => FontGroupKey::Secondary,
            TextVariant::Monospace => FontGroupKey::Monospace,
            _ => FontGroupKey::Primary,
        }
    }

    /// Font size key for the variant
    pub fn font_size(&self) -> FontSizeKey {
        match self {
            TextVariant::H1 => FontSizeKey::H1,
            TextVariant::H2 => FontSizeKey::H2,
            TextVariant::H3 => FontSizeKey::H3,
            TextVariant::H4 => FontSizeKey::H4,
            TextVariant::H5 => FontSizeKey::H5,
            TextVariant::H6 => FontSizeKey::H6,
            TextVariant::Body => FontSizeKey::Md,
            TextVariant::Caption | TextVariant::Monospace => FontSizeKey::Sm,
            TextVariant::Overline => FontSizeKey::Xs,
        }
    }

    /// Line height multiplier key for the variant
    pub fn line_height(&self) -> LineHeightKey {
        match self {
            TextVariant::H1 | TextVariant::H2 | TextVariant::H3 => LineHeightKey::Tight,
            _ => LineHeightKey::Normal,
        }
    }
}

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned (default)
    #[default]
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
}

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Text content
    pub content: String,
    /// Semantic variant
    #[serde(default)]
    pub variant: TextVariant,
    /// Font group override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontGroupKey>,
    /// Weight override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    /// Color key or literal color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Text alignment
    #[serde(default)]
    pub align: TextAlign,
    /// Number of lines (0 = unlimited)
    #[serde(default)]
    pub lines: u32,
}

impl Text {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            variant: TextVariant::Body,
            font: None,
            weight: None,
            color: None,
            align: TextAlign::Left,
            lines: 0,
        }
    }

    /// Create a heading; levels above 6 are clamped
    pub fn heading(content: impl Into<String>, level: u8) -> Self {
        let variant = match level {
            0 | 1 => TextVariant::H1,
            2 => TextVariant::H2,
            3 => TextVariant::H3,
            4 => TextVariant::H4,
            5 => TextVariant::H5,
            _ => TextVariant::H6,
        };
        Self::new(content).with_variant(variant)
    }

    /// Create caption text
    pub fn caption(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TextVariant::Caption)
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the font group
    pub fn with_font(mut self, font: FontGroupKey) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the weight
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set text alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set maximum lines
    pub fn with_lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self
    }

    /// Effective weight
    pub fn effective_weight(&self) -> FontWeight {
        self.weight.unwrap_or_else(|| self.variant.weight())
    }

    /// Effective font group
    pub fn effective_font(&self) -> FontGroupKey {
        self.font.unwrap_or_else(|| self.variant.font_group())
    }

    /// Computed styles, assuming theme fonts are loaded
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> TextStyles {
        self.computed_styles_with(theme, FontStatus::Loaded)
    }

    /// Computed styles for a font loading outcome
    pub fn computed_styles_with(&self, theme: &ResolvedTheme, fonts: FontStatus) -> TextStyles {
        let size_key = self.variant.font_size();
        let font_size = theme.typography.font_size.get(size_key);
        let group = theme.fonts.get(self.effective_font());
        let overline = self.variant == TextVariant::Overline;

        TextStyles {
            font_family: fonts.family_for(group, self.effective_weight()).to_string(),
            font_size,
            line_height: theme.typography.line_height_px(size_key, self.variant.line_height()),
            color: color_or(theme, self.color.as_deref(), ColorKey::Text),
            text_align: self.align,
            letter_spacing: overline.then_some(1.0),
            text_transform: overline.then(|| "uppercase".to_string()),
        }
    }
}

/// Computed text styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyles {
    /// Font family for the effective weight
    pub font_family: String,
    /// Font size
    pub font_size: f32,
    /// Line height in pixels
    pub line_height: f32,
    /// Text color
    pub color: Color,
    /// Alignment
    pub text_align: TextAlign,
    /// Letter spacing (overline only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Text transform (overline only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
}
