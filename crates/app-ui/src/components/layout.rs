//! Layout components: container, card and divider

use serde::{Deserialize, Serialize};
use theme::color::Color;
use theme::resolve::{
    resolve_border_radius, resolve_color, resolve_dimension, resolve_gap, resolve_margin,
    resolve_padding, resolve_spacing, SpacingInput, StyleMap, StyleValue, TokenValue,
};
use theme::theme::{ColorKey, ResolvedTheme};
use theme::tokens::{RadiusKey, Shadow, ShadowKey, SpacingKey};

use super::{
    color_or, radius_or_zero, spacing_or_zero, Alignment, ComponentId, EventHandler,
    JustifyContent, Layout, PositionType,
};

// =============================================================================
// Container Component
// =============================================================================

/// Flexible layout wrapper
///
/// Every token-valued prop goes through the resolver, so keys, numbers and
/// literal strings are all accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Child layout
    #[serde(default)]
    pub layout: Layout,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<TokenValue>,
    /// Inner padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<SpacingInput>,
    /// Outer margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<SpacingInput>,
    /// Cross-axis alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    /// Main-axis distribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<JustifyContent>,
    /// Override of the parent's alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Alignment>,
    /// Shorthand for centered alignment on both axes
    #[serde(default)]
    pub center: bool,
    /// Background color key or literal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Flex grow value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Width (`"full"` means 100%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<TokenValue>,
    /// Height (`"full"` means 100%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<TokenValue>,
    /// Minimum height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<TokenValue>,
    /// Maximum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<TokenValue>,
    /// Positioning scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionType>,
    /// Top offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    /// Right offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    /// Bottom offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    /// Left offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    /// Border radius key or value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<TokenValue>,
}

impl Container {
    /// Create a column container
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row container
    pub fn row() -> Self {
        Self { layout: Layout::Row, ..Default::default() }
    }

    /// Create a wrapping container
    pub fn wrap() -> Self {
        Self { layout: Layout::Wrap, ..Default::default() }
    }

    /// Set the layout
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the gap
    pub fn with_gap(mut self, gap: impl Into<TokenValue>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: impl Into<SpacingInput>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Set margin
    pub fn with_margin(mut self, margin: impl Into<SpacingInput>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    /// Set cross-axis alignment
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Set main-axis distribution
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = Some(justify);
        self
    }

    /// Set self alignment
    pub fn with_align_self(mut self, align: Alignment) -> Self {
        self.align_self = Some(align);
        self
    }

    /// Center children on both axes
    pub fn centered(mut self) -> Self {
        self.center = true;
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Set flex grow
    pub fn with_flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    /// Set width
    pub fn with_width(mut self, width: impl Into<TokenValue>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set height
    pub fn with_height(mut self, height: impl Into<TokenValue>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Set minimum height
    pub fn with_min_height(mut self, height: impl Into<TokenValue>) -> Self {
        self.min_height = Some(height.into());
        self
    }

    /// Set maximum width
    pub fn with_max_width(mut self, width: impl Into<TokenValue>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    /// Position absolutely at the given offsets
    pub fn absolute(
        mut self,
        top: Option<f32>,
        right: Option<f32>,
        bottom: Option<f32>,
        left: Option<f32>,
    ) -> Self {
        self.position = Some(PositionType::Absolute);
        self.top = top;
        self.right = right;
        self.bottom = bottom;
        self.left = left;
        self
    }

    /// Set border radius
    pub fn with_border_radius(mut self, radius: impl Into<TokenValue>) -> Self {
        self.border_radius = Some(radius.into());
        self
    }

    /// Get the computed styles for this container based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> StyleMap {
        let (align, justify) = if self.center {
            (Alignment::Center, JustifyContent::Center)
        } else {
            (self.align.unwrap_or_default(), self.justify.unwrap_or_default())
        };

        let mut styles = StyleMap::new()
            .with("flexDirection", self.layout.flex_direction())
            .with("flexWrap", self.layout.flex_wrap())
            .with("alignItems", align.as_str())
            .with("justifyContent", justify.as_str());

        styles.insert_opt("gap", resolve_gap(theme, self.gap.as_ref()));
        styles.insert_opt("alignSelf", self.align_self.map(|a| a.as_str().into()));
        styles.insert_opt(
            "backgroundColor",
            self.background.as_deref().map(|c| resolve_color(theme, c).into()),
        );
        styles.insert_opt("flex", self.flex.map(StyleValue::Number));
        styles.insert_opt("width", resolve_dimension(self.width.as_ref()));
        styles.insert_opt("height", resolve_dimension(self.height.as_ref()));
        styles.insert_opt("minHeight", resolve_dimension(self.min_height.as_ref()));
        styles.insert_opt("maxWidth", resolve_dimension(self.max_width.as_ref()));
        styles.insert_opt("position", self.position.map(|p| p.as_str().into()));
        styles.insert_opt("top", self.top.map(StyleValue::Number));
        styles.insert_opt("right", self.right.map(StyleValue::Number));
        styles.insert_opt("bottom", self.bottom.map(StyleValue::Number));
        styles.insert_opt("left", self.left.map(StyleValue::Number));
        styles.insert_opt("borderRadius", resolve_border_radius(theme, self.border_radius.as_ref()));
        styles.merge(resolve_padding(theme, self.padding.as_ref()));
        styles.merge(resolve_margin(theme, self.margin.as_ref()));
        styles
    }
}

// =============================================================================
// Card Component
// =============================================================================

/// Card style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// Card background with a shadow
    #[default]
    Elevated,
    /// Card background with a border
    Outlined,
    /// Accent surface, no border or shadow
    Filled,
}

/// Elevated container with background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Style variant
    #[serde(default)]
    pub variant: CardVariant,
    /// Child layout
    #[serde(default)]
    pub layout: Layout,
    /// Inner padding
    pub padding: TokenValue,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<TokenValue>,
    /// Cross-axis alignment
    #[serde(default)]
    pub align: Alignment,
    /// Main-axis distribution
    #[serde(default)]
    pub justify: JustifyContent,
    /// Shadow depth (elevated variant only)
    pub shadow: ShadowKey,
    /// Border radius key or value; unknown keys mean square corners
    pub border_radius: TokenValue,
    /// Width (`"full"` means 100%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<TokenValue>,
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<TokenValue>,
    /// Flex grow value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Press handler; makes the card pressable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    /// Create an elevated card
    pub fn new() -> Self {
        Self {
            id: None,
            variant: CardVariant::Elevated,
            layout: Layout::Column,
            padding: SpacingKey::Lg.into(),
            gap: None,
            align: Alignment::Stretch,
            justify: JustifyContent::FlexStart,
            shadow: ShadowKey::Md,
            border_radius: RadiusKey::Lg.into(),
            width: None,
            height: None,
            flex: None,
            on_press: None,
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the layout
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: impl Into<TokenValue>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the gap
    pub fn with_gap(mut self, gap: impl Into<TokenValue>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    /// Set cross-axis alignment
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set main-axis distribution
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Set shadow depth
    pub fn with_shadow(mut self, shadow: ShadowKey) -> Self {
        self.shadow = shadow;
        self
    }

    /// Set border radius
    pub fn with_border_radius(mut self, radius: impl Into<TokenValue>) -> Self {
        self.border_radius = radius.into();
        self
    }

    /// Set width
    pub fn with_width(mut self, width: impl Into<TokenValue>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set height
    pub fn with_height(mut self, height: impl Into<TokenValue>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Set flex grow
    pub fn with_flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Whether the card reacts to presses
    pub fn is_pressable(&self) -> bool {
        self.on_press.is_some()
    }

    /// Get the computed styles for this card based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> CardStyles {
        let (background, border_width, border_color, shadow) = match self.variant {
            CardVariant::Elevated => {
                (theme.colors.card.clone(), 0.0, None, theme.shadows.get(self.shadow).cloned())
            }
            CardVariant::Outlined => {
                (theme.colors.card.clone(), 1.0, Some(theme.colors.border.clone()), None)
            }
            CardVariant::Filled => (theme.colors.surface_accent.clone(), 0.0, None, None),
        };

        CardStyles {
            flex_direction: self.layout.flex_direction().to_string(),
            flex_wrap: self.layout.flex_wrap().to_string(),
            padding: resolve_spacing(theme, &self.padding),
            gap: resolve_gap(theme, self.gap.as_ref()),
            align_items: self.align,
            justify_content: self.justify,
            border_radius: radius_or_zero(theme, &self.border_radius),
            overflow: "hidden".to_string(),
            width: resolve_dimension(self.width.as_ref()),
            height: resolve_dimension(self.height.as_ref()),
            flex: self.flex,
            background_color: background,
            border_width,
            border_color,
            shadow,
        }
    }
}

/// Computed card styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyles {
    /// Flex direction
    pub flex_direction: String,
    /// Flex wrap
    pub flex_wrap: String,
    /// Inner padding
    pub padding: StyleValue,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<StyleValue>,
    /// Cross-axis alignment
    pub align_items: Alignment,
    /// Main-axis distribution
    pub justify_content: JustifyContent,
    /// Border radius
    pub border_radius: f32,
    /// Always `hidden`
    pub overflow: String,
    /// Width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<StyleValue>,
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<StyleValue>,
    /// Flex grow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Background color
    pub background_color: Color,
    /// Border width
    pub border_width: f32,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Shadow (elevated variant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

// =============================================================================
// Divider Component
// =============================================================================

/// Divider orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerDirection {
    /// Horizontal line
    #[default]
    Horizontal,
    /// Vertical line
    Vertical,
}

/// Horizontal or vertical separator line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Divider {
    /// Orientation
    #[serde(default)]
    pub direction: DividerDirection,
    /// Color key or literal; defaults to the border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Line thickness in pixels
    pub thickness: f32,
    /// Margin on both sides of the line; unknown keys mean none
    pub spacing: TokenValue,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            direction: DividerDirection::Horizontal,
            color: None,
            thickness: 1.0,
            spacing: SpacingKey::Md.into(),
        }
    }
}

impl Divider {
    /// Create a horizontal divider
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Create a vertical divider
    pub fn vertical() -> Self {
        Self { direction: DividerDirection::Vertical, ..Default::default() }
    }

    /// Set color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set thickness
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set spacing
    pub fn with_spacing(mut self, spacing: impl Into<TokenValue>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Get the computed styles for this divider based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> DividerStyles {
        let spacing = spacing_or_zero(theme, &self.spacing);
        let full = StyleValue::Text("100%".to_string());
        let thickness = StyleValue::Number(self.thickness);

        let (width, height, margin_vertical, margin_horizontal) = match self.direction {
            DividerDirection::Horizontal => (full, thickness, Some(spacing), None),
            DividerDirection::Vertical => (thickness, full, None, Some(spacing)),
        };

        DividerStyles {
            background_color: color_or(theme, self.color.as_deref(), ColorKey::Border),
            width,
            height,
            margin_vertical,
            margin_horizontal,
        }
    }
}

/// Computed divider styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerStyles {
    /// Line color
    pub background_color: Color,
    /// Width
    pub width: StyleValue,
    /// Height
    pub height: StyleValue,
    /// Margin above and below (horizontal divider)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<f32>,
    /// Margin left and right (vertical divider)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_horizontal: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::builtin;
    use theme::resolve::EdgeSpacing;

    // ==========================================================================
    // Container Tests
    // ==========================================================================

    #[test]
    fn test_container_defaults() {
        let theme = builtin("modern");
        let styles = Container::new().computed_styles(&theme);

        assert_eq!(styles.text("flexDirection"), Some("column"));
        assert_eq!(styles.text("flexWrap"), Some("nowrap"));
        assert_eq!(styles.text("alignItems"), Some("stretch"));
        assert_eq!(styles.text("justifyContent"), Some("flex-start"));
        assert_eq!(styles.len(), 4);
    }

    #[test]
    fn test_container_wrap_keeps_column() {
        let theme = builtin("modern");
        let styles = Container::wrap().computed_styles(&theme);
        assert_eq!(styles.text("flexDirection"), Some("column"));
        assert_eq!(styles.text("flexWrap"), Some("wrap"));
    }

    #[test]
    fn test_container_center_overrides_alignment() {
        let theme = builtin("modern");
        let styles = Container::row()
            .with_align(Alignment::FlexEnd)
            .with_justify(JustifyContent::SpaceBetween)
            .centered()
            .computed_styles(&theme);
        assert_eq!(styles.text("alignItems"), Some("center"));
        assert_eq!(styles.text("justifyContent"), Some("center"));
    }

    #[test]
    fn test_container_tokens() {
        let theme = builtin("modern");
        let styles = Container::new()
            .with_gap("sm")
            .with_padding("lg")
            .with_margin(EdgeSpacing::new().top("xs").horizontal(10.0))
            .with_background("surface")
            .with_width("full")
            .with_max_width(480.0)
            .with_border_radius("full")
            .computed_styles(&theme);

        assert_eq!(styles.number("gap"), Some(theme.spacing.sm));
        assert_eq!(styles.number("padding"), Some(theme.spacing.lg));
        assert_eq!(styles.number("marginTop"), Some(theme.spacing.xs));
        assert_eq!(styles.number("marginHorizontal"), Some(10.0));
        assert!(!styles.contains("margin"));
        assert_eq!(styles.text("backgroundColor"), Some(theme.colors.surface.as_str()));
        assert_eq!(styles.text("width"), Some("100%"));
        assert_eq!(styles.number("maxWidth"), Some(480.0));
        assert_eq!(styles.number("borderRadius"), Some(9999.0));
    }

    #[test]
    fn test_container_absolute() {
        let theme = builtin("modern");
        let styles = Container::new()
            .absolute(Some(0.0), None, None, Some(12.0))
            .computed_styles(&theme);
        assert_eq!(styles.text("position"), Some("absolute"));
        assert_eq!(styles.number("top"), Some(0.0));
        assert_eq!(styles.number("left"), Some(12.0));
        assert!(!styles.contains("right"));
    }

    // ==========================================================================
    // Card Tests
    // ==========================================================================

    #[test]
    fn test_card_defaults() {
        let theme = builtin("modern");
        let styles = Card::new().computed_styles(&theme);

        assert_eq!(styles.padding, StyleValue::Number(theme.spacing.lg));
        assert_eq!(styles.border_radius, theme.border_radius.lg);
        assert_eq!(styles.background_color, theme.colors.card);
        assert_eq!(styles.shadow.as_ref(), Some(&theme.shadows.md));
        assert_eq!(styles.overflow, "hidden");
        assert_eq!(styles.align_items, Alignment::Stretch);
    }

    #[test]
    fn test_card_variants() {
        let theme = builtin("dark");

        let outlined = Card::new().with_variant(CardVariant::Outlined).computed_styles(&theme);
        assert_eq!(outlined.border_width, 1.0);
        assert_eq!(outlined.border_color.as_deref(), Some(theme.colors.border.as_str()));
        assert!(outlined.shadow.is_none());

        let filled = Card::new().with_variant(CardVariant::Filled).computed_styles(&theme);
        assert_eq!(filled.background_color, theme.colors.surface_accent);
        assert_eq!(filled.border_width, 0.0);
    }

    #[test]
    fn test_card_no_shadow() {
        let theme = builtin("modern");
        let styles = Card::new().with_shadow(ShadowKey::None).computed_styles(&theme);
        assert!(styles.shadow.is_none());
    }

    #[test]
    fn test_card_unknown_radius_is_zero() {
        let theme = builtin("modern");
        let styles = Card::new().with_border_radius("blob").computed_styles(&theme);
        assert_eq!(styles.border_radius, 0.0);
    }

    #[test]
    fn test_card_pressable() {
        assert!(!Card::new().is_pressable());
        assert!(Card::new().on_press("openPost").is_pressable());
    }

    // ==========================================================================
    // Divider Tests
    // ==========================================================================

    #[test]
    fn test_divider_horizontal() {
        let theme = builtin("modern");
        let styles = Divider::horizontal().computed_styles(&theme);
        assert_eq!(styles.background_color, theme.colors.border);
        assert_eq!(styles.height, StyleValue::Number(1.0));
        assert_eq!(styles.width, StyleValue::from("100%"));
        assert_eq!(styles.margin_vertical, Some(theme.spacing.md));
        assert_eq!(styles.margin_horizontal, None);
    }

    #[test]
    fn test_divider_vertical_custom() {
        let theme = builtin("modern");
        let styles = Divider::vertical()
            .with_thickness(2.0)
            .with_color("primary")
            .with_spacing("wide")
            .computed_styles(&theme);
        assert_eq!(styles.width, StyleValue::Number(2.0));
        assert_eq!(styles.margin_horizontal, Some(0.0));
        assert_eq!(styles.background_color, theme.colors.primary);
    }
}
