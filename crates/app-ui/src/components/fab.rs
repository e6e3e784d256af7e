//! Floating action button
//!
//! The button is anchored to one of eight positions inside its parent. When
//! draggable, [`FloatingActionButton::initial_position`] gives the top-left
//! corner for the anchor and [`FloatingActionButton::snap_position`] settles
//! a released drag against the nearest edges.

use serde::{Deserialize, Serialize};
use theme::color::Color;
use theme::resolve::{resolve_color, StyleMap, StyleValue};
use theme::theme::{ColorKey, ResolvedTheme};
use theme::tokens::Shadow;

use super::badge::{Badge, BadgeSize, BadgeStyles};
use super::{ComponentId, EventHandler, PositionType};

const MAX_BADGE_CHARS: usize = 10;

/// A point in the parent's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Create a point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Dimensions of the parent container
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Create a size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Anchor position inside the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FabPosition {
    /// Top left corner
    TopLeft,
    /// Top edge, centered
    Top,
    /// Top right corner
    TopRight,
    /// Left edge, centered
    Left,
    /// Right edge, centered
    Right,
    /// Bottom left corner
    BottomLeft,
    /// Bottom edge, centered
    Bottom,
    /// Bottom right corner
    #[default]
    BottomRight,
}

/// FAB sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FabSize {
    /// Extra small
    Xs,
    /// Small
    Sm,
    /// Medium
    #[default]
    Md,
    /// Large
    Lg,
    /// Extra large
    Xl,
}

impl FabSize {
    /// Button diameter
    pub fn diameter(&self) -> f32 {
        match self {
            FabSize::Xs => 36.0,
            FabSize::Sm => 44.0,
            FabSize::Md => 56.0,
            FabSize::Lg => 68.0,
            FabSize::Xl => 80.0,
        }
    }

    /// Icon size
    pub fn icon_size(&self) -> f32 {
        match self {
            FabSize::Xs => 18.0,
            FabSize::Sm => 22.0,
            FabSize::Md => 28.0,
            FabSize::Lg => 32.0,
            FabSize::Xl => 36.0,
        }
    }

    /// Badge corner offset (applied to top and right)
    pub fn badge_offset(&self) -> f32 {
        match self {
            FabSize::Xs | FabSize::Sm => -4.0,
            FabSize::Md => -6.0,
            FabSize::Lg => -8.0,
            FabSize::Xl => -10.0,
        }
    }

    /// Minimum badge size
    pub fn badge_min_size(&self) -> f32 {
        match self {
            FabSize::Xs => 14.0,
            FabSize::Sm => 16.0,
            FabSize::Md => 18.0,
            FabSize::Lg => 20.0,
            FabSize::Xl => 22.0,
        }
    }

    fn badge_size(&self) -> BadgeSize {
        match self {
            FabSize::Xs | FabSize::Sm => BadgeSize::Sm,
            _ => BadgeSize::Md,
        }
    }
}

/// Semantic color variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FabVariant {
    /// Primary color
    #[default]
    Primary,
    /// Secondary color
    Secondary,
    /// Success color
    Success,
    /// Warning color
    Warning,
    /// Error color
    Error,
}

impl FabVariant {
    fn color_key(&self) -> ColorKey {
        match self {
            FabVariant::Primary => ColorKey::Primary,
            FabVariant::Secondary => ColorKey::Secondary,
            FabVariant::Success => ColorKey::Success,
            FabVariant::Warning => ColorKey::Warning,
            FabVariant::Error => ColorKey::Error,
        }
    }
}

/// Anchored, optionally draggable action button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloatingActionButton {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Color variant
    pub variant: FabVariant,
    /// Color key or literal; overrides the variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Size
    pub size: FabSize,
    /// Whether the button is disabled
    pub disabled: bool,
    /// Icon name
    pub icon: String,
    /// Badge text, truncated to ten characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Badge color key or literal
    pub badge_color: String,
    /// Anchor position
    pub position: FabPosition,
    /// Whether the button can be dragged
    pub draggable: bool,
    /// Snap to the nearest edges when a drag ends
    pub snap_to_edges: bool,
    /// Distance from an edge within which a drag snaps to it
    pub snap_threshold: f32,
    /// Distance kept from every edge
    pub edge_padding: f32,
    /// Horizontal fine-tuning
    pub offset_x: f32,
    /// Vertical fine-tuning
    pub offset_y: f32,
    /// Shadow elevation
    pub elevation: f32,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Default for FloatingActionButton {
    fn default() -> Self {
        Self {
            id: None,
            variant: FabVariant::default(),
            color: None,
            size: FabSize::default(),
            disabled: false,
            icon: "add".to_string(),
            badge: None,
            badge_color: ColorKey::Error.as_str().to_string(),
            position: FabPosition::default(),
            draggable: false,
            snap_to_edges: true,
            snap_threshold: 80.0,
            edge_padding: 16.0,
            offset_x: 0.0,
            offset_y: 0.0,
            elevation: 6.0,
            on_press: None,
        }
    }
}

impl FloatingActionButton {
    /// Create a FAB with the given icon
    pub fn new(icon: impl Into<String>) -> Self {
        Self { icon: icon.into(), ..Self::default() }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: FabVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: FabSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the badge text
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Set the badge color
    pub fn with_badge_color(mut self, color: impl Into<String>) -> Self {
        self.badge_color = color.into();
        self
    }

    /// Set the anchor position
    pub fn with_position(mut self, position: FabPosition) -> Self {
        self.position = position;
        self
    }

    /// Make the button draggable
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Enable or disable edge snapping
    pub fn snap_to_edges(mut self, snap: bool) -> Self {
        self.snap_to_edges = snap;
        self
    }

    /// Set the snap threshold
    pub fn with_snap_threshold(mut self, threshold: f32) -> Self {
        self.snap_threshold = threshold;
        self
    }

    /// Set the edge padding
    pub fn with_edge_padding(mut self, padding: f32) -> Self {
        self.edge_padding = padding;
        self
    }

    /// Set the position offsets
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the shadow elevation
    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Icon name with short aliases expanded
    pub fn icon_name(&self) -> &str {
        if self.icon.contains('-') {
            return &self.icon;
        }
        match self.icon.as_str() {
            "plus" => "add",
            "share" => "share-outline",
            "edit" => "pencil",
            "delete" => "trash-outline",
            "check" => "checkmark",
            "settings" => "settings-outline",
            "home" => "home-outline",
            "camera" => "camera-outline",
            "image" => "image-outline",
            "location" => "location-outline",
            "call" => "call-outline",
            "mail" => "mail-outline",
            "chat" => "chatbubble-outline",
            "notifications" => "notifications-outline",
            "person" => "person-outline",
            other => other,
        }
    }

    /// Badge text as displayed
    pub fn badge_text(&self) -> Option<String> {
        self.badge
            .as_deref()
            .filter(|b| !b.is_empty())
            .map(|b| b.chars().take(MAX_BADGE_CHARS).collect())
    }

    fn clamp_to(&self, point: Point, container: Size) -> Point {
        let padding = self.edge_padding;
        let diameter = self.size.diameter();
        let max_x = container.width - diameter - padding;
        let max_y = container.height - diameter - padding;
        Point::new(point.x.min(max_x).max(padding), point.y.min(max_y).max(padding))
    }

    /// Top-left corner for the anchor, clamped to the padded container
    pub fn initial_position(&self, container: Size) -> Point {
        let padding = self.edge_padding;
        let diameter = self.size.diameter();
        let far_x = container.width - diameter - padding;
        let far_y = container.height - diameter - padding;
        let mid_x = (container.width - diameter) / 2.0;
        let mid_y = (container.height - diameter) / 2.0;

        let (x, y) = match self.position {
            FabPosition::TopLeft => (padding, padding),
            FabPosition::Top => (mid_x, padding),
            FabPosition::TopRight => (far_x, padding),
            FabPosition::Left => (padding, mid_y),
            FabPosition::Right => (far_x, mid_y),
            FabPosition::BottomLeft => (padding, far_y),
            FabPosition::Bottom => (mid_x, far_y),
            FabPosition::BottomRight => (far_x, far_y),
        };

        self.clamp_to(Point::new(x + self.offset_x, y + self.offset_y), container)
    }

    /// Where a released drag settles
    ///
    /// The point is clamped to the padded container first. Each axis then
    /// snaps to its nearer edge when that edge is within the threshold.
    pub fn snap_position(&self, point: Point, container: Size) -> Point {
        let point = self.clamp_to(point, container);
        if !self.snap_to_edges {
            return point;
        }

        let padding = self.edge_padding;
        let diameter = self.size.diameter();
        let far_x = container.width - diameter - padding;
        let far_y = container.height - diameter - padding;

        let snap_axis = |value: f32, far: f32| {
            let to_start = (value - padding).abs();
            let to_end = (far - value).abs();
            if to_start.min(to_end) > self.snap_threshold {
                value
            } else if to_start < to_end {
                padding
            } else {
                far
            }
        };

        Point::new(snap_axis(point.x, far_x), snap_axis(point.y, far_y))
    }

    /// Anchor offsets for the non-draggable placement
    fn placement(&self) -> StyleMap {
        let padding = self.edge_padding;
        let half = self.size.diameter() / 2.0;
        let top = padding + self.offset_y;
        let bottom = padding - self.offset_y;
        let left = padding + self.offset_x;
        let right = padding - self.offset_x;
        let centered_margin_left = -half + self.offset_x;
        let centered_margin_top = -half + self.offset_y;

        let map = StyleMap::new();
        match self.position {
            FabPosition::TopLeft => map.with("top", top).with("left", left),
            FabPosition::Top => {
                map.with("top", top).with("left", "50%").with("marginLeft", centered_margin_left)
            }
            FabPosition::TopRight => map.with("top", top).with("right", right),
            FabPosition::Left => {
                map.with("top", "50%").with("left", left).with("marginTop", centered_margin_top)
            }
            FabPosition::Right => {
                map.with("top", "50%").with("right", right).with("marginTop", centered_margin_top)
            }
            FabPosition::BottomLeft => map.with("bottom", bottom).with("left", left),
            FabPosition::Bottom => map
                .with("bottom", bottom)
                .with("left", "50%")
                .with("marginLeft", centered_margin_left),
            FabPosition::BottomRight => map.with("bottom", bottom).with("right", right),
        }
    }

    /// Get the computed styles for this FAB based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> FabStyles {
        let background = match &self.color {
            Some(color) => resolve_color(theme, color),
            None => theme.color(self.variant.color_key()).to_string(),
        };
        let diameter = self.size.diameter();

        // Draggable placement is driven by translate offsets from the origin.
        let placement = if self.draggable {
            StyleMap::new().with("left", 0.0).with("top", 0.0)
        } else {
            self.placement()
        };

        let badge = self.badge_text().map(|text| FabBadgeStyles {
            top: self.size.badge_offset(),
            right: self.size.badge_offset(),
            min_size: self.size.badge_min_size(),
            badge: Badge::new(text)
                .with_color(self.badge_color.clone())
                .with_size(self.size.badge_size())
                .computed_styles(theme),
        });

        FabStyles {
            position: PositionType::Absolute,
            placement,
            width: diameter,
            height: diameter,
            border_radius: diameter / 2.0,
            background,
            icon_name: self.icon_name().to_string(),
            icon_size: self.size.icon_size(),
            icon_color: theme.colors.text_contrast.clone(),
            opacity: if self.disabled { 0.5 } else { 1.0 },
            shadow: Shadow::from_elevation(self.elevation),
            badge,
        }
    }
}

/// Computed FAB badge placement and styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FabBadgeStyles {
    /// Top offset
    pub top: f32,
    /// Right offset
    pub right: f32,
    /// Minimum badge size
    pub min_size: f32,
    /// The badge itself
    pub badge: BadgeStyles,
}

/// Computed FAB styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FabStyles {
    /// Always absolute
    pub position: PositionType,
    /// Anchor offsets
    pub placement: StyleMap,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// Border radius (half the diameter)
    pub border_radius: f32,
    /// Background color
    pub background: Color,
    /// Icon name
    pub icon_name: String,
    /// Icon size
    pub icon_size: f32,
    /// Icon color
    pub icon_color: Color,
    /// Opacity
    pub opacity: f32,
    /// Shadow derived from the elevation
    pub shadow: Shadow,
    /// Badge, when one is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<FabBadgeStyles>,
}

impl FabStyles {
    /// Placement value for an offset key
    pub fn offset(&self, key: &str) -> Option<&StyleValue> {
        self.placement.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::builtin;

    fn container() -> Size {
        Size::new(400.0, 800.0)
    }

    #[test]
    fn test_fab_defaults() {
        let fab = FloatingActionButton::default();
        assert_eq!(fab.icon, "add");
        assert_eq!(fab.position, FabPosition::BottomRight);
        assert_eq!(fab.edge_padding, 16.0);
        assert_eq!(fab.snap_threshold, 80.0);
        assert_eq!(fab.elevation, 6.0);
        assert!(fab.snap_to_edges);
    }

    #[test]
    fn test_initial_positions() {
        let fab = FloatingActionButton::new("add");
        // 400 - 56 - 16 = 328, 800 - 56 - 16 = 728
        assert_eq!(fab.initial_position(container()), Point::new(328.0, 728.0));

        let top = fab.clone().with_position(FabPosition::Top);
        assert_eq!(top.initial_position(container()), Point::new(172.0, 16.0));

        let left = fab.clone().with_position(FabPosition::Left);
        assert_eq!(left.initial_position(container()), Point::new(16.0, 372.0));
    }

    #[test]
    fn test_initial_position_clamps_offsets() {
        let fab = FloatingActionButton::new("add")
            .with_position(FabPosition::TopLeft)
            .with_offset(-100.0, 20.0);
        assert_eq!(fab.initial_position(container()), Point::new(16.0, 36.0));
    }

    #[test]
    fn test_snap_to_nearest_edges() {
        let fab = FloatingActionButton::new("add");

        let snapped = fab.snap_position(Point::new(50.0, 700.0), container());
        assert_eq!(snapped, Point::new(16.0, 728.0));

        // Far from every edge: stays put
        let middle = fab.snap_position(Point::new(170.0, 400.0), container());
        assert_eq!(middle, Point::new(170.0, 400.0));
    }

    #[test]
    fn test_snap_disabled_still_clamps() {
        let fab = FloatingActionButton::new("add").snap_to_edges(false);
        assert_eq!(fab.snap_position(Point::new(50.0, 700.0), container()), Point::new(50.0, 700.0));
        assert_eq!(fab.snap_position(Point::new(-20.0, 900.0), container()), Point::new(16.0, 728.0));
    }

    #[test]
    fn test_fab_colors() {
        let theme = builtin("modern");
        let styles = FloatingActionButton::new("add")
            .with_variant(FabVariant::Success)
            .computed_styles(&theme);
        assert_eq!(styles.background, theme.colors.success);
        assert_eq!(styles.icon_color, theme.colors.text_contrast);

        let explicit = FloatingActionButton::new("add")
            .with_variant(FabVariant::Success)
            .with_color("#123456")
            .computed_styles(&theme);
        assert_eq!(explicit.background, "#123456");
    }

    #[test]
    fn test_fab_sizes_and_shadow() {
        let theme = builtin("modern");
        let styles = FloatingActionButton::new("add").with_size(FabSize::Xl).computed_styles(&theme);
        assert_eq!(styles.width, 80.0);
        assert_eq!(styles.border_radius, 40.0);
        assert_eq!(styles.icon_size, 36.0);
        assert_eq!(styles.shadow.elevation, 6.0);
        assert_eq!(styles.shadow.offset.height, 3.0);
        assert_eq!(styles.opacity, 1.0);
    }

    #[test]
    fn test_fab_placement() {
        let theme = builtin("modern");
        let styles = FloatingActionButton::new("add")
            .with_position(FabPosition::Bottom)
            .with_offset(4.0, 0.0)
            .computed_styles(&theme);
        assert_eq!(styles.offset("bottom"), Some(&StyleValue::Number(16.0)));
        assert_eq!(styles.offset("left"), Some(&StyleValue::Text("50%".to_string())));
        assert_eq!(styles.offset("marginLeft"), Some(&StyleValue::Number(-24.0)));

        let dragged = FloatingActionButton::new("add").draggable(true).computed_styles(&theme);
        assert_eq!(dragged.offset("left"), Some(&StyleValue::Number(0.0)));
        assert!(dragged.offset("bottom").is_none());
    }

    #[test]
    fn test_fab_badge() {
        let theme = builtin("modern");
        let styles = FloatingActionButton::new("mail")
            .with_size(FabSize::Sm)
            .with_badge("this badge is far too long")
            .computed_styles(&theme);

        let badge = styles.badge.unwrap();
        assert_eq!(badge.top, -4.0);
        assert_eq!(badge.min_size, 16.0);
        assert_eq!(badge.badge.background, theme.colors.error);
        assert_eq!(badge.badge.font_size, Some(10.0));
        assert_eq!(styles.icon_name, "mail-outline");
    }

    #[test]
    fn test_fab_disabled() {
        let theme = builtin("modern");
        let styles = FloatingActionButton::new("add").disabled(true).computed_styles(&theme);
        assert_eq!(styles.opacity, 0.5);
    }

    #[test]
    fn test_fab_badge_text_truncation() {
        let fab = FloatingActionButton::new("add").with_badge("12345678901234");
        assert_eq!(fab.badge_text().as_deref(), Some("1234567890"));
        assert_eq!(FloatingActionButton::new("add").with_badge("").badge_text(), None);
    }
}
