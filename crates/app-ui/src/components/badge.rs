//! Badge and notification badge components

use serde::{Deserialize, Serialize};
use theme::color::Color;
use theme::resolve::resolve_color;
use theme::theme::{ColorKey, ResolvedTheme};
use theme::typography::FontWeight;

use super::{ComponentId, PositionType};

const NOTIFICATION_OFFSET: f32 = -4.0;
const NOTIFICATION_TEXT_COLOR: &str = "#FFFFFF";
const DOT_RADIUS: f32 = 999.0;

/// Badge style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Solid background
    #[default]
    Filled,
    /// Border only
    Outline,
    /// Small dot without text
    Dot,
}

/// Badge sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSize {
    /// Small
    Sm,
    /// Medium
    #[default]
    Md,
    /// Large
    Lg,
}

impl BadgeSize {
    /// Horizontal and vertical padding
    pub fn padding(&self) -> (f32, f32) {
        match self {
            BadgeSize::Sm => (6.0, 2.0),
            BadgeSize::Md => (8.0, 3.0),
            BadgeSize::Lg => (10.0, 4.0),
        }
    }

    /// Label font size
    pub fn font_size(&self) -> f32 {
        match self {
            BadgeSize::Sm => 10.0,
            BadgeSize::Md => 12.0,
            BadgeSize::Lg => 14.0,
        }
    }

    /// Diameter of the dot variant
    pub fn dot_size(&self) -> f32 {
        match self {
            BadgeSize::Sm => 6.0,
            BadgeSize::Md => 8.0,
            BadgeSize::Lg => 10.0,
        }
    }
}

// =============================================================================
// Badge Component
// =============================================================================

/// Small status label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Badge text; ignored by the dot variant
    #[serde(default)]
    pub label: String,
    /// Style variant
    #[serde(default)]
    pub variant: BadgeVariant,
    /// Color key or literal
    pub color: String,
    /// Size
    #[serde(default)]
    pub size: BadgeSize,
}

impl Badge {
    /// Create a filled badge
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            variant: BadgeVariant::default(),
            color: ColorKey::Primary.as_str().to_string(),
            size: BadgeSize::default(),
        }
    }

    /// Create a dot badge
    pub fn dot() -> Self {
        Self::new("").with_variant(BadgeVariant::Dot)
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Get the computed styles for this badge based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> BadgeStyles {
        let color = resolve_color(theme, &self.color);

        if self.variant == BadgeVariant::Dot {
            let size = self.size.dot_size();
            return BadgeStyles {
                background: color,
                border_width: 0.0,
                border_color: None,
                text_color: None,
                padding_horizontal: 0.0,
                padding_vertical: 0.0,
                border_radius: DOT_RADIUS,
                font_size: None,
                font_family: None,
                font_weight: None,
                width: Some(size),
                height: Some(size),
            };
        }

        let (background, border_width, border_color, text_color) = match self.variant {
            BadgeVariant::Outline => ("transparent".to_string(), 1.0, Some(color.clone()), color),
            _ => (color, 0.0, None, theme.colors.text_contrast.clone()),
        };
        let (padding_horizontal, padding_vertical) = self.size.padding();

        BadgeStyles {
            background,
            border_width,
            border_color,
            text_color: Some(text_color),
            padding_horizontal,
            padding_vertical,
            border_radius: theme.border_radius.full,
            font_size: Some(self.size.font_size()),
            font_family: Some(theme.fonts.primary.family_or_regular(FontWeight::SemiBold).to_string()),
            font_weight: Some(theme.typography.font_weight.get(FontWeight::SemiBold).to_string()),
            width: None,
            height: None,
        }
    }
}

/// Computed badge styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStyles {
    /// Background color
    pub background: Color,
    /// Border width
    pub border_width: f32,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Label color; absent for dots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Vertical padding
    pub padding_vertical: f32,
    /// Border radius
    pub border_radius: f32,
    /// Label font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Label font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Label numeric weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Dot width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Dot height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

// =============================================================================
// NotificationBadge Component
// =============================================================================

/// Corner a notification badge is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeCorner {
    /// Top right
    #[default]
    TopRight,
    /// Top left
    TopLeft,
    /// Bottom right
    BottomRight,
    /// Bottom left
    BottomLeft,
}

/// Counter pinned to the corner of another element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationBadge {
    /// Count to display
    pub count: i64,
    /// Show the badge when the count is zero
    #[serde(default)]
    pub show_zero: bool,
    /// Largest count shown before switching to `"{max}+"`
    #[serde(default = "default_max")]
    pub max: i64,
    /// Color key or literal
    #[serde(default = "default_notification_color")]
    pub color: String,
    /// Corner
    #[serde(default)]
    pub position: BadgeCorner,
}

fn default_max() -> i64 {
    99
}

fn default_notification_color() -> String {
    ColorKey::Error.as_str().to_string()
}

impl NotificationBadge {
    /// Create a notification badge for a count
    pub fn new(count: i64) -> Self {
        Self {
            count,
            show_zero: false,
            max: default_max(),
            color: default_notification_color(),
            position: BadgeCorner::default(),
        }
    }

    /// Show the badge at zero
    pub fn show_zero(mut self, show_zero: bool) -> Self {
        self.show_zero = show_zero;
        self
    }

    /// Set the maximum displayed count
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the corner
    pub fn with_position(mut self, position: BadgeCorner) -> Self {
        self.position = position;
        self
    }

    /// Whether the badge is rendered
    pub fn is_visible(&self) -> bool {
        if self.show_zero {
            self.count >= 0
        } else {
            self.count > 0
        }
    }

    /// Text shown in the badge
    pub fn display_count(&self) -> String {
        if self.count > self.max {
            format!("{}+", self.max)
        } else {
            self.count.to_string()
        }
    }

    /// Computed styles, or `None` when the badge is hidden
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> Option<NotificationBadgeStyles> {
        if !self.is_visible() {
            return None;
        }

        let offset = Some(NOTIFICATION_OFFSET);
        let (top, right, bottom, left) = match self.position {
            BadgeCorner::TopRight => (offset, offset, None, None),
            BadgeCorner::TopLeft => (offset, None, None, offset),
            BadgeCorner::BottomRight => (None, offset, offset, None),
            BadgeCorner::BottomLeft => (None, None, offset, offset),
        };

        Some(NotificationBadgeStyles {
            label: self.display_count(),
            position: PositionType::Absolute,
            top,
            right,
            bottom,
            left,
            background: resolve_color(theme, &self.color),
            min_width: 18.0,
            height: 18.0,
            border_radius: 9.0,
            padding_horizontal: 4.0,
            text_color: NOTIFICATION_TEXT_COLOR.to_string(),
            font_size: 10.0,
            font_family: theme.fonts.primary.family_or_regular(FontWeight::Bold).to_string(),
            font_weight: theme.typography.font_weight.get(FontWeight::Bold).to_string(),
        })
    }
}

/// Computed notification badge styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationBadgeStyles {
    /// Text shown in the badge
    pub label: String,
    /// Always absolute
    pub position: PositionType,
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
    /// Background color
    pub background: Color,
    /// Minimum width
    pub min_width: f32,
    /// Height
    pub height: f32,
    /// Border radius
    pub border_radius: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Label color
    pub text_color: Color,
    /// Label font size
    pub font_size: f32,
    /// Label font family
    pub font_family: String,
    /// Label numeric weight
    pub font_weight: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::builtin;

    // ==========================================================================
    // Badge Tests
    // ==========================================================================

    #[test]
    fn test_badge_filled() {
        let theme = builtin("modern");
        let styles = Badge::new("New").computed_styles(&theme);

        assert_eq!(styles.background, theme.colors.primary);
        assert_eq!(styles.text_color.as_deref(), Some(theme.colors.text_contrast.as_str()));
        assert_eq!((styles.padding_horizontal, styles.padding_vertical), (8.0, 3.0));
        assert_eq!(styles.font_size, Some(12.0));
        assert_eq!(styles.border_radius, theme.border_radius.full);
        assert_eq!(styles.font_weight.as_deref(), Some("600"));
    }

    #[test]
    fn test_badge_outline() {
        let theme = builtin("modern");
        let styles = Badge::new("Beta")
            .with_variant(BadgeVariant::Outline)
            .with_color("warning")
            .with_size(BadgeSize::Lg)
            .computed_styles(&theme);

        assert_eq!(styles.background, "transparent");
        assert_eq!(styles.border_width, 1.0);
        assert_eq!(styles.border_color.as_deref(), Some(theme.colors.warning.as_str()));
        assert_eq!(styles.text_color.as_deref(), Some(theme.colors.warning.as_str()));
        assert_eq!(styles.font_size, Some(14.0));
    }

    #[test]
    fn test_badge_dot() {
        let theme = builtin("modern");
        let styles = Badge::dot().with_size(BadgeSize::Sm).computed_styles(&theme);
        assert_eq!(styles.width, Some(6.0));
        assert_eq!(styles.height, Some(6.0));
        assert_eq!(styles.border_radius, 999.0);
        assert_eq!(styles.text_color, None);
        assert_eq!(styles.font_size, None);
    }

    #[test]
    fn test_badge_serialization() {
        let json = r##"{"label":"3","variant":"dot","color":"#00FF00","size":"lg"}"##;
        let badge: Badge = serde_json::from_str(json).unwrap();
        assert_eq!(badge.variant, BadgeVariant::Dot);
        assert_eq!(badge.size, BadgeSize::Lg);
    }

    // ==========================================================================
    // NotificationBadge Tests
    // ==========================================================================

    #[test]
    fn test_notification_visibility() {
        assert!(!NotificationBadge::new(0).is_visible());
        assert!(NotificationBadge::new(0).show_zero(true).is_visible());
        assert!(!NotificationBadge::new(-1).show_zero(true).is_visible());
        assert!(NotificationBadge::new(3).is_visible());
    }

    #[test]
    fn test_notification_count_cap() {
        assert_eq!(NotificationBadge::new(99).display_count(), "99");
        assert_eq!(NotificationBadge::new(100).display_count(), "99+");
        assert_eq!(NotificationBadge::new(12).with_max(9).display_count(), "9+");
    }

    #[test]
    fn test_notification_styles() {
        let theme = builtin("modern");
        let styles = NotificationBadge::new(5)
            .with_position(BadgeCorner::BottomLeft)
            .computed_styles(&theme)
            .unwrap();

        assert_eq!(styles.background, theme.colors.error);
        assert_eq!(styles.bottom, Some(-4.0));
        assert_eq!(styles.left, Some(-4.0));
        assert_eq!(styles.top, None);
        assert_eq!(styles.min_width, 18.0);
        assert_eq!(styles.text_color, "#FFFFFF");
        assert_eq!(styles.font_weight, "700");
    }

    #[test]
    fn test_hidden_notification_has_no_styles() {
        let theme = builtin("modern");
        assert!(NotificationBadge::new(0).computed_styles(&theme).is_none());
    }
}
