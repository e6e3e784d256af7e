//! Button and icon button components

use serde::{Deserialize, Serialize};
use theme::color::Color;
use theme::resolve::resolve_color;
use theme::theme::{ColorKey, ResolvedTheme};
use theme::typography::FontWeight;

use super::{color_or, ComponentId, EventHandler};

const OUTLINE_SUFFIX: &str = "-outline";

/// Renderer-facing family for a primary-group weight, or its regular face
fn primary_family(theme: &ResolvedTheme, weight: FontWeight) -> String {
    theme.fonts.primary.family_or_regular(weight).to_string()
}

// =============================================================================
// Button Component
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid background button
    #[default]
    Filled,
    /// Outlined button with border
    Outline,
    /// Ghost button with no background
    Ghost,
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small
    Sm,
    /// Medium
    #[default]
    Md,
    /// Large
    Lg,
}

/// Icon position in button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    /// Icon on the left
    #[default]
    Left,
    /// Icon on the right
    Right,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Button text
    pub label: String,
    /// Button style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Color key or literal color
    pub color: String,
    /// Button size
    #[serde(default)]
    pub size: ButtonSize,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether the button is loading
    #[serde(default)]
    pub loading: bool,
    /// Whether the button is currently pressed
    #[serde(default)]
    pub pressed: bool,
    /// Stretch to the container width
    #[serde(default)]
    pub full_width: bool,
    /// Icon name to display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon position
    #[serde(default)]
    pub icon_position: IconPosition,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            variant: ButtonVariant::default(),
            color: ColorKey::Primary.as_str().to_string(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            pressed: false,
            full_width: false,
            icon: None,
            icon_position: IconPosition::default(),
            on_press: None,
        }
    }

    /// Set the button ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the button size
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set pressed state
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Stretch to the container width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Set icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set icon position
    pub fn with_icon_position(mut self, position: IconPosition) -> Self {
        self.icon_position = position;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Whether presses are ignored
    pub fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }

    /// Get the computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> ButtonStyles {
        let color = resolve_color(theme, &self.color);

        let (background, border_width, border_color, text_color) = match self.variant {
            ButtonVariant::Filled => (color, 0.0, None, theme.colors.text_contrast.clone()),
            ButtonVariant::Outline => {
                ("transparent".to_string(), 1.0, Some(color.clone()), color)
            }
            ButtonVariant::Ghost => ("transparent".to_string(), 0.0, None, color),
        };

        let spacing = &theme.spacing;
        let font_size = &theme.typography.font_size;
        let (padding_vertical, padding_horizontal, text_size, icon_size) = match self.size {
            ButtonSize::Sm => (spacing.sm, spacing.md, font_size.sm, 16.0),
            ButtonSize::Md => (spacing.md, spacing.lg, font_size.md, 20.0),
            ButtonSize::Lg => (spacing.lg, spacing.xl, font_size.lg, 24.0),
        };

        let opacity = if self.disabled {
            0.5
        } else if self.pressed {
            0.8
        } else {
            1.0
        };

        ButtonStyles {
            background,
            border_width,
            border_color,
            text_color,
            padding_vertical,
            padding_horizontal,
            border_radius: theme.border_radius.md,
            font_size: text_size,
            font_family: primary_family(theme, FontWeight::SemiBold),
            font_weight: theme.typography.font_weight.get(FontWeight::SemiBold).to_string(),
            icon_size,
            icon_gap: spacing.sm,
            width: self.full_width.then(|| "100%".to_string()),
            opacity,
        }
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyles {
    /// Background color
    pub background: Color,
    /// Border width
    pub border_width: f32,
    /// Border color
    pub border_color: Option<Color>,
    /// Label and icon color
    pub text_color: Color,
    /// Vertical padding
    pub padding_vertical: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Border radius
    pub border_radius: f32,
    /// Label font size
    pub font_size: f32,
    /// Label font family
    pub font_family: String,
    /// Label numeric weight
    pub font_weight: String,
    /// Icon size
    pub icon_size: f32,
    /// Space between icon and label
    pub icon_gap: f32,
    /// Width when stretched
    pub width: Option<String>,
    /// Opacity
    pub opacity: f32,
}

// =============================================================================
// IconButton Component
// =============================================================================

/// Icon button sizes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconButtonSize {
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
    /// Explicit icon size in pixels
    #[serde(untagged)]
    Custom(f32),
}

/// Icon button with optional label, toggling between outline and filled icons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconButton {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Icon name
    pub icon: String,
    /// Icon name when selected; defaults to the filled variant of `icon`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_selected: Option<String>,
    /// Whether the button is selected
    #[serde(default)]
    pub selected: bool,
    /// Color key or literal; defaults to muted text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Selected color key or literal; defaults to primary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    /// Size
    #[serde(default)]
    pub size: IconButtonSize,
    /// Label under the icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether the button is loading
    #[serde(default)]
    pub loading: bool,
    /// Whether the button is currently pressed
    #[serde(default)]
    pub pressed: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl IconButton {
    /// Create an icon button
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            id: None,
            icon: icon.into(),
            icon_selected: None,
            selected: false,
            color: None,
            selected_color: None,
            size: IconButtonSize::default(),
            label: None,
            disabled: false,
            loading: false,
            pressed: false,
            on_press: None,
        }
    }

    /// Set the selected icon
    pub fn with_icon_selected(mut self, icon: impl Into<String>) -> Self {
        self.icon_selected = Some(icon.into());
        self
    }

    /// Set selected state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the base color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the selected color
    pub fn with_selected_color(mut self, color: impl Into<String>) -> Self {
        self.selected_color = Some(color.into());
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: IconButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set pressed state
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Icon to render: filled when selected, outline otherwise
    pub fn icon_name(&self) -> String {
        if self.selected {
            if let Some(icon) = &self.icon_selected {
                return icon.clone();
            }
            return self.icon.strip_suffix(OUTLINE_SUFFIX).unwrap_or(&self.icon).to_string();
        }
        if self.icon.contains(OUTLINE_SUFFIX) {
            self.icon.clone()
        } else {
            format!("{}{}", self.icon, OUTLINE_SUFFIX)
        }
    }

    /// Get the computed styles for this icon button based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> IconButtonStyles {
        let spacing = &theme.spacing;
        let (icon_size, padding, label_size) = match self.size {
            IconButtonSize::Xs => (16.0, spacing.xs, 8.0),
            IconButtonSize::Sm => (20.0, spacing.sm, 10.0),
            IconButtonSize::Md => (24.0, spacing.md, 11.0),
            IconButtonSize::Lg => (28.0, spacing.lg, 12.0),
            IconButtonSize::Xl => (32.0, spacing.xl, 14.0),
            IconButtonSize::Custom(size) => (size, spacing.md, 11.0),
        };

        let base_color = color_or(theme, self.color.as_deref(), ColorKey::TextMuted);
        let active_color = color_or(theme, self.selected_color.as_deref(), ColorKey::Primary);
        let show_active = self.selected || (self.pressed && !self.is_inert());
        let color = if show_active { active_color } else { base_color };

        let opacity = if self.disabled {
            0.4
        } else if self.pressed && !self.loading {
            0.7
        } else {
            1.0
        };

        IconButtonStyles {
            icon_name: self.icon_name(),
            icon_size,
            padding,
            color,
            label_size,
            label_margin_top: 2.0,
            font_family: primary_family(theme, FontWeight::Medium),
            font_weight: theme.typography.font_weight.get(FontWeight::Medium).to_string(),
            opacity,
        }
    }

    fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }
}

/// Computed icon button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconButtonStyles {
    /// Icon to render
    pub icon_name: String,
    /// Icon size
    pub icon_size: f32,
    /// Padding around the icon
    pub padding: f32,
    /// Icon and label color
    pub color: Color,
    /// Label font size
    pub label_size: f32,
    /// Space between icon and label
    pub label_margin_top: f32,
    /// Label font family
    pub font_family: String,
    /// Label numeric weight
    pub font_weight: String,
    /// Opacity
    pub opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::builtin;

    // ==========================================================================
    // Button Tests
    // ==========================================================================

    #[test]
    fn test_button_new() {
        let button = Button::new("Click me");
        assert_eq!(button.label, "Click me");
        assert_eq!(button.variant, ButtonVariant::Filled);
        assert_eq!(button.color, "primary");
        assert_eq!(button.size, ButtonSize::Md);
        assert!(!button.disabled);
    }

    #[test]
    fn test_button_filled_styles() {
        let theme = builtin("modern");
        let styles = Button::new("Go").computed_styles(&theme);

        assert_eq!(styles.background, theme.colors.primary);
        assert_eq!(styles.text_color, theme.colors.text_contrast);
        assert_eq!(styles.border_width, 0.0);
        assert_eq!(styles.padding_vertical, theme.spacing.md);
        assert_eq!(styles.padding_horizontal, theme.spacing.lg);
        assert_eq!(styles.font_size, theme.typography.font_size.md);
        assert_eq!(styles.icon_size, 20.0);
        assert_eq!(styles.border_radius, theme.border_radius.md);
        assert_eq!(styles.font_family, "Urbanist-SemiBold");
        assert_eq!(styles.font_weight, "600");
        assert_eq!(styles.opacity, 1.0);
        assert_eq!(styles.width, None);
    }

    #[test]
    fn test_button_outline_and_ghost() {
        let theme = builtin("modern");

        let outline = Button::new("x")
            .with_variant(ButtonVariant::Outline)
            .with_color("error")
            .computed_styles(&theme);
        assert_eq!(outline.background, "transparent");
        assert_eq!(outline.border_width, 1.0);
        assert_eq!(outline.border_color.as_deref(), Some(theme.colors.error.as_str()));
        assert_eq!(outline.text_color, theme.colors.error);

        let ghost = Button::new("x")
            .with_variant(ButtonVariant::Ghost)
            .with_color("#00FF00")
            .computed_styles(&theme);
        assert_eq!(ghost.text_color, "#00FF00");
        assert_eq!(ghost.border_color, None);
    }

    #[test]
    fn test_button_sizes() {
        let theme = builtin("modern");
        let sm = Button::new("x").with_size(ButtonSize::Sm).computed_styles(&theme);
        assert_eq!((sm.padding_vertical, sm.padding_horizontal), (theme.spacing.sm, theme.spacing.md));
        assert_eq!(sm.icon_size, 16.0);

        let lg = Button::new("x").with_size(ButtonSize::Lg).computed_styles(&theme);
        assert_eq!(lg.font_size, theme.typography.font_size.lg);
        assert_eq!(lg.icon_size, 24.0);
    }

    #[test]
    fn test_button_opacity() {
        let theme = builtin("modern");
        assert_eq!(Button::new("x").disabled(true).computed_styles(&theme).opacity, 0.5);
        assert_eq!(Button::new("x").pressed(true).computed_styles(&theme).opacity, 0.8);
        assert_eq!(
            Button::new("x").disabled(true).pressed(true).computed_styles(&theme).opacity,
            0.5
        );
    }

    #[test]
    fn test_button_full_width() {
        let theme = builtin("modern");
        let styles = Button::new("x").full_width().computed_styles(&theme);
        assert_eq!(styles.width.as_deref(), Some("100%"));
    }

    #[test]
    fn test_button_serialization() {
        let button = Button::new("Click").with_color("secondary").on_press("handleClick");
        let json = serde_json::to_string(&button).unwrap();
        let deserialized: Button = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.label, "Click");
        assert_eq!(deserialized.color, "secondary");
        assert_eq!(deserialized.on_press, Some("handleClick".to_string()));
    }

    // ==========================================================================
    // IconButton Tests
    // ==========================================================================

    #[test]
    fn test_icon_names() {
        assert_eq!(IconButton::new("home").icon_name(), "home-outline");
        assert_eq!(IconButton::new("home-outline").icon_name(), "home-outline");
        assert_eq!(IconButton::new("home-outline").selected(true).icon_name(), "home");
        assert_eq!(IconButton::new("home").selected(true).icon_name(), "home");
        assert_eq!(
            IconButton::new("heart").with_icon_selected("heart-filled").selected(true).icon_name(),
            "heart-filled"
        );
    }

    #[test]
    fn test_icon_button_sizes() {
        let theme = builtin("modern");
        let xs = IconButton::new("add").with_size(IconButtonSize::Xs).computed_styles(&theme);
        assert_eq!((xs.icon_size, xs.padding, xs.label_size), (16.0, theme.spacing.xs, 8.0));

        let xl = IconButton::new("add").with_size(IconButtonSize::Xl).computed_styles(&theme);
        assert_eq!((xl.icon_size, xl.padding, xl.label_size), (32.0, theme.spacing.xl, 14.0));

        let custom =
            IconButton::new("add").with_size(IconButtonSize::Custom(40.0)).computed_styles(&theme);
        assert_eq!((custom.icon_size, custom.padding), (40.0, theme.spacing.md));
    }

    #[test]
    fn test_icon_button_colors() {
        let theme = builtin("modern");

        let idle = IconButton::new("home").computed_styles(&theme);
        assert_eq!(idle.color, theme.text_muted());

        let selected = IconButton::new("home").selected(true).computed_styles(&theme);
        assert_eq!(selected.color, theme.colors.primary);

        let pressed = IconButton::new("home")
            .with_selected_color("success")
            .pressed(true)
            .computed_styles(&theme);
        assert_eq!(pressed.color, theme.colors.success);
        assert_eq!(pressed.opacity, 0.7);
    }

    #[test]
    fn test_icon_button_disabled() {
        let theme = builtin("modern");
        let styles = IconButton::new("home").disabled(true).computed_styles(&theme);
        assert_eq!(styles.opacity, 0.4);
    }

    #[test]
    fn test_icon_button_size_serde() {
        let sizes: Vec<IconButtonSize> = serde_json::from_str(r#"["sm", 30]"#).unwrap();
        assert_eq!(sizes, vec![IconButtonSize::Sm, IconButtonSize::Custom(30.0)]);
    }
}
