//! Switch and checkbox

use serde::{Deserialize, Serialize};
use theme::color::Color;
use theme::theme::{ColorKey, ResolvedTheme};
use theme::typography::FontWeight;

use super::{color_or, ComponentId, EventHandler};

const TRACK_WIDTH: f32 = 48.0;
const TRACK_HEIGHT: f32 = 24.0;
const THUMB_SIZE: f32 = 20.0;
const THUMB_ON_OFFSET: f32 = 22.0;
const THUMB_OFF_OFFSET: f32 = 2.0;
const CHECKBOX_SIZE: f32 = 22.0;
const LABEL_FONT_SIZE: f32 = 16.0;
const CHECKMARK_COLOR: &str = "#FFFFFF";

/// Side of the control the label sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Before the control
    #[default]
    Left,
    /// After the control
    Right,
}

// =============================================================================
// Switch Component
// =============================================================================

/// On/off switch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Switch {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Whether the switch is on
    pub value: bool,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Label side
    pub label_position: LabelPosition,
    /// Track color when on; defaults to primary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the switch is disabled
    pub disabled: bool,
    /// On change event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_value_change: Option<EventHandler>,
}

impl Switch {
    /// Create a switch
    pub fn new(value: bool) -> Self {
        Self { value, ..Self::default() }
    }

    /// Set the label and its side
    pub fn with_label(mut self, label: impl Into<String>, position: LabelPosition) -> Self {
        self.label = Some(label.into());
        self.label_position = position;
        self
    }

    /// Set the active color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Value after a press; disabled switches keep theirs
    pub fn toggled(&self) -> bool {
        if self.disabled {
            self.value
        } else {
            !self.value
        }
    }

    /// Get the computed styles for this switch based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> SwitchStyles {
        let track_color = if self.value {
            color_or(theme, self.color.as_deref(), ColorKey::Primary)
        } else {
            theme.colors.secondary.clone()
        };
        let gap = theme.spacing.md;
        let (label_margin_left, label_margin_right) = match self.label_position {
            LabelPosition::Left => (0.0, gap),
            LabelPosition::Right => (gap, 0.0),
        };

        SwitchStyles {
            track_color,
            track_width: TRACK_WIDTH,
            track_height: TRACK_HEIGHT,
            track_radius: TRACK_HEIGHT / 2.0,
            thumb_color: theme.colors.surface.clone(),
            thumb_size: THUMB_SIZE,
            thumb_translate_x: if self.value { THUMB_ON_OFFSET } else { THUMB_OFF_OFFSET },
            label_color: theme.colors.text.clone(),
            label_font_family: theme.fonts.primary.family_or_regular(FontWeight::Regular).to_string(),
            label_font_size: LABEL_FONT_SIZE,
            label_margin_left,
            label_margin_right,
            opacity: if self.disabled { 0.5 } else { 1.0 },
        }
    }
}

/// Computed switch styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStyles {
    /// Track color
    pub track_color: Color,
    /// Track width
    pub track_width: f32,
    /// Track height
    pub track_height: f32,
    /// Track radius
    pub track_radius: f32,
    /// Thumb color
    pub thumb_color: Color,
    /// Thumb diameter
    pub thumb_size: f32,
    /// Thumb horizontal offset
    pub thumb_translate_x: f32,
    /// Label color
    pub label_color: Color,
    /// Label font family
    pub label_font_family: String,
    /// Label font size
    pub label_font_size: f32,
    /// Space before the label
    pub label_margin_left: f32,
    /// Space after the label
    pub label_margin_right: f32,
    /// Opacity
    pub opacity: f32,
}

// =============================================================================
// Checkbox Component
// =============================================================================

/// Checkbox with optional label
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Checkbox {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Whether the box is checked
    pub checked: bool,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Color when checked; defaults to primary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the checkbox is disabled
    pub disabled: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Checkbox {
    /// Create a checkbox
    pub fn new(checked: bool) -> Self {
        Self { checked, ..Self::default() }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the active color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Checked state after a press; disabled checkboxes keep theirs
    pub fn toggled(&self) -> bool {
        if self.disabled {
            self.checked
        } else {
            !self.checked
        }
    }

    /// Get the computed styles for this checkbox based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> CheckboxStyles {
        let (border_color, background) = if self.checked {
            let active = color_or(theme, self.color.as_deref(), ColorKey::Primary);
            (active.clone(), active)
        } else {
            (theme.colors.secondary.clone(), "transparent".to_string())
        };

        CheckboxStyles {
            size: CHECKBOX_SIZE,
            border_width: 2.0,
            border_radius: 4.0,
            border_color,
            background,
            show_checkmark: self.checked,
            checkmark_color: CHECKMARK_COLOR.to_string(),
            label_color: theme.colors.text.clone(),
            label_font_family: theme.fonts.primary.family_or_regular(FontWeight::Regular).to_string(),
            label_font_size: LABEL_FONT_SIZE,
            label_margin_left: theme.spacing.sm,
            opacity: if self.disabled { 0.5 } else { 1.0 },
        }
    }
}

/// Computed checkbox styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxStyles {
    /// Box size
    pub size: f32,
    /// Border width
    pub border_width: f32,
    /// Border radius
    pub border_radius: f32,
    /// Border color
    pub border_color: Color,
    /// Fill color
    pub background: Color,
    /// Whether the checkmark is drawn
    pub show_checkmark: bool,
    /// Checkmark color
    pub checkmark_color: Color,
    /// Label color
    pub label_color: Color,
    /// Label font family
    pub label_font_family: String,
    /// Label font size
    pub label_font_size: f32,
    /// Space between box and label
    pub label_margin_left: f32,
    /// Opacity
    pub opacity: f32,
}
