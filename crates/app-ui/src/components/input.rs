//! Text input with label, help text and validation

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use theme::color::Color;
use theme::resolve::{resolve_dimension, StyleValue, TokenValue};
use theme::theme::{ColorKey, ResolvedTheme};
use theme::tokens::SpacingKey;
use theme::typography::FontWeight;
use tracing::debug;

use super::button::IconPosition;
use super::{ComponentId, EventHandler};

const DEFAULT_MARGIN_BOTTOM: f32 = 16.0;
const MULTILINE_ROW_HEIGHT: f32 = 24.0;
const FLOATING_LABEL_PADDING: f32 = 4.0;

// =============================================================================
// Input Options
// =============================================================================

/// Input style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    /// Bordered surface
    Default,
    /// Bordered surface
    #[default]
    Outline,
    /// Accent surface without border
    Filled,
    /// Bottom border only
    Underline,
    /// Outline with a label that floats above the border
    Floating,
}

/// Accent colors an input may use
///
/// Unknown names deserialize to `primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum InputColor {
    /// Primary color
    #[default]
    Primary,
    /// Secondary color
    Secondary,
    /// Tertiary color
    Tertiary,
}

impl InputColor {
    /// Parse a color name, falling back to primary
    pub fn from_name(name: &str) -> Self {
        match name {
            "secondary" => InputColor::Secondary,
            "tertiary" => InputColor::Tertiary,
            "primary" => InputColor::Primary,
            other => {
                debug!(color = other, "unsupported input color, using primary");
                InputColor::Primary
            }
        }
    }

    pub(crate) fn color_key(&self) -> ColorKey {
        match self {
            InputColor::Primary => ColorKey::Primary,
            InputColor::Secondary => ColorKey::Secondary,
            InputColor::Tertiary => ColorKey::Tertiary,
        }
    }
}

impl From<String> for InputColor {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Input sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
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

impl InputSize {
    /// Font size, padding, icon size and label size
    pub fn metrics(&self) -> (f32, f32, f32, f32) {
        match self {
            InputSize::Xs => (12.0, 8.0, 14.0, 10.0),
            InputSize::Sm => (14.0, 10.0, 16.0, 12.0),
            InputSize::Md => (16.0, 12.0, 20.0, 14.0),
            InputSize::Lg => (18.0, 14.0, 22.0, 16.0),
            InputSize::Xl => (20.0, 16.0, 24.0, 18.0),
        }
    }
}

/// Validation display states
///
/// Unknown names deserialize to `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ValidationState {
    /// Neutral
    #[default]
    Default,
    /// Valid
    Success,
    /// Needs attention
    Warning,
    /// Invalid
    Error,
}

impl ValidationState {
    /// Parse a state name, falling back to default
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => ValidationState::Success,
            "warning" => ValidationState::Warning,
            "error" => ValidationState::Error,
            "default" => ValidationState::Default,
            other => {
                debug!(state = other, "unknown validation state, using default");
                ValidationState::Default
            }
        }
    }

    /// Theme color for the non-default states
    pub(crate) fn color_key(&self) -> Option<ColorKey> {
        match self {
            ValidationState::Default => None,
            ValidationState::Success => Some(ColorKey::Success),
            ValidationState::Warning => Some(ColorKey::Warning),
            ValidationState::Error => Some(ColorKey::Error),
        }
    }
}

impl From<String> for ValidationState {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Kind of value the input holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Free text
    #[default]
    Text,
    /// Email address; always validated
    Email,
    /// Password
    Password,
}

/// Container margin: a spacing key, `"none"`, pixels, or a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMargin {
    /// Pixels
    Px(f32),
    /// Spacing key, `"none"`, or a literal passed through
    Named(String),
}

impl InputMargin {
    /// Resolve against a theme
    pub fn resolve(&self, theme: &ResolvedTheme) -> StyleValue {
        match self {
            InputMargin::Px(px) => StyleValue::Number(*px),
            InputMargin::Named(name) if name == "none" => StyleValue::Number(0.0),
            InputMargin::Named(name) => match name.parse::<SpacingKey>() {
                Ok(key) if key <= SpacingKey::Xl => StyleValue::Number(theme.spacing.get(key)),
                _ => StyleValue::Text(name.clone()),
            },
        }
    }
}

impl From<f32> for InputMargin {
    fn from(px: f32) -> Self {
        InputMargin::Px(px)
    }
}

impl From<&str> for InputMargin {
    fn from(name: &str) -> Self {
        InputMargin::Named(name.to_string())
    }
}

/// Outcome of validating a value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the value is acceptable
    pub is_valid: bool,
    /// Message for the user; empty when valid
    pub message: String,
}

impl ValidationResult {
    /// A passing result
    pub fn valid() -> Self {
        Self { is_valid: true, message: String::new() }
    }

    /// A failing result with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self { is_valid: false, message: message.into() }
    }
}

/// Shape check for `local@domain.tld`
fn is_email(value: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    });
    re.is_match(value)
}

// =============================================================================
// Input Component
// =============================================================================

/// Text input properties and interaction state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Input {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value
    pub value: String,
    /// Style variant
    pub variant: InputVariant,
    /// Accent color
    pub color: InputColor,
    /// Size
    pub size: InputSize,
    /// Supplied validation state
    pub validation_state: ValidationState,
    /// Help text shown under the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Whether the input is disabled
    pub disabled: bool,
    /// Hide the entered characters
    pub secure_text_entry: bool,
    /// Icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon position
    pub icon_position: IconPosition,
    /// Allow multiple lines
    pub multiline: bool,
    /// Visible lines when multiline
    pub number_of_lines: u32,
    /// The value must not be empty
    pub required: bool,
    /// Validate even when not required
    pub validate: bool,
    /// Minimum length in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum length in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Value this input must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_field: Option<String>,
    /// Kind of value
    #[serde(rename = "type")]
    pub input_type: InputType,
    /// Container width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<TokenValue>,
    /// Container top margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<InputMargin>,
    /// Container bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<InputMargin>,
    /// Whether the input has focus
    pub focused: bool,
    /// Whether the input has been blurred at least once
    pub touched: bool,
    /// On change event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change_text: Option<EventHandler>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            id: None,
            label: None,
            placeholder: None,
            value: String::new(),
            variant: InputVariant::default(),
            color: InputColor::default(),
            size: InputSize::default(),
            validation_state: ValidationState::default(),
            help_text: None,
            disabled: false,
            secure_text_entry: false,
            icon: None,
            icon_position: IconPosition::default(),
            multiline: false,
            number_of_lines: 1,
            required: false,
            validate: false,
            min_length: None,
            max_length: None,
            confirm_field: None,
            input_type: InputType::default(),
            width: None,
            margin_top: None,
            margin_bottom: None,
            focused: false,
            touched: false,
            on_change_text: None,
        }
    }
}

impl Input {
    /// Create an input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the accent color
    pub fn with_color(mut self, color: InputColor) -> Self {
        self.color = color;
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Set the supplied validation state
    pub fn with_validation_state(mut self, state: ValidationState) -> Self {
        self.validation_state = state;
        self
    }

    /// Set help text
    pub fn with_help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Hide the entered characters
    pub fn secure(mut self) -> Self {
        self.secure_text_entry = true;
        self
    }

    /// Set icon
    pub fn with_icon(mut self, icon: impl Into<String>, position: IconPosition) -> Self {
        self.icon = Some(icon.into());
        self.icon_position = position;
        self
    }

    /// Allow multiple lines
    pub fn multiline(mut self, lines: u32) -> Self {
        self.multiline = true;
        self.number_of_lines = lines;
        self
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Validate even when not required
    pub fn validated(mut self) -> Self {
        self.validate = true;
        self
    }

    /// Set the length bounds
    pub fn with_length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Require the value to match another
    pub fn with_confirm_field(mut self, other: impl Into<String>) -> Self {
        self.confirm_field = Some(other.into());
        self
    }

    /// Set the input type
    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set the container width
    pub fn with_width(mut self, width: impl Into<TokenValue>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the container margins
    pub fn with_margins(mut self, top: Option<InputMargin>, bottom: Option<InputMargin>) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    /// Set focus state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set touched state
    pub fn touched(mut self, touched: bool) -> Self {
        self.touched = touched;
        self
    }

    /// Record a blur: the field loses focus and becomes touched
    pub fn blur(&mut self) -> Option<ValidationResult> {
        self.focused = false;
        self.touched = true;
        self.validation()
    }

    /// Whether the field validates its value
    pub fn should_validate(&self) -> bool {
        self.required || self.validate || self.input_type == InputType::Email
    }

    /// Check a value against the field's rules
    ///
    /// Rules apply in order and the first failure wins: required, email
    /// shape, minimum length, maximum length, confirmation match. An empty
    /// value that is not required passes.
    pub fn validate_field(&self, value: &str) -> ValidationResult {
        let field = self.label.as_deref().unwrap_or("Field");

        if value.is_empty() {
            if self.required {
                return ValidationResult::invalid(format!("{} is required", field));
            }
            return ValidationResult::valid();
        }

        if self.input_type == InputType::Email && !is_email(value) {
            return ValidationResult::invalid(format!("{} must be a valid email address", field));
        }

        let length = value.chars().count();
        if let Some(min) = self.min_length.filter(|m| *m > 0) {
            if length < min {
                return ValidationResult::invalid(format!(
                    "{} must be at least {} characters",
                    field, min
                ));
            }
        }
        if let Some(max) = self.max_length.filter(|m| *m > 0) {
            if length > max {
                return ValidationResult::invalid(format!(
                    "{} cannot exceed {} characters",
                    field, max
                ));
            }
        }

        if let Some(other) = &self.confirm_field {
            if other != value {
                return ValidationResult::invalid("Passwords do not match");
            }
        }

        ValidationResult::valid()
    }

    /// Validation of the current value, when validation is active
    pub fn validation(&self) -> Option<ValidationResult> {
        (self.should_validate() && self.touched).then(|| self.validate_field(&self.value))
    }

    /// State used for colors and help text
    pub fn effective_state(&self) -> ValidationState {
        match self.validation() {
            Some(result) if !result.is_valid => ValidationState::Error,
            Some(_) if self.value.is_empty() => ValidationState::Default,
            Some(_) => ValidationState::Success,
            None => self.validation_state,
        }
    }

    /// Validation message, or the supplied help text
    pub fn effective_help_text(&self) -> Option<String> {
        match self.validation() {
            Some(result) if !result.message.is_empty() => Some(result.message),
            _ => self.help_text.clone(),
        }
    }

    /// Get the computed styles for this input based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> InputStyles {
        let (font_size, padding, icon_size, label_size) = self.size.metrics();
        let colors = &theme.colors;
        let active = theme.color(self.color.color_key()).to_string();
        let state = self.effective_state();

        let state_color = state.color_key().map(|key| theme.color(key).to_string());
        let border_color = state_color.clone().unwrap_or_else(|| {
            if self.focused {
                active.clone()
            } else {
                colors.border.clone()
            }
        });
        let label_color = state_color.clone().unwrap_or_else(|| {
            if self.focused {
                active.clone()
            } else {
                colors.text.clone()
            }
        });

        let radius = theme.border_radius.md;
        let wrapper = match self.variant {
            InputVariant::Default | InputVariant::Outline | InputVariant::Floating => {
                InputWrapperStyles {
                    background: colors.surface.clone(),
                    border_width: 1.0,
                    border_bottom_width: None,
                    border_color: Some(border_color),
                    border_radius: radius,
                    padding_horizontal: padding,
                }
            }
            InputVariant::Filled => InputWrapperStyles {
                background: colors.surface_accent.clone(),
                border_width: 0.0,
                border_bottom_width: None,
                border_color: None,
                border_radius: radius,
                padding_horizontal: padding,
            },
            InputVariant::Underline => InputWrapperStyles {
                background: "transparent".to_string(),
                border_width: 0.0,
                border_bottom_width: Some(1.0),
                border_color: Some(border_color),
                border_radius: 0.0,
                padding_horizontal: padding,
            },
        };

        let primary = &theme.fonts.primary;
        let label = self.label.as_ref().map(|text| {
            if self.variant == InputVariant::Floating {
                let floated = self.focused || !self.value.is_empty();
                InputLabelStyles {
                    text: text.clone(),
                    color: if floated { label_color.clone() } else { theme.text_muted().to_string() },
                    font_size: if floated { label_size } else { font_size },
                    font_family: primary.family_or_regular(FontWeight::Regular).to_string(),
                    top: Some(if floated { -label_size / 2.0 } else { padding }),
                    background: Some(colors.surface.clone()),
                    padding_horizontal: Some(FLOATING_LABEL_PADDING),
                    required_color: self.required.then(|| colors.error.clone()),
                }
            } else {
                InputLabelStyles {
                    text: text.clone(),
                    color: label_color.clone(),
                    font_size: label_size,
                    font_family: primary.family_or_regular(FontWeight::Medium).to_string(),
                    top: None,
                    background: None,
                    padding_horizontal: None,
                    required_color: self.required.then(|| colors.error.clone()),
                }
            }
        });

        let help_text = self.effective_help_text().map(|text| InputHelpTextStyles {
            text,
            color: state_color.unwrap_or_else(|| theme.text_muted().to_string()),
            font_size: label_size,
            font_family: theme.fonts.secondary.family_or_regular(FontWeight::Regular).to_string(),
        });

        let margin_top = match &self.margin_top {
            Some(margin) => Some(margin.resolve(theme)),
            None if self.variant == InputVariant::Floating => {
                Some(StyleValue::Number(label_size / 2.0 + 4.0))
            }
            None => None,
        };
        let margin_bottom = self
            .margin_bottom
            .as_ref()
            .map(|m| m.resolve(theme))
            .unwrap_or(StyleValue::Number(DEFAULT_MARGIN_BOTTOM));

        let placeholder = match self.variant {
            InputVariant::Floating if !self.focused => None,
            _ => self.placeholder.clone(),
        };
        let secure_toggle_icon =
            self.secure_text_entry.then(|| "eye-outline".to_string());
        // The secure toggle takes the right slot.
        let icon = self.icon.clone().filter(|_| {
            self.icon_position == IconPosition::Left || !self.secure_text_entry
        });

        InputStyles {
            state,
            width: resolve_dimension(self.width.as_ref()),
            margin_top,
            margin_bottom,
            wrapper,
            label,
            text_color: colors.text.clone(),
            font_size,
            font_family: primary.family_or_regular(FontWeight::Regular).to_string(),
            padding_vertical: padding,
            min_height: self.multiline.then(|| self.number_of_lines as f32 * MULTILINE_ROW_HEIGHT),
            placeholder,
            placeholder_color: theme.text_muted().to_string(),
            icon,
            icon_size,
            icon_color: theme.text_muted().to_string(),
            secure_toggle_icon,
            help_text,
            opacity: if self.disabled { 0.5 } else { 1.0 },
            editable: !self.disabled,
        }
    }
}

/// Computed input wrapper styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputWrapperStyles {
    /// Background color
    pub background: Color,
    /// Border width
    pub border_width: f32,
    /// Bottom border width (underline only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Border radius
    pub border_radius: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
}

/// Computed label styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLabelStyles {
    /// Label text
    pub text: String,
    /// Color
    pub color: Color,
    /// Font size
    pub font_size: f32,
    /// Font family
    pub font_family: String,
    /// Offset from the wrapper top (floating only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    /// Background behind a floating label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Horizontal padding of a floating label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    /// Color of the required marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_color: Option<Color>,
}

/// Computed help text styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputHelpTextStyles {
    /// Message
    pub text: String,
    /// Color
    pub color: Color,
    /// Font size
    pub font_size: f32,
    /// Font family
    pub font_family: String,
}

/// Computed input styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStyles {
    /// Effective validation state
    pub state: ValidationState,
    /// Container width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<StyleValue>,
    /// Container top margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<StyleValue>,
    /// Container bottom margin
    pub margin_bottom: StyleValue,
    /// Wrapper around the text field
    pub wrapper: InputWrapperStyles,
    /// Label, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<InputLabelStyles>,
    /// Entered text color
    pub text_color: Color,
    /// Entered text size
    pub font_size: f32,
    /// Entered text family
    pub font_family: String,
    /// Vertical padding of the field
    pub padding_vertical: f32,
    /// Minimum height when multiline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
    /// Placeholder shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Icon shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon size
    pub icon_size: f32,
    /// Icon color
    pub icon_color: Color,
    /// Visibility toggle icon for secure entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_toggle_icon: Option<String>,
    /// Help text, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<InputHelpTextStyles>,
    /// Field opacity
    pub opacity: f32,
    /// Whether the field accepts input
    pub editable: bool,
}

// =============================================================================
// SearchInput Component
// =============================================================================

/// Rounded search field with a clear button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchInput {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Current query
    pub value: String,
    /// Placeholder text
    pub placeholder: String,
    /// Size
    pub size: InputSize,
    /// On change event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change_text: Option<EventHandler>,
    /// On submit event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_submit: Option<EventHandler>,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            id: None,
            value: String::new(),
            placeholder: "Search...".to_string(),
            size: InputSize::default(),
            on_change_text: None,
            on_submit: None,
        }
    }
}

impl SearchInput {
    /// Create an empty search field
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Whether the clear button is shown
    pub fn shows_clear(&self) -> bool {
        !self.value.is_empty()
    }

    /// Clear the query, returning whether anything was removed
    pub fn clear(&mut self) -> bool {
        let had_text = self.shows_clear();
        self.value.clear();
        had_text
    }

    /// Get the computed styles for this search field based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> SearchInputStyles {
        let (font_size, input_padding, icon_size, _) = self.size.metrics();
        // Search fields sit two pixels tighter than regular inputs.
        let padding = input_padding - 2.0;
        let muted = theme.text_muted().to_string();

        SearchInputStyles {
            background: theme.colors.surface_accent.clone(),
            border_radius: theme.border_radius.full,
            padding_horizontal: padding + 6.0,
            padding_vertical: padding,
            icon: "search-outline".to_string(),
            icon_size,
            icon_color: muted.clone(),
            text_color: theme.colors.text.clone(),
            font_size,
            font_family: theme.fonts.primary.family_or_regular(FontWeight::Regular).to_string(),
            placeholder: self.placeholder.clone(),
            placeholder_color: muted.clone(),
            clear_icon: self.shows_clear().then(|| "close-circle".to_string()),
            clear_icon_color: muted,
            return_key_type: "search".to_string(),
        }
    }
}

/// Computed search field styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInputStyles {
    /// Background color
    pub background: Color,
    /// Border radius
    pub border_radius: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Vertical padding of the text field
    pub padding_vertical: f32,
    /// Leading icon name
    pub icon: String,
    /// Icon size
    pub icon_size: f32,
    /// Icon color
    pub icon_color: Color,
    /// Entered text color
    pub text_color: Color,
    /// Entered text size
    pub font_size: f32,
    /// Entered text family
    pub font_family: String,
    /// Placeholder text
    pub placeholder: String,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Clear button icon, shown while there is a query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_icon: Option<String>,
    /// Clear button color
    pub clear_icon_color: Color,
    /// Keyboard return key
    pub return_key_type: String,
}
