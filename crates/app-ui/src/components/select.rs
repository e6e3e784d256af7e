//! Dropdown select with search and multi-select

use serde::{Deserialize, Serialize};
use theme::color::Color;
use theme::resolve::{resolve_dimension, StyleValue, TokenValue};
use theme::theme::{ColorKey, ResolvedTheme};
use theme::typography::FontWeight;

use super::badge::{Badge, BadgeSize, BadgeStyles};
use super::input::{
    InputColor, InputHelpTextStyles, InputLabelStyles, InputMargin, InputSize,
    InputWrapperStyles, ValidationResult, ValidationState,
};
use super::{ComponentId, EventHandler};

const DEFAULT_PLACEHOLDER: &str = "Select an option...";
const DEFAULT_MARGIN_BOTTOM: f32 = 16.0;
const TRIGGER_MIN_HEIGHT: f32 = 44.0;
const ICON_GAP: f32 = 8.0;
const NO_OPTIONS_MESSAGE: &str = "No options found";

/// Badge colors for selected values, cycled by position
const BADGE_COLORS: [ColorKey; 6] = [
    ColorKey::Primary,
    ColorKey::Secondary,
    ColorKey::Tertiary,
    ColorKey::Success,
    ColorKey::Warning,
    ColorKey::Error,
];

/// Color of the badge for the selected value at `index`
pub fn badge_color(index: usize) -> ColorKey {
    BADGE_COLORS[index % BADGE_COLORS.len()]
}

fn badge_size(size: InputSize) -> BadgeSize {
    match size {
        InputSize::Xs | InputSize::Sm => BadgeSize::Sm,
        InputSize::Md | InputSize::Lg => BadgeSize::Md,
        InputSize::Xl => BadgeSize::Lg,
    }
}

// =============================================================================
// Select Options
// =============================================================================

/// Select style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectVariant {
    /// Bordered surface
    Default,
    /// Bordered surface
    #[default]
    Outline,
    /// Accent surface without border
    Filled,
    /// Bottom border only
    Underline,
}

/// A choice in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    /// Value reported on selection
    pub value: String,
    /// Text shown; defaults to the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the option can be picked
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Create an option labelled with its value
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), label: None, disabled: false }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the option as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Label, or the value when no label is set
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.value,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.display_label().to_lowercase().contains(needle)
            || self.value.to_lowercase().contains(needle)
    }
}

/// Selected value: one value, or a list in multi-select mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
    /// A single value
    Single(String),
    /// Several values, in selection order
    Multiple(Vec<String>),
}

impl From<&str> for SelectValue {
    fn from(value: &str) -> Self {
        SelectValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for SelectValue {
    fn from(values: Vec<String>) -> Self {
        SelectValue::Multiple(values)
    }
}

// =============================================================================
// Select Component
// =============================================================================

/// Dropdown select properties and interaction state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Select {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Text shown when nothing is selected
    pub placeholder: String,
    /// Choices
    pub options: Vec<SelectOption>,
    /// Current selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SelectValue>,
    /// Style variant
    pub variant: SelectVariant,
    /// Accent color
    pub color: InputColor,
    /// Size
    pub size: InputSize,
    /// Allow several values
    pub multi_select: bool,
    /// Show the search field in the dropdown
    pub searchable: bool,
    /// Help text shown under the select
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Whether the select is disabled
    pub disabled: bool,
    /// A selection must be made
    pub required: bool,
    /// Container width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<TokenValue>,
    /// Container top margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<InputMargin>,
    /// Container bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<InputMargin>,
    /// Whether the dropdown is open
    pub open: bool,
    /// Current search text
    pub search_term: String,
    /// Whether the user has finished an interaction
    pub touched: bool,
    /// On change event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            id: None,
            label: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            options: Vec::new(),
            value: None,
            variant: SelectVariant::default(),
            color: InputColor::default(),
            size: InputSize::default(),
            multi_select: false,
            searchable: true,
            help_text: None,
            disabled: false,
            required: false,
            width: None,
            margin_top: None,
            margin_bottom: None,
            open: false,
            search_term: String::new(),
            touched: false,
            on_change: None,
        }
    }
}

impl Select {
    /// Create a select over `options`
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options, ..Self::default() }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the selection
    pub fn with_value(mut self, value: impl Into<SelectValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: SelectVariant) -> Self {
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

    /// Allow several values
    pub fn multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    /// Show or hide the search field
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
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

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
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

    /// Set the search text
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set touched state
    pub fn touched(mut self, touched: bool) -> Self {
        self.touched = touched;
        self
    }

    /// Selected values
    ///
    /// In multi-select mode a single value counts as a one-element list. In
    /// single mode only the first value of a list is used.
    pub fn selected_values(&self) -> Vec<&str> {
        let values: Vec<&str> = match &self.value {
            None => Vec::new(),
            Some(SelectValue::Single(value)) => vec![value.as_str()],
            Some(SelectValue::Multiple(values)) => values.iter().map(String::as_str).collect(),
        };
        let mut values: Vec<&str> = values.into_iter().filter(|v| !v.is_empty()).collect();
        if !self.multi_select {
            values.truncate(1);
        }
        values
    }

    /// Whether `value` is selected
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected_values().contains(&value)
    }

    /// Label for a value, or the value itself when no option matches
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(SelectOption::display_label)
            .unwrap_or(value)
    }

    /// Options matching the search text, case-insensitively on label or value
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        if self.search_term.is_empty() {
            return self.options.iter().collect();
        }
        let needle = self.search_term.to_lowercase();
        self.options.iter().filter(|option| option.matches(&needle)).collect()
    }

    /// Text shown in the closed select; empty when nothing is selected
    pub fn display_text(&self) -> String {
        let selected = self.selected_values();
        match selected.as_slice() {
            [] => String::new(),
            [only] => self.label_for(only).to_string(),
            many => format!("{} items selected", many.len()),
        }
    }

    /// Pick the option with `value`
    ///
    /// Multi-select toggles the value. Single mode replaces the selection,
    /// closes the dropdown, clears the search and marks the field touched.
    /// Returns the new selection, or `None` when the option is missing or
    /// disabled.
    pub fn select_option(&mut self, value: &str) -> Option<SelectValue> {
        let option = self.options.iter().find(|option| option.value == value)?;
        if option.disabled {
            return None;
        }

        let next = if self.multi_select {
            let mut values: Vec<String> =
                self.selected_values().into_iter().map(str::to_string).collect();
            if let Some(pos) = values.iter().position(|v| v == value) {
                values.remove(pos);
            } else {
                values.push(value.to_string());
            }
            SelectValue::Multiple(values)
        } else {
            self.open = false;
            self.search_term.clear();
            self.touched = true;
            SelectValue::Single(value.to_string())
        };

        self.value = Some(next.clone());
        Some(next)
    }

    /// Remove a selected value through its badge
    ///
    /// Only multi-select fields that are enabled have removable badges.
    pub fn remove_value(&mut self, value: &str) -> Option<SelectValue> {
        if self.disabled || !self.multi_select {
            return None;
        }
        let values: Vec<String> = self
            .selected_values()
            .into_iter()
            .filter(|v| *v != value)
            .map(str::to_string)
            .collect();
        let next = SelectValue::Multiple(values);
        self.value = Some(next.clone());
        Some(next)
    }

    /// Toggle the dropdown; opening clears the search
    pub fn press(&mut self) {
        if self.disabled {
            return;
        }
        if !self.open {
            self.search_term.clear();
        }
        self.open = !self.open;
    }

    /// Close the dropdown and mark the field touched
    pub fn close(&mut self) -> Option<ValidationResult> {
        self.open = false;
        self.search_term.clear();
        self.touched = true;
        self.validation()
    }

    /// Check the selection against the required rule
    pub fn validate_selection(&self) -> ValidationResult {
        if !self.required || self.disabled {
            return ValidationResult::valid();
        }
        if self.selected_values().is_empty() {
            let field = self.label.as_deref().unwrap_or("Field");
            return ValidationResult::invalid(format!("{} is required", field));
        }
        ValidationResult::valid()
    }

    /// Validation of the current selection, once the field is touched
    pub fn validation(&self) -> Option<ValidationResult> {
        (self.required && self.touched).then(|| self.validate_selection())
    }

    /// State used for colors and help text
    pub fn effective_state(&self) -> ValidationState {
        match self.validation() {
            Some(result) if !result.is_valid => ValidationState::Error,
            Some(_) if self.selected_values().is_empty() => ValidationState::Default,
            Some(_) => ValidationState::Success,
            None => ValidationState::Default,
        }
    }

    /// Validation message, or the supplied help text
    pub fn effective_help_text(&self) -> Option<String> {
        match self.validation() {
            Some(result) if !result.message.is_empty() => Some(result.message),
            _ => self.help_text.clone(),
        }
    }

    /// Badges for the selected values of a multi-select
    pub fn selected_badges(&self) -> Vec<Badge> {
        if !self.multi_select {
            return Vec::new();
        }
        self.selected_values()
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Badge::new(self.label_for(value))
                    .with_color(badge_color(index).as_str())
                    .with_size(badge_size(self.size))
            })
            .collect()
    }

    /// Get the computed styles for this select based on theme
    pub fn computed_styles(&self, theme: &ResolvedTheme) -> SelectStyles {
        let (font_size, padding, icon_size, label_size) = self.size.metrics();
        let colors = &theme.colors;
        let active = theme.color(self.color.color_key()).to_string();
        let state = self.effective_state();
        let state_color = state.color_key().map(|key| theme.color(key).to_string());

        let border_color = match &state_color {
            Some(color) => color.clone(),
            None if self.open => active.clone(),
            None => colors.border.clone(),
        };
        let radius = theme.border_radius.md;
        let trigger = match self.variant {
            SelectVariant::Default | SelectVariant::Outline => InputWrapperStyles {
                background: colors.surface.clone(),
                border_width: 1.0,
                border_bottom_width: None,
                border_color: Some(border_color),
                border_radius: radius,
                padding_horizontal: padding,
            },
            SelectVariant::Filled => InputWrapperStyles {
                background: colors.surface_accent.clone(),
                border_width: 0.0,
                border_bottom_width: None,
                border_color: None,
                border_radius: radius,
                padding_horizontal: padding,
            },
            SelectVariant::Underline => InputWrapperStyles {
                background: "transparent".to_string(),
                border_width: 0.0,
                border_bottom_width: Some(1.0),
                border_color: Some(border_color),
                border_radius: 0.0,
                padding_horizontal: padding,
            },
        };

        let primary = &theme.fonts.primary;
        let regular = primary.family_or_regular(FontWeight::Regular).to_string();
        let medium = primary.family_or_regular(FontWeight::Medium).to_string();

        let label = self.label.as_ref().map(|text| InputLabelStyles {
            text: text.clone(),
            color: if state == ValidationState::Error {
                colors.error.clone()
            } else {
                colors.text.clone()
            },
            font_size: label_size,
            font_family: medium.clone(),
            top: None,
            background: None,
            padding_horizontal: None,
            required_color: self.required.then(|| colors.error.clone()),
        });

        let display_text = self.display_text();
        let badges: Vec<SelectBadgeStyles> = self
            .selected_values()
            .into_iter()
            .zip(self.selected_badges())
            .map(|(value, badge)| SelectBadgeStyles {
                value: value.to_string(),
                label: badge.label.clone(),
                styles: badge.computed_styles(theme),
                remove_color: colors.text_contrast.clone(),
            })
            .collect();

        let help_text = self.effective_help_text().map(|text| InputHelpTextStyles {
            text,
            color: state_color.unwrap_or_else(|| theme.text_muted().to_string()),
            font_size: label_size,
            font_family: regular.clone(),
        });

        let dropdown = self.open.then(|| {
            let options = self
                .filtered_options()
                .into_iter()
                .map(|option| {
                    let selected = self.is_selected(&option.value);
                    let option_badge = self.multi_select.then(|| {
                        let position = self
                            .selected_values()
                            .iter()
                            .position(|v| *v == option.value);
                        match position {
                            Some(index) => theme.color(badge_color(index)).to_string(),
                            None => colors.secondary.clone(),
                        }
                    });
                    SelectOptionStyles {
                        value: option.value.clone(),
                        label: option.display_label().to_string(),
                        selected,
                        background: if selected {
                            format!("{}15", active)
                        } else {
                            "transparent".to_string()
                        },
                        text_color: if selected { active.clone() } else { colors.text.clone() },
                        font_family: if selected { medium.clone() } else { regular.clone() },
                        badge_color: option_badge,
                        show_checkmark: selected,
                        opacity: if option.disabled { 0.5 } else { 1.0 },
                    }
                })
                .collect::<Vec<_>>();

            SelectDropdownStyles {
                title: self.label.clone().unwrap_or_else(|| "Select".to_string()),
                background: colors.surface.clone(),
                divider_color: colors.border.clone(),
                show_search: self.searchable,
                show_clear_search: !self.search_term.is_empty(),
                empty_message: options.is_empty().then(|| NO_OPTIONS_MESSAGE.to_string()),
                options,
                checkmark_color: active.clone(),
                done_label: self
                    .multi_select
                    .then(|| format!("Done ({} selected)", self.selected_values().len())),
            }
        });

        SelectStyles {
            state,
            width: resolve_dimension(self.width.as_ref()),
            margin_top: self.margin_top.as_ref().map(|m| m.resolve(theme)),
            margin_bottom: self
                .margin_bottom
                .as_ref()
                .map(|m| m.resolve(theme))
                .unwrap_or(StyleValue::Number(DEFAULT_MARGIN_BOTTOM)),
            label,
            label_margin_bottom: theme.spacing.xs,
            trigger,
            padding_vertical: padding,
            padding_right: padding + icon_size + ICON_GAP,
            min_height: TRIGGER_MIN_HEIGHT,
            text_color: if display_text.is_empty() {
                theme.text_muted().to_string()
            } else {
                colors.text.clone()
            },
            text: if display_text.is_empty() { self.placeholder.clone() } else { display_text },
            font_size,
            font_family: regular,
            badges,
            chevron_icon: if self.open { "chevron-up" } else { "chevron-down" }.to_string(),
            icon_size,
            icon_color: active,
            help_text,
            opacity: if self.disabled { 0.5 } else { 1.0 },
            dropdown,
        }
    }
}

/// Computed badge for one selected value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectBadgeStyles {
    /// Selected value
    pub value: String,
    /// Badge text
    pub label: String,
    /// Badge styles
    pub styles: BadgeStyles,
    /// Color of the remove glyph
    pub remove_color: Color,
}

/// Computed row in the dropdown list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptionStyles {
    /// Option value
    pub value: String,
    /// Option text
    pub label: String,
    /// Whether the option is selected
    pub selected: bool,
    /// Row background
    pub background: Color,
    /// Text color
    pub text_color: Color,
    /// Text font family
    pub font_family: String,
    /// Badge color in multi-select mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_color: Option<Color>,
    /// Whether the checkmark is drawn
    pub show_checkmark: bool,
    /// Row opacity
    pub opacity: f32,
}

/// Computed dropdown styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDropdownStyles {
    /// Header title
    pub title: String,
    /// Panel background
    pub background: Color,
    /// Header and footer rule color
    pub divider_color: Color,
    /// Whether the search field is shown
    pub show_search: bool,
    /// Whether the clear-search button is shown
    pub show_clear_search: bool,
    /// Rows matching the search
    pub options: Vec<SelectOptionStyles>,
    /// Message when no rows match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    /// Checkmark color
    pub checkmark_color: Color,
    /// Footer button text in multi-select mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_label: Option<String>,
}

/// Computed select styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectStyles {
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
    /// Label, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<InputLabelStyles>,
    /// Space under the label
    pub label_margin_bottom: f32,
    /// Pressable trigger
    pub trigger: InputWrapperStyles,
    /// Vertical padding of the trigger
    pub padding_vertical: f32,
    /// Right padding, leaving room for the chevron
    pub padding_right: f32,
    /// Minimum trigger height
    pub min_height: f32,
    /// Selection text or placeholder
    pub text: String,
    /// Text color
    pub text_color: Color,
    /// Text size
    pub font_size: f32,
    /// Text family
    pub font_family: String,
    /// Badges in multi-select mode
    pub badges: Vec<SelectBadgeStyles>,
    /// Chevron icon name
    pub chevron_icon: String,
    /// Chevron size
    pub icon_size: f32,
    /// Chevron color
    pub icon_color: Color,
    /// Help text, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<InputHelpTextStyles>,
    /// Trigger opacity
    pub opacity: f32,
    /// Dropdown panel while open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<SelectDropdownStyles>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::builtin;

    fn fruits() -> Vec<SelectOption> {
        vec![
            SelectOption::new("apple").with_label("Apple"),
            SelectOption::new("banana").with_label("Banana"),
            SelectOption::new("cherry").with_label("Red Cherry"),
            SelectOption::new("durian").disabled(),
        ]
    }

    // ==========================================================================
    // Selection Tests
    // ==========================================================================

    #[test]
    fn test_select_new() {
        let select = Select::new(fruits());
        assert_eq!(select.placeholder, "Select an option...");
        assert!(select.searchable);
        assert_eq!(select.variant, SelectVariant::Outline);
        assert!(select.selected_values().is_empty());
        assert_eq!(select.display_text(), "");
    }

    #[test]
    fn test_search_filters_label_and_value() {
        let select = Select::new(fruits()).with_search("CHER");
        let values: Vec<&str> = select.filtered_options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["cherry"]);

        // Matches the label even when the value does not contain the text
        let by_label = Select::new(fruits()).with_search("red");
        assert_eq!(by_label.filtered_options().len(), 1);

        // Options without labels match on their value
        let unlabeled = Select::new(fruits()).with_search("dur");
        assert_eq!(unlabeled.filtered_options()[0].display_label(), "durian");

        assert_eq!(Select::new(fruits()).filtered_options().len(), 4);
        assert!(Select::new(fruits()).with_search("kiwi").filtered_options().is_empty());
    }

    #[test]
    fn test_single_select_closes_and_touches() {
        let mut select = Select::new(fruits()).with_search("ban");
        select.press();
        assert!(select.open);
        assert!(select.search_term.is_empty());

        select.search_term = "ban".to_string();
        let next = select.select_option("banana");
        assert_eq!(next, Some(SelectValue::Single("banana".to_string())));
        assert!(!select.open);
        assert!(select.search_term.is_empty());
        assert!(select.touched);
        assert_eq!(select.display_text(), "Banana");
    }

    #[test]
    fn test_disabled_or_missing_option_is_ignored() {
        let mut select = Select::new(fruits());
        assert_eq!(select.select_option("durian"), None);
        assert_eq!(select.select_option("kiwi"), None);
        assert_eq!(select.value, None);
        assert!(!select.touched);
    }

    #[test]
    fn test_multi_select_toggles() {
        let mut select = Select::new(fruits()).multi_select();
        select.press();

        select.select_option("apple");
        select.select_option("cherry");
        assert_eq!(select.selected_values(), vec!["apple", "cherry"]);
        assert!(select.open);
        assert!(!select.touched);
        assert_eq!(select.display_text(), "2 items selected");

        let next = select.select_option("apple");
        assert_eq!(next, Some(SelectValue::Multiple(vec!["cherry".to_string()])));
        assert_eq!(select.display_text(), "Red Cherry");
    }

    #[test]
    fn test_multi_select_normalizes_single_value() {
        let select = Select::new(fruits()).multi_select().with_value("banana");
        assert_eq!(select.selected_values(), vec!["banana"]);

        let unknown = Select::new(fruits()).with_value("kiwi");
        assert_eq!(unknown.display_text(), "kiwi");
    }

    #[test]
    fn test_remove_value() {
        let mut select = Select::new(fruits())
            .multi_select()
            .with_value(vec!["apple".to_string(), "banana".to_string()]);
        assert_eq!(
            select.remove_value("apple"),
            Some(SelectValue::Multiple(vec!["banana".to_string()]))
        );

        let mut single = Select::new(fruits()).with_value("apple");
        assert_eq!(single.remove_value("apple"), None);

        let mut disabled = Select::new(fruits()).multi_select().with_value("apple").disabled(true);
        assert_eq!(disabled.remove_value("apple"), None);
        assert_eq!(disabled.selected_values(), vec!["apple"]);
    }

    #[test]
    fn test_press_disabled() {
        let mut select = Select::new(fruits()).disabled(true);
        select.press();
        assert!(!select.open);
    }

    // ==========================================================================
    // Validation Tests
    // ==========================================================================

    #[test]
    fn test_required_validation() {
        let select = Select::new(fruits()).with_label("Fruit").required();
        assert_eq!(select.validate_selection(), ValidationResult::invalid("Fruit is required"));
        assert_eq!(select.validation(), None);
        assert_eq!(select.effective_state(), ValidationState::Default);

        let unlabeled = Select::new(fruits()).required();
        assert_eq!(unlabeled.validate_selection().message, "Field is required");

        let multi = Select::new(fruits()).multi_select().required().with_value(Vec::<String>::new());
        assert!(!multi.validate_selection().is_valid);

        let disabled = Select::new(fruits()).required().disabled(true);
        assert!(disabled.validate_selection().is_valid);
    }

    #[test]
    fn test_close_marks_touched() {
        let mut select = Select::new(fruits()).with_label("Fruit").required();
        select.press();
        let result = select.close();

        assert_eq!(result, Some(ValidationResult::invalid("Fruit is required")));
        assert_eq!(select.effective_state(), ValidationState::Error);
        assert_eq!(select.effective_help_text().as_deref(), Some("Fruit is required"));

        select.select_option("apple");
        assert_eq!(select.effective_state(), ValidationState::Success);
    }

    #[test]
    fn test_help_text_without_required() {
        let select = Select::new(fruits()).with_help_text("Pick one").touched(true);
        assert_eq!(select.effective_state(), ValidationState::Default);
        assert_eq!(select.effective_help_text().as_deref(), Some("Pick one"));
    }

    // ==========================================================================
    // Badge Tests
    // ==========================================================================

    #[test]
    fn test_badge_colors_cycle() {
        assert_eq!(badge_color(0), ColorKey::Primary);
        assert_eq!(badge_color(5), ColorKey::Error);
        assert_eq!(badge_color(6), ColorKey::Primary);
        assert_eq!(badge_color(8), ColorKey::Tertiary);
    }

    #[test]
    fn test_selected_badges() {
        let select = Select::new(fruits())
            .multi_select()
            .with_size(InputSize::Xl)
            .with_value(vec!["cherry".to_string(), "kiwi".to_string()]);
        let badges = select.selected_badges();

        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].label, "Red Cherry");
        assert_eq!(badges[0].color, "primary");
        assert_eq!(badges[1].label, "kiwi");
        assert_eq!(badges[1].color, "secondary");
        assert_eq!(badges[1].size, BadgeSize::Lg);

        assert!(Select::new(fruits()).with_value("apple").selected_badges().is_empty());
    }

    // ==========================================================================
    // Style Tests
    // ==========================================================================

    #[test]
    fn test_select_computed_styles() {
        let theme = builtin("modern");
        let styles = Select::new(fruits()).with_label("Fruit").computed_styles(&theme);

        assert_eq!(styles.text, "Select an option...");
        assert_eq!(styles.text_color, theme.text_muted());
        assert_eq!(styles.trigger.border_color.as_deref(), Some(theme.colors.border.as_str()));
        assert_eq!(styles.padding_right, 12.0 + 20.0 + 8.0);
        assert_eq!(styles.min_height, 44.0);
        assert_eq!(styles.chevron_icon, "chevron-down");
        assert_eq!(styles.icon_color, theme.colors.primary);
        assert_eq!(styles.margin_bottom, StyleValue::Number(16.0));
        assert_eq!(styles.label_margin_bottom, theme.spacing.xs);
        assert!(styles.dropdown.is_none());
    }

    #[test]
    fn test_open_select_styles() {
        let theme = builtin("modern");
        let mut select = Select::new(fruits()).with_color(InputColor::Tertiary).with_value("apple");
        select.press();
        let styles = select.computed_styles(&theme);

        assert_eq!(styles.text, "Apple");
        assert_eq!(styles.text_color, theme.colors.text);
        assert_eq!(styles.chevron_icon, "chevron-up");
        assert_eq!(styles.trigger.border_color.as_deref(), Some(theme.colors.tertiary.as_str()));

        let dropdown = styles.dropdown.unwrap();
        assert_eq!(dropdown.title, "Select");
        assert_eq!(dropdown.done_label, None);
        let apple = &dropdown.options[0];
        assert!(apple.selected);
        assert_eq!(apple.background, format!("{}15", theme.colors.tertiary));
        assert_eq!(apple.text_color, theme.colors.tertiary);
        assert_eq!(dropdown.options[3].opacity, 0.5);
    }

    #[test]
    fn test_multi_select_styles() {
        let theme = builtin("dark");
        let mut select = Select::new(fruits())
            .multi_select()
            .with_value(vec!["banana".to_string(), "apple".to_string()]);
        select.press();
        select.search_term = "an".to_string();
        let styles = select.computed_styles(&theme);

        assert_eq!(styles.badges.len(), 2);
        assert_eq!(styles.badges[0].styles.background, theme.colors.primary);
        assert_eq!(styles.badges[1].styles.background, theme.colors.secondary);

        let dropdown = styles.dropdown.unwrap();
        assert!(dropdown.show_clear_search);
        assert_eq!(dropdown.done_label.as_deref(), Some("Done (2 selected)"));
        let values: Vec<&str> = dropdown.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["banana", "durian"]);
        assert_eq!(dropdown.options[0].badge_color.as_deref(), Some(theme.colors.primary.as_str()));
        assert_eq!(dropdown.options[1].badge_color.as_deref(), Some(theme.colors.secondary.as_str()));
    }

    #[test]
    fn test_empty_search_message() {
        let theme = builtin("modern");
        let mut select = Select::new(fruits());
        select.press();
        select.search_term = "kiwi".to_string();
        let dropdown = select.computed_styles(&theme).dropdown.unwrap();
        assert_eq!(dropdown.empty_message.as_deref(), Some("No options found"));
    }

    #[test]
    fn test_error_state_styles() {
        let theme = builtin("modern");
        let styles = Select::new(fruits())
            .with_label("Fruit")
            .required()
            .touched(true)
            .with_variant(SelectVariant::Underline)
            .computed_styles(&theme);

        assert_eq!(styles.state, ValidationState::Error);
        assert_eq!(styles.trigger.border_bottom_width, Some(1.0));
        assert_eq!(styles.trigger.border_color.as_deref(), Some(theme.colors.error.as_str()));
        let label = styles.label.unwrap();
        assert_eq!(label.color, theme.colors.error);
        assert_eq!(label.required_color.as_deref(), Some(theme.colors.error.as_str()));
        assert_eq!(styles.help_text.unwrap().text, "Fruit is required");
    }

    #[test]
    fn test_select_serialization() {
        let select: Select = serde_json::from_str(
            r#"{"options":[{"value":"a","label":"A"}],"value":["a"],"multiSelect":true,"color":"magenta"}"#,
        )
        .unwrap();
        assert!(select.multi_select);
        assert_eq!(select.color, InputColor::Primary);
        assert_eq!(select.selected_values(), vec!["a"]);
        assert!(select.searchable);
    }
}
