//! Component style builders
//!
//! Each component is a props struct with serializable properties and
//! builder methods. `computed_styles` resolves the props against a theme
//! into the final attributes a renderer applies. Variants, sizes and states
//! are closed enums, so every combination is handled by an exhaustive match.
//!
//! # Available Components
//!
//! - [`Text`] - Typography with semantic variants
//! - [`Container`], [`Card`], [`Divider`] - Layout
//! - [`Button`], [`IconButton`] - Pressables
//! - [`Badge`], [`NotificationBadge`] - Status labels and counters
//! - [`FloatingActionButton`] - Anchored, draggable action button
//! - [`Input`], [`SearchInput`] - Text fields
//! - [`Select`] - Dropdown with search and multi-select
//! - [`Switch`], [`Checkbox`] - Toggles

use serde::{Deserialize, Serialize};
use theme::color::Color;
use theme::resolve::{resolve_color, TokenValue};
use theme::theme::{ColorKey, ResolvedTheme};
use theme::tokens::{RadiusKey, SpacingKey};

mod badge;
mod button;
mod fab;
mod input;
mod layout;
mod select;
mod text;
mod toggle;

pub use badge::{
    Badge, BadgeCorner, BadgeSize, BadgeStyles, BadgeVariant, NotificationBadge,
    NotificationBadgeStyles,
};
pub use button::{
    Button, ButtonSize, ButtonStyles, ButtonVariant, IconButton, IconButtonSize,
    IconButtonStyles, IconPosition,
};
pub use fab::{
    FabBadgeStyles, FabPosition, FabSize, FabStyles, FabVariant, FloatingActionButton, Point,
    Size,
};
pub use input::{
    Input, InputColor, InputHelpTextStyles, InputLabelStyles, InputMargin, InputSize,
    InputStyles, InputType, InputVariant, InputWrapperStyles, SearchInput, SearchInputStyles,
    ValidationResult, ValidationState,
};
pub use layout::{Card, CardStyles, CardVariant, Container, Divider, DividerDirection, DividerStyles};
pub use select::{
    badge_color, Select, SelectBadgeStyles, SelectDropdownStyles, SelectOption,
    SelectOptionStyles, SelectStyles, SelectValue, SelectVariant,
};
pub use text::{Text, TextAlign, TextStyles, TextVariant};
pub use toggle::{Checkbox, CheckboxStyles, LabelPosition, Switch, SwitchStyles};

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Child layout of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Children stacked vertically
    #[default]
    Column,
    /// Children side by side
    Row,
    /// Vertical flow that wraps
    Wrap,
}

impl Layout {
    /// Flex direction for this layout
    pub fn flex_direction(&self) -> &'static str {
        match self {
            Layout::Row => "row",
            Layout::Column | Layout::Wrap => "column",
        }
    }

    /// Flex wrap for this layout
    pub fn flex_wrap(&self) -> &'static str {
        match self {
            Layout::Wrap => "wrap",
            Layout::Column | Layout::Row => "nowrap",
        }
    }
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    FlexStart,
    /// Align to center
    Center,
    /// Align to end
    FlexEnd,
    /// Baseline alignment
    Baseline,
}

impl Alignment {
    /// Style keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Stretch => "stretch",
            Alignment::FlexStart => "flex-start",
            Alignment::Center => "center",
            Alignment::FlexEnd => "flex-end",
            Alignment::Baseline => "baseline",
        }
    }
}

/// Main-axis distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    FlexStart,
    /// Center
    Center,
    /// End
    FlexEnd,
    /// Space between
    SpaceBetween,
    /// Space around
    SpaceAround,
    /// Space evenly
    SpaceEvenly,
}

impl JustifyContent {
    /// Style keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
            JustifyContent::SpaceEvenly => "space-evenly",
        }
    }
}

/// Positioning scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionType {
    /// In normal flow
    #[default]
    Relative,
    /// Placed by offsets
    Absolute,
}

impl PositionType {
    /// Style keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionType::Relative => "relative",
            PositionType::Absolute => "absolute",
        }
    }
}

// =============================================================================
// Shared Resolution Helpers
// =============================================================================

/// Theme color for `key`, or the value of `fallback`
pub(crate) fn color_or(theme: &ResolvedTheme, key: Option<&str>, fallback: ColorKey) -> Color {
    match key {
        Some(key) => resolve_color(theme, key),
        None => theme.color(fallback).to_string(),
    }
}

/// Spacing where an unknown key means no space
pub(crate) fn spacing_or_zero(theme: &ResolvedTheme, value: &TokenValue) -> f32 {
    match value {
        TokenValue::Px(px) => *px,
        TokenValue::Key(key) => key.parse::<SpacingKey>().map(|k| theme.spacing.get(k)).unwrap_or(0.0),
    }
}

/// Border radius where an unknown key means square corners
pub(crate) fn radius_or_zero(theme: &ResolvedTheme, value: &TokenValue) -> f32 {
    match value {
        TokenValue::Px(px) => *px,
        TokenValue::Key(key) => {
            key.parse::<RadiusKey>().map(|k| theme.border_radius.get(k)).unwrap_or(0.0)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::builtin;
    use super::*;

    #[test]
    fn test_layout_flex() {
        assert_eq!(Layout::Wrap.flex_direction(), "column");
        assert_eq!(Layout::Wrap.flex_wrap(), "wrap");
        assert_eq!(Layout::Row.flex_direction(), "row");
        assert_eq!(Layout::Row.flex_wrap(), "nowrap");
    }

    #[test]
    fn test_color_or() {
        let modern = builtin("modern");
        assert_eq!(color_or(&modern, None, ColorKey::Border), modern.colors.border);
        assert_eq!(color_or(&modern, Some("error"), ColorKey::Border), modern.colors.error);
        assert_eq!(color_or(&modern, Some("#123456"), ColorKey::Border), "#123456");
    }

    #[test]
    fn test_unknown_keys_resolve_to_zero() {
        let modern = builtin("modern");
        assert_eq!(spacing_or_zero(&modern, &"huge".into()), 0.0);
        assert_eq!(spacing_or_zero(&modern, &"md".into()), modern.spacing.md);
        assert_eq!(radius_or_zero(&modern, &"blob".into()), 0.0);
        assert_eq!(radius_or_zero(&modern, &7.0.into()), 7.0);
    }

    #[test]
    fn test_alignment_serde() {
        let json = serde_json::to_string(&JustifyContent::SpaceBetween).unwrap();
        assert_eq!(json, "\"space-between\"");
        assert_eq!(Alignment::FlexEnd.as_str(), "flex-end");
    }
}
