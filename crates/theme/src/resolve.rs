//! Token resolution
//!
//! Turns semantic style requests ("md" spacing, "primary" color) into
//! concrete values against a [`ResolvedTheme`]. The resolver is the only
//! place where free-form input meets the typed theme, so anything it does
//! not recognise is passed through as a literal instead of failing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theme::ResolvedTheme;
use crate::tokens::{RadiusKey, SpacingKey};

/// A style input: either a pixel value or a token key / literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Concrete pixel value
    Px(f32),
    /// Token key, or a literal such as `"auto"` or `"50%"`
    Key(String),
}

impl From<f32> for TokenValue {
    fn from(value: f32) -> Self {
        TokenValue::Px(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Key(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Key(value)
    }
}

impl From<SpacingKey> for TokenValue {
    fn from(key: SpacingKey) -> Self {
        TokenValue::Key(key.as_str().to_string())
    }
}

impl From<RadiusKey> for TokenValue {
    fn from(key: RadiusKey) -> Self {
        TokenValue::Key(key.as_str().to_string())
    }
}

/// Per-edge spacing; only the edges that are set are emitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpacing {
    /// Top edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<TokenValue>,
    /// Bottom edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<TokenValue>,
    /// Left edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<TokenValue>,
    /// Right edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<TokenValue>,
    /// Left and right
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<TokenValue>,
    /// Top and bottom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<TokenValue>,
}

impl EdgeSpacing {
    /// Empty edge set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top edge
    pub fn top(mut self, value: impl Into<TokenValue>) -> Self {
        self.top = Some(value.into());
        self
    }

    /// Set the bottom edge
    pub fn bottom(mut self, value: impl Into<TokenValue>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    /// Set the left edge
    pub fn left(mut self, value: impl Into<TokenValue>) -> Self {
        self.left = Some(value.into());
        self
    }

    /// Set the right edge
    pub fn right(mut self, value: impl Into<TokenValue>) -> Self {
        self.right = Some(value.into());
        self
    }

    /// Set left and right together
    pub fn horizontal(mut self, value: impl Into<TokenValue>) -> Self {
        self.horizontal = Some(value.into());
        self
    }

    /// Set top and bottom together
    pub fn vertical(mut self, value: impl Into<TokenValue>) -> Self {
        self.vertical = Some(value.into());
        self
    }

    /// Edges in top, bottom, left, right, horizontal, vertical order
    fn edges(&self) -> [Option<&TokenValue>; 6] {
        [
            self.top.as_ref(),
            self.bottom.as_ref(),
            self.left.as_ref(),
            self.right.as_ref(),
            self.horizontal.as_ref(),
            self.vertical.as_ref(),
        ]
    }
}

/// Padding or margin input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpacingInput {
    /// Same value on every edge
    Uniform(TokenValue),
    /// Individual edges
    Edges(EdgeSpacing),
}

impl From<TokenValue> for SpacingInput {
    fn from(value: TokenValue) -> Self {
        SpacingInput::Uniform(value)
    }
}

impl From<f32> for SpacingInput {
    fn from(value: f32) -> Self {
        SpacingInput::Uniform(value.into())
    }
}

impl From<&str> for SpacingInput {
    fn from(value: &str) -> Self {
        SpacingInput::Uniform(value.into())
    }
}

impl From<SpacingKey> for SpacingInput {
    fn from(key: SpacingKey) -> Self {
        SpacingInput::Uniform(key.into())
    }
}

impl From<EdgeSpacing> for SpacingInput {
    fn from(edges: EdgeSpacing) -> Self {
        SpacingInput::Edges(edges)
    }
}

/// A resolved style attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value (pixels, opacity, multipliers)
    Number(f32),
    /// Text value (colors, percentages, keywords)
    Text(String),
}

impl StyleValue {
    /// The numeric value, if this is a number
    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }

    /// The text value, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Number(_) => None,
            StyleValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

/// Ordered map from style property name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<&'static str, StyleValue>);

impl StyleMap {
    /// Empty style map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value
    pub fn insert(&mut self, property: &'static str, value: impl Into<StyleValue>) {
        self.0.insert(property, value.into());
    }

    /// Set a property only when a value is present
    pub fn insert_opt(&mut self, property: &'static str, value: Option<StyleValue>) {
        if let Some(value) = value {
            self.0.insert(property, value);
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, property: &'static str, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Copy every property of `other` into this map
    pub fn merge(&mut self, other: StyleMap) {
        self.0.extend(other.0);
    }

    /// Value of a property
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    /// Numeric value of a property
    pub fn number(&self, property: &str) -> Option<f32> {
        self.get(property).and_then(StyleValue::as_number)
    }

    /// Text value of a property
    pub fn text(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(StyleValue::as_text)
    }

    /// Whether a property is set
    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Property names in order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// Properties in order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no property is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(&'static str, StyleValue)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (&'static str, StyleValue)>>(iter: I) -> Self {
        StyleMap(iter.into_iter().collect())
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve a spacing value: numbers pass through, spacing keys become pixels
/// and anything else is kept as a literal
pub fn resolve_spacing(theme: &ResolvedTheme, value: &TokenValue) -> StyleValue {
    match value {
        TokenValue::Px(px) => StyleValue::Number(*px),
        TokenValue::Key(key) => match key.parse::<SpacingKey>() {
            Ok(key) => StyleValue::Number(theme.spacing.get(key)),
            Err(_) => StyleValue::Text(key.clone()),
        },
    }
}

fn resolve_edges(
    theme: &ResolvedTheme,
    property: &'static str,
    edge_properties: [&'static str; 6],
    input: Option<&SpacingInput>,
) -> StyleMap {
    let mut styles = StyleMap::new();
    match input {
        None => {}
        Some(SpacingInput::Uniform(value)) => {
            styles.insert(property, resolve_spacing(theme, value));
        }
        Some(SpacingInput::Edges(edges)) => {
            for (value, name) in edges.edges().into_iter().zip(edge_properties) {
                if let Some(value) = value {
                    styles.insert(name, resolve_spacing(theme, value));
                }
            }
        }
    }
    styles
}

/// Resolve padding into `padding` or `paddingTop`-style properties
pub fn resolve_padding(theme: &ResolvedTheme, input: Option<&SpacingInput>) -> StyleMap {
    resolve_edges(
        theme,
        "padding",
        [
            "paddingTop",
            "paddingBottom",
            "paddingLeft",
            "paddingRight",
            "paddingHorizontal",
            "paddingVertical",
        ],
        input,
    )
}

/// Resolve margin into `margin` or `marginTop`-style properties
pub fn resolve_margin(theme: &ResolvedTheme, input: Option<&SpacingInput>) -> StyleMap {
    resolve_edges(
        theme,
        "margin",
        [
            "marginTop",
            "marginBottom",
            "marginLeft",
            "marginRight",
            "marginHorizontal",
            "marginVertical",
        ],
        input,
    )
}

/// Resolve a gap with the spacing rules
pub fn resolve_gap(theme: &ResolvedTheme, value: Option<&TokenValue>) -> Option<StyleValue> {
    value.map(|v| resolve_spacing(theme, v))
}

/// Resolve a width or height; `"full"` means `"100%"`
pub fn resolve_dimension(value: Option<&TokenValue>) -> Option<StyleValue> {
    value.map(|v| match v {
        TokenValue::Px(px) => StyleValue::Number(*px),
        TokenValue::Key(key) if key == "full" => StyleValue::Text("100%".to_string()),
        TokenValue::Key(key) => StyleValue::Text(key.clone()),
    })
}

/// Resolve a border radius: radius keys become pixels, including `full`
pub fn resolve_border_radius(
    theme: &ResolvedTheme,
    value: Option<&TokenValue>,
) -> Option<StyleValue> {
    value.map(|v| match v {
        TokenValue::Px(px) => StyleValue::Number(*px),
        TokenValue::Key(key) => match key.parse::<RadiusKey>() {
            Ok(key) => StyleValue::Number(theme.border_radius.get(key)),
            Err(_) => StyleValue::Text(key.clone()),
        },
    })
}

/// Resolve a color key to the theme's value; unknown input is a literal
pub fn resolve_color(theme: &ResolvedTheme, value: &str) -> String {
    theme.named_color(value).unwrap_or(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ThemeRegistry;
    use std::sync::Arc;

    fn modern() -> Arc<ResolvedTheme> {
        ThemeRegistry::builtin().unwrap().get("modern")
    }

    // =========================================================================
    // Spacing
    // =========================================================================

    #[test]
    fn test_spacing_keys_resolve_monotonically() {
        let registry = ThemeRegistry::builtin().unwrap();
        for theme in registry.iter() {
            let values: Vec<f32> = SpacingKey::ALL
                .iter()
                .map(|key| {
                    resolve_spacing(theme, &(*key).into())
                        .as_number()
                        .expect("spacing key resolves to a number")
                })
                .collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{}: {:?}", theme.name(), values);
        }
    }

    #[test]
    fn test_spacing_number_passthrough() {
        let theme = modern();
        assert_eq!(resolve_spacing(&theme, &42.0.into()), StyleValue::Number(42.0));
    }

    #[test]
    fn test_spacing_unknown_key_literal() {
        let theme = modern();
        assert_eq!(
            resolve_spacing(&theme, &"unknown-key".into()),
            StyleValue::Text("unknown-key".to_string())
        );
        assert_eq!(resolve_spacing(&theme, &"auto".into()), StyleValue::from("auto"));
    }

    #[test]
    fn test_token_value_deserializes_numbers_and_strings() {
        let values: Vec<TokenValue> = serde_json::from_str(r#"[8, "md", 1.5]"#).unwrap();
        assert_eq!(
            values,
            vec![TokenValue::Px(8.0), TokenValue::Key("md".to_string()), TokenValue::Px(1.5)]
        );
    }

    // =========================================================================
    // Padding / Margin
    // =========================================================================

    #[test]
    fn test_margin_edges_only_emits_present_edges() {
        let theme = modern();
        let input = SpacingInput::from(EdgeSpacing::new().top("sm").horizontal("lg"));
        let styles = resolve_margin(&theme, Some(&input));

        assert_eq!(styles.len(), 2);
        assert_eq!(styles.number("marginTop"), Some(theme.spacing.sm));
        assert_eq!(styles.number("marginHorizontal"), Some(theme.spacing.lg));
        assert!(!styles.contains("margin"));
    }

    #[test]
    fn test_padding_uniform() {
        let theme = modern();
        let styles = resolve_padding(&theme, Some(&"md".into()));
        assert_eq!(styles.keys().collect::<Vec<_>>(), vec!["padding"]);
        assert_eq!(styles.number("padding"), Some(theme.spacing.md));
    }

    #[test]
    fn test_padding_absent_is_empty() {
        let theme = modern();
        assert!(resolve_padding(&theme, None).is_empty());
        assert!(resolve_margin(&theme, None).is_empty());
    }

    #[test]
    fn test_padding_mixed_values() {
        let theme = modern();
        let input = SpacingInput::from(EdgeSpacing::new().left(3.0).right("10%"));
        let styles = resolve_padding(&theme, Some(&input));
        assert_eq!(styles.number("paddingLeft"), Some(3.0));
        assert_eq!(styles.text("paddingRight"), Some("10%"));
    }

    #[test]
    fn test_spacing_input_from_json() {
        let input: SpacingInput = serde_json::from_str(r#"{"vertical": "xs"}"#).unwrap();
        let styles = resolve_padding(&modern(), Some(&input));
        assert_eq!(styles.number("paddingVertical"), Some(4.0));

        let uniform: SpacingInput = serde_json::from_str("12").unwrap();
        assert_eq!(uniform, SpacingInput::Uniform(TokenValue::Px(12.0)));
    }

    // =========================================================================
    // Gap / Dimension / Radius
    // =========================================================================

    #[test]
    fn test_gap() {
        let theme = modern();
        assert_eq!(resolve_gap(&theme, None), None);
        assert_eq!(resolve_gap(&theme, Some(&"xl".into())), Some(StyleValue::Number(24.0)));
    }

    #[test]
    fn test_full_means_different_things() {
        let theme = modern();
        assert_eq!(
            resolve_border_radius(&theme, Some(&"full".into())),
            Some(StyleValue::Number(9999.0))
        );
        assert_eq!(resolve_dimension(Some(&"full".into())), Some(StyleValue::from("100%")));
    }

    #[test]
    fn test_dimension_passthrough() {
        assert_eq!(resolve_dimension(None), None);
        assert_eq!(resolve_dimension(Some(&120.0.into())), Some(StyleValue::Number(120.0)));
        assert_eq!(resolve_dimension(Some(&"50%".into())), Some(StyleValue::from("50%")));
    }

    #[test]
    fn test_border_radius() {
        let theme = modern();
        assert_eq!(
            resolve_border_radius(&theme, Some(&RadiusKey::Md.into())),
            Some(StyleValue::Number(theme.border_radius.md))
        );
        assert_eq!(resolve_border_radius(&theme, Some(&5.0.into())), Some(StyleValue::Number(5.0)));
        assert_eq!(
            resolve_border_radius(&theme, Some(&"round".into())),
            Some(StyleValue::from("round"))
        );
        assert_eq!(resolve_border_radius(&theme, None), None);
    }

    // =========================================================================
    // Color
    // =========================================================================

    #[test]
    fn test_color_keys_and_literals() {
        let theme = modern();
        assert_eq!(resolve_color(&theme, "primary"), theme.colors.primary);
        assert_eq!(resolve_color(&theme, "textMuted"), theme.text_muted());
        assert_eq!(resolve_color(&theme, "#ABCDEF"), "#ABCDEF");
        assert_eq!(resolve_color(&theme, "rebeccapurple"), "rebeccapurple");
    }

    #[test]
    fn test_style_map_serializes_in_order() {
        let styles = StyleMap::new().with("width", "100%").with("opacity", 0.5);
        let json = serde_json::to_string(&styles).unwrap();
        assert_eq!(json, r#"{"opacity":0.5,"width":"100%"}"#);
    }
}
