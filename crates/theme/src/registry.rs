//! Registry of named themes
//!
//! Registration order is significant: it is the order [`ThemeRegistry::all_names`]
//! reports and the order theme cycling walks. Lookups never fail; an unknown
//! name resolves to the default theme.

use std::sync::Arc;

use crate::error::{Result, ThemeError};
use crate::theme::{ResolvedTheme, ThemeDefinition};
use crate::themes::{self, DEFAULT_THEME};

/// Ordered set of resolved themes
///
/// A registry is never empty: it is created from its default theme.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Arc<ResolvedTheme>>,
    default_index: usize,
}

impl ThemeRegistry {
    /// Create a registry whose first theme is also its fallback
    pub fn new(default: ThemeDefinition) -> Result<Self> {
        let resolved = ResolvedTheme::resolve(default)?;
        Ok(Self { themes: vec![Arc::new(resolved)], default_index: 0 })
    }

    /// Registry holding the six built-in themes, defaulting to `modern`
    pub fn builtin() -> Result<Self> {
        let mut definitions = themes::all().into_iter();
        let mut registry = match definitions.next() {
            Some(first) => Self::new(first)?,
            None => Self::new(themes::modern())?,
        };
        for definition in definitions {
            registry.register(definition)?;
        }
        registry.set_default(DEFAULT_THEME)?;
        Ok(registry)
    }

    /// Validate, resolve and append a theme
    pub fn register(&mut self, definition: ThemeDefinition) -> Result<()> {
        if self.contains(&definition.name) {
            return Err(ThemeError::DuplicateTheme(definition.name));
        }
        let resolved = ResolvedTheme::resolve(definition)?;
        tracing::debug!(theme = %resolved.name(), "registered theme");
        self.themes.push(Arc::new(resolved));
        Ok(())
    }

    /// Parse a JSON theme definition and register it
    pub fn register_json(&mut self, json: &str) -> Result<()> {
        self.register(ThemeDefinition::from_json(json)?)
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_theme(mut self, definition: ThemeDefinition) -> Result<Self> {
        self.register(definition)?;
        Ok(self)
    }

    /// Make an already registered theme the fallback
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        match self.position(name) {
            Some(index) => {
                self.default_index = index;
                Ok(())
            }
            None => Err(ThemeError::UnknownTheme(name.to_string())),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.themes.iter().position(|t| t.name() == name)
    }

    /// Look up a theme by name, without falling back
    pub fn find(&self, name: &str) -> Option<&Arc<ResolvedTheme>> {
        self.themes.iter().find(|t| t.name() == name)
    }

    /// Look up a theme by name, falling back to the default theme
    pub fn get(&self, name: &str) -> Arc<ResolvedTheme> {
        match self.find(name) {
            Some(theme) => Arc::clone(theme),
            None => self.default_theme(),
        }
    }

    /// The fallback theme
    pub fn default_theme(&self) -> Arc<ResolvedTheme> {
        Arc::clone(&self.themes[self.default_index])
    }

    /// Name of the fallback theme
    pub fn default_name(&self) -> &str {
        self.themes[self.default_index].name()
    }

    /// Whether a theme with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Theme names in registration order
    pub fn all_names(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.name().to_string()).collect()
    }

    /// Name registered after `current`, wrapping to the first
    ///
    /// An unregistered `current` also yields the first name.
    pub fn next_name(&self, current: &str) -> &str {
        let next = match self.position(current) {
            Some(index) => (index + 1) % self.themes.len(),
            None => 0,
        };
        self.themes[next].name()
    }

    /// Resolved themes in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ResolvedTheme>> {
        self.themes.iter()
    }

    /// Number of registered themes
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ThemeRegistry {
        ThemeRegistry::builtin().unwrap()
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    #[test]
    fn test_builtin_names_in_order() {
        assert_eq!(
            registry().all_names(),
            vec!["modern", "dark", "minimal", "vibrant", "admin", "pink"]
        );
    }

    #[test]
    fn test_get_known_theme() {
        let theme = registry().get("vibrant");
        assert_eq!(theme.name(), "vibrant");
        assert_eq!(theme.colors.text, "#0A6270");
    }

    #[test]
    fn test_get_unknown_falls_back_to_default() {
        let reg = registry();
        assert_eq!(reg.get("nope").name(), "modern");
        assert_eq!(reg.get("").name(), "modern");
        assert!(reg.find("nope").is_none());
    }

    #[test]
    fn test_custom_registry_defaults_to_first_theme() {
        let reg = ThemeRegistry::new(themes::pink()).unwrap().with_theme(themes::admin()).unwrap();
        assert_eq!(reg.default_name(), "pink");
        assert_eq!(reg.get("modern").name(), "pink");
        assert_eq!(reg.all_names(), vec!["pink", "admin"]);
    }

    #[test]
    fn test_set_default() {
        let mut reg = registry();
        reg.set_default("admin").unwrap();
        assert_eq!(reg.get("nope").name(), "admin");

        let err = reg.set_default("nope").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(name) if name == "nope"));
        assert_eq!(reg.default_name(), "admin");
    }

    #[test]
    fn test_get_shares_resolved_instance() {
        let reg = registry();
        assert!(Arc::ptr_eq(&reg.get("dark"), &reg.get("dark")));
    }

    // =========================================================================
    // Cycling
    // =========================================================================

    #[test]
    fn test_next_name_wraps() {
        let reg = registry();
        assert_eq!(reg.next_name("modern"), "dark");
        assert_eq!(reg.next_name("admin"), "pink");
        assert_eq!(reg.next_name("pink"), "modern");
        assert_eq!(reg.next_name("unknown"), "modern");
    }

    #[test]
    fn test_next_name_single_theme() {
        let reg = ThemeRegistry::new(themes::minimal()).unwrap();
        assert_eq!(reg.next_name("minimal"), "minimal");
    }

    // =========================================================================
    // Registration
    // =========================================================================

    #[test]
    fn test_register_duplicate_rejected() {
        let mut reg = registry();
        let err = reg.register(themes::dark()).unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateTheme(name) if name == "dark"));
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn test_register_invalid_rejected() {
        let mut reg = ThemeRegistry::new(themes::modern()).unwrap();
        let mut def = themes::dark();
        def.spacing.xs = 100.0;
        assert!(matches!(reg.register(def), Err(ThemeError::InvalidTheme { .. })));
        assert_eq!(reg.len(), 1);

        let mut bad_default = themes::modern();
        bad_default.name = String::new();
        assert!(ThemeRegistry::new(bad_default).is_err());
    }

    #[test]
    fn test_register_json() {
        let mut def = themes::dark();
        def.name = "midnight".to_string();
        def.colors.background = "#000000".to_string();
        let json = serde_json::to_string(&def).unwrap();

        let mut reg = registry();
        reg.register_json(&json).unwrap();

        assert_eq!(reg.all_names().last().map(String::as_str), Some("midnight"));
        assert_eq!(reg.get("midnight").colors.background, "#000000");
        assert_eq!(reg.next_name("pink"), "midnight");
    }

    #[test]
    fn test_register_json_parse_error() {
        let mut reg = registry();
        assert!(matches!(reg.register_json("{\"name\": 3}"), Err(ThemeError::Parse(_))));
    }

    #[test]
    fn test_text_muted_derived_at_registration() {
        let reg = registry();
        assert_eq!(reg.get("minimal").text_muted(), "rgba(17, 24, 39, 0.6)");
        assert_eq!(reg.get("pink").text_muted(), "rgba(133, 50, 81, 0.6)");
    }
}
