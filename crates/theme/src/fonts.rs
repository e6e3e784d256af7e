//! Font aggregation and loading
//!
//! Every family any registered theme may render with is collected into a
//! single [`FontManifest`] so it can be loaded once, before the first paint.
//! Loading itself is delegated to a [`FontLoader`]; a failure downgrades
//! text to the system font instead of failing startup.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::ThemeRegistry;
use crate::typography::{FontGroup, FontWeight, SYSTEM_FONT};

/// A loadable font family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Family name text styles refer to
    pub family: String,
    /// Where the font file comes from
    pub source: String,
}

/// Ordered, family-deduplicated list of fonts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FontManifest {
    fonts: Vec<FontDescriptor>,
}

impl FontManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font unless its family is already present
    ///
    /// Returns the source already recorded when the family was present with
    /// a different source.
    pub fn insert(
        &mut self,
        family: impl Into<String>,
        source: impl Into<String>,
    ) -> Option<&str> {
        let family = family.into();
        let source = source.into();
        match self.fonts.iter().position(|f| f.family == family) {
            Some(index) => {
                let existing = &self.fonts[index].source;
                (existing != &source).then_some(existing.as_str())
            }
            None => {
                self.fonts.push(FontDescriptor { family, source });
                None
            }
        }
    }

    /// Fonts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &FontDescriptor> {
        self.fonts.iter()
    }

    /// Number of distinct families
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no font was collected
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Source recorded for a family
    pub fn source_of(&self, family: &str) -> Option<&str> {
        self.fonts.iter().find(|f| f.family == family).map(|f| f.source.as_str())
    }

    /// Family to source map, the shape font loaders usually expect
    pub fn as_map(&self) -> BTreeMap<&str, &str> {
        self.fonts.iter().map(|f| (f.family.as_str(), f.source.as_str())).collect()
    }
}

impl<'a> IntoIterator for &'a FontManifest {
    type Item = &'a FontDescriptor;
    type IntoIter = std::slice::Iter<'a, FontDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.iter()
    }
}

fn collect_group(manifest: &mut FontManifest, theme: &str, group: &FontGroup) {
    for (_, face) in group.faces() {
        if let Some(existing) = manifest.insert(&face.family, &face.source) {
            tracing::warn!(
                theme,
                family = %face.family,
                kept = existing,
                ignored = %face.source,
                "font family declared with conflicting sources; keeping the first"
            );
        }
    }
}

/// Collect every font declared by every registered theme
///
/// Themes are visited in registration order, groups as primary, secondary,
/// monospace, and faces from thin to black. The first source seen for a
/// family wins.
pub fn collect_fonts(registry: &ThemeRegistry) -> FontManifest {
    let mut manifest = FontManifest::new();
    for theme in registry.iter() {
        for (_, group) in theme.fonts.groups() {
            collect_group(&mut manifest, theme.name(), group);
        }
    }
    manifest
}

// =============================================================================
// Loading
// =============================================================================

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    /// A single family failed to load
    #[error("failed to load font {family}: {reason}")]
    Failed {
        /// Family name
        family: String,
        /// Loader-specific reason
        reason: String,
    },

    /// The loader cannot load fonts at all
    #[error("font loading unavailable: {0}")]
    Unavailable(String),
}

/// Platform seam that makes fonts available to the renderer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FontLoader: Send + Sync {
    /// Load every font in the manifest
    async fn load(&self, manifest: &FontManifest) -> Result<(), FontLoadError>;
}

/// Outcome of font loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStatus {
    /// Theme fonts can be used
    Loaded,
    /// Text falls back to the system font
    Unavailable,
}

impl FontStatus {
    /// Whether theme fonts are available
    pub fn is_loaded(&self) -> bool {
        matches!(self, FontStatus::Loaded)
    }

    /// Family to render a weight of `group` with
    pub fn family_for<'a>(&self, group: &'a FontGroup, weight: FontWeight) -> &'a str {
        match self {
            FontStatus::Loaded => group.family_for(weight),
            FontStatus::Unavailable => SYSTEM_FONT,
        }
    }
}

/// Load the manifest, downgrading failures to [`FontStatus::Unavailable`]
pub async fn load_fonts(loader: &dyn FontLoader, manifest: &FontManifest) -> FontStatus {
    match loader.load(manifest).await {
        Ok(()) => {
            tracing::debug!(count = manifest.len(), "fonts loaded");
            FontStatus::Loaded
        }
        Err(e) => {
            tracing::warn!(error = %e, "font loading failed; using system font");
            FontStatus::Unavailable
        }
    }
}
