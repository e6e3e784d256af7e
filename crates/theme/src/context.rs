//! Theme session and override scopes
//!
//! [`ThemeProvider`] owns the session: which theme is current, whether the
//! stored selection has been read yet, and persistence of user switches.
//! [`ThemeScope`] is the explicit stack a UI subtree uses to substitute a
//! different theme locally without touching the session.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use storage::MemoryStorage;
//! use theme::config::ThemeConfig;
//! use theme::context::ThemeProvider;
//! use theme::registry::ThemeRegistry;
//!
//! let registry = Arc::new(ThemeRegistry::builtin().unwrap());
//! let provider = ThemeProvider::new(
//!     registry,
//!     Arc::new(MemoryStorage::new()),
//!     ThemeConfig::new().with_persist(false),
//! );
//!
//! let mut scope = provider.scope();
//! {
//!     let inner = scope.push_override("dark").unwrap();
//!     assert_eq!(inner.theme_name().unwrap(), "dark");
//! }
//! assert_eq!(scope.theme_name().unwrap(), "modern");
//! ```

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use storage::KeyValueStorage;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::registry::ThemeRegistry;
use crate::theme::{ResolvedTheme, ThemeDefinition};

/// Provider lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderPhase {
    /// The stored selection has not been read yet
    Loading,
    /// The stored selection has been applied (or there was none)
    Ready,
}

#[derive(Debug)]
struct SessionState {
    current: Arc<ResolvedTheme>,
    phase: ProviderPhase,
    /// A user switch during `Loading` takes precedence over the stored name
    switched_while_loading: bool,
}

struct ProviderInner {
    registry: Arc<ThemeRegistry>,
    storage: Arc<dyn KeyValueStorage>,
    config: ThemeConfig,
    state: RwLock<SessionState>,
    /// Most recent persistence write; each write awaits its predecessor
    last_write: Mutex<Option<JoinHandle<()>>>,
}

/// Handle to a theme session
///
/// Cloning is cheap and every clone observes the same session.
#[derive(Clone)]
pub struct ThemeProvider {
    inner: Arc<ProviderInner>,
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("ThemeProvider")
            .field("theme", &state.current.name())
            .field("phase", &state.phase)
            .field("config", &self.inner.config)
            .finish()
    }
}

impl ThemeProvider {
    /// Create a session in the `Loading` phase
    ///
    /// An unregistered `config.initial_theme` is replaced by the registry's
    /// default theme.
    pub fn new(
        registry: Arc<ThemeRegistry>,
        storage: Arc<dyn KeyValueStorage>,
        config: ThemeConfig,
    ) -> Self {
        let current = match registry.find(&config.initial_theme) {
            Some(theme) => Arc::clone(theme),
            None => {
                tracing::warn!(
                    requested = %config.initial_theme,
                    fallback = %registry.default_name(),
                    "unknown initial theme"
                );
                registry.default_theme()
            }
        };

        Self {
            inner: Arc::new(ProviderInner {
                registry,
                storage,
                config,
                state: RwLock::new(SessionState {
                    current,
                    phase: ProviderPhase::Loading,
                    switched_while_loading: false,
                }),
                last_write: Mutex::new(None),
            }),
        }
    }

    /// Read the stored selection once and enter `Ready`
    ///
    /// Storage errors are logged and leave the current theme in place.
    /// Calling this again after `Ready` does nothing.
    pub async fn load(&self) {
        if self.phase() == ProviderPhase::Ready {
            return;
        }

        let key = &self.inner.config.storage_key;
        let stored = match self.inner.storage.get(key).await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::debug!(key = %key, error = %e, "failed to read stored theme");
                None
            }
        };

        let mut state = self.inner.state.write();
        if state.phase == ProviderPhase::Ready {
            return;
        }

        match stored {
            Some(name) if state.switched_while_loading => {
                tracing::debug!(stored = %name, "ignoring stored theme after user switch");
            }
            Some(name) => match self.inner.registry.find(&name) {
                Some(theme) => state.current = Arc::clone(theme),
                None => tracing::debug!(stored = %name, "stored theme is not registered"),
            },
            None => {}
        }

        state.phase = ProviderPhase::Ready;
        tracing::info!(theme = %state.current.name(), "theme provider ready");
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> ProviderPhase {
        self.inner.state.read().phase
    }

    /// Whether the stored selection is still being read
    pub fn is_loading(&self) -> bool {
        self.phase() == ProviderPhase::Loading
    }

    /// Name of the current theme
    pub fn theme_name(&self) -> String {
        self.inner.state.read().current.name().to_string()
    }

    /// The current theme
    pub fn current_theme(&self) -> Arc<ResolvedTheme> {
        Arc::clone(&self.inner.state.read().current)
    }

    /// Registered theme names in registration order
    pub fn theme_names(&self) -> Vec<String> {
        self.inner.registry.all_names()
    }

    /// Whether the current theme is the dark theme
    pub fn is_dark(&self) -> bool {
        self.inner.state.read().current.is_dark()
    }

    /// The registry this session selects from
    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.inner.registry
    }

    /// The session configuration
    pub fn config(&self) -> &ThemeConfig {
        &self.inner.config
    }

    /// Make `name` the current theme
    ///
    /// The change is visible immediately; persisting it happens in the
    /// background. Returns `false`, changing nothing, when `name` is not
    /// registered.
    pub fn switch_theme(&self, name: &str) -> bool {
        let Some(theme) = self.inner.registry.find(name) else {
            return false;
        };

        {
            let mut state = self.inner.state.write();
            state.current = Arc::clone(theme);
            if state.phase == ProviderPhase::Loading {
                state.switched_while_loading = true;
            }
        }
        tracing::info!(theme = %name, "theme switched");

        if self.inner.config.persist {
            self.persist(name);
        }
        true
    }

    /// Switch to the theme registered after the current one
    pub fn cycle_theme(&self) -> bool {
        let current = self.theme_name();
        let next = self.inner.registry.next_name(&current).to_string();
        self.switch_theme(&next)
    }

    fn persist(&self, name: &str) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::debug!(theme = %name, "no async runtime; theme not persisted");
                return;
            }
        };

        let storage = Arc::clone(&self.inner.storage);
        let key = self.inner.config.storage_key.clone();
        let value = name.to_string();

        let mut last_write = self.inner.last_write.lock();
        let previous = last_write.take();
        *last_write = Some(handle.spawn(async move {
            if let Some(previous) = previous {
                let _ = previous.await;
            }
            if let Err(e) = storage.set(&key, &value).await {
                tracing::debug!(key = %key, error = %e, "failed to persist theme");
            }
        }));
    }

    /// Wait until every persistence write issued so far has finished
    pub async fn flush(&self) {
        let pending = self.inner.last_write.lock().take();
        if let Some(pending) = pending {
            if let Err(e) = pending.await {
                tracing::debug!(error = %e, "theme persistence task failed");
            }
        }
    }

    /// Override scope rooted at this session
    pub fn scope(&self) -> ThemeScope {
        ThemeScope { root: Some(self.clone()), frames: Vec::new() }
    }
}

// =============================================================================
// Override Scopes
// =============================================================================

/// Theme pushed onto a [`ThemeScope`]
#[derive(Debug, Clone)]
pub enum ThemeSource {
    /// A registered theme; unknown names fall back to the default theme
    Name(String),
    /// An ad-hoc theme, resolved when pushed
    Definition(Box<ThemeDefinition>),
    /// An already resolved theme
    Resolved(Arc<ResolvedTheme>),
}

impl From<&str> for ThemeSource {
    fn from(name: &str) -> Self {
        ThemeSource::Name(name.to_string())
    }
}

impl From<String> for ThemeSource {
    fn from(name: String) -> Self {
        ThemeSource::Name(name)
    }
}

impl From<ThemeDefinition> for ThemeSource {
    fn from(definition: ThemeDefinition) -> Self {
        ThemeSource::Definition(Box::new(definition))
    }
}

impl From<Arc<ResolvedTheme>> for ThemeSource {
    fn from(theme: Arc<ResolvedTheme>) -> Self {
        ThemeSource::Resolved(theme)
    }
}

/// Stack of theme overrides above a session
///
/// The innermost override wins; with no overrides the session's current
/// theme applies.
#[derive(Debug, Default)]
pub struct ThemeScope {
    root: Option<ThemeProvider>,
    frames: Vec<Arc<ResolvedTheme>>,
}

impl ThemeScope {
    /// A scope with no session; every theme access fails
    pub fn detached() -> Self {
        Self::default()
    }

    fn root(&self) -> Result<&ThemeProvider> {
        self.root.as_ref().ok_or(ThemeError::NoProvider)
    }

    /// The session this scope is rooted at
    pub fn provider(&self) -> Result<&ThemeProvider> {
        self.root()
    }

    /// The effective theme at this point of the tree
    pub fn current_theme(&self) -> Result<Arc<ResolvedTheme>> {
        let root = self.root()?;
        Ok(match self.frames.last() {
            Some(frame) => Arc::clone(frame),
            None => root.current_theme(),
        })
    }

    /// Name of the effective theme
    pub fn theme_name(&self) -> Result<String> {
        Ok(self.current_theme()?.name().to_string())
    }

    /// Whether the effective theme is the dark theme
    pub fn is_dark(&self) -> Result<bool> {
        Ok(self.current_theme()?.is_dark())
    }

    /// Number of active overrides
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push an override; it is popped when the guard drops
    pub fn push_override(&mut self, source: impl Into<ThemeSource>) -> Result<OverrideGuard<'_>> {
        let root = self.root()?;
        let frame = match source.into() {
            ThemeSource::Name(name) => root.registry().get(&name),
            ThemeSource::Definition(definition) => Arc::new(ResolvedTheme::resolve(*definition)?),
            ThemeSource::Resolved(theme) => theme,
        };
        tracing::trace!(theme = %frame.name(), depth = self.frames.len() + 1, "push theme override");
        self.frames.push(frame);
        Ok(OverrideGuard { scope: self })
    }

    /// Run `f` with an override pushed, popping it afterwards
    pub fn with_override<R>(
        &mut self,
        source: impl Into<ThemeSource>,
        f: impl FnOnce(&mut ThemeScope) -> R,
    ) -> Result<R> {
        let mut guard = self.push_override(source)?;
        Ok(f(&mut guard))
    }
}

/// Keeps an override active; derefs to the scope it was pushed on
#[derive(Debug)]
pub struct OverrideGuard<'a> {
    scope: &'a mut ThemeScope,
}

impl Deref for OverrideGuard<'_> {
    type Target = ThemeScope;

    fn deref(&self) -> &Self::Target {
        self.scope
    }
}

impl DerefMut for OverrideGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.scope
    }
}

impl Drop for OverrideGuard<'_> {
    fn drop(&mut self) {
        self.scope.frames.pop();
    }
}
