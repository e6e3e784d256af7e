//! Theme Integration Tests
//!
//! End-to-end tests across storage, the theme session and components:
//! persistence through the sled store, the loading lifecycle, override
//! scopes and font fallback.

use std::sync::Arc;

use async_trait::async_trait;
use prism_kit::components::{Button, Card, CardVariant, Text};
use storage::{KeyValueStorage, KvConfig, KvStore, MemoryStorage, StorageError};
use tempfile::TempDir;
use theme::{
    collect_fonts, load_fonts, FontLoadError, FontLoader, FontManifest, FontStatus,
    ProviderPhase, ThemeConfig, ThemeProvider, ThemeRegistry,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn registry() -> Arc<ThemeRegistry> {
    Arc::new(ThemeRegistry::builtin().unwrap())
}

/// Storage that rejects every write
struct ReadOnlyStorage;

#[async_trait]
impl KeyValueStorage for ReadOnlyStorage {
    async fn get(&self, _key: &str) -> storage::backend::Result<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> storage::backend::Result<()> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }

    async fn remove(&self, _key: &str) -> storage::backend::Result<bool> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }
}

/// Loader for an environment without font support
struct NoFonts;

#[async_trait]
impl FontLoader for NoFonts {
    async fn load(&self, _manifest: &FontManifest) -> Result<(), FontLoadError> {
        Err(FontLoadError::Unavailable("no font backend".to_string()))
    }
}

/// Test that a switch survives a restart through the sled store
#[tokio::test]
async fn test_theme_persists_across_restart() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs").to_string_lossy().to_string();

    // Phase 1: switch and flush
    {
        let store = Arc::new(KvStore::new(KvConfig::new(path.clone())).unwrap());
        let provider = ThemeProvider::new(registry(), store.clone(), ThemeConfig::default());
        provider.load().await;
        assert_eq!(provider.theme_name(), "modern");

        assert!(provider.switch_theme("vibrant"));
        provider.flush().await;

        let stored: Option<String> = store.get("@app_theme").unwrap();
        assert_eq!(stored.as_deref(), Some("vibrant"));
        store.flush().unwrap();
    }

    // Phase 2: a new session restores the selection
    {
        let store = Arc::new(KvStore::new(KvConfig::new(path)).unwrap());
        let provider = ThemeProvider::new(registry(), store, ThemeConfig::default());
        assert_eq!(provider.phase(), ProviderPhase::Loading);
        assert_eq!(provider.theme_name(), "modern");

        provider.load().await;
        assert_eq!(provider.phase(), ProviderPhase::Ready);
        assert_eq!(provider.theme_name(), "vibrant");
    }
}

/// Test that the last of several rapid switches is what storage holds
#[tokio::test]
async fn test_rapid_switches_persist_in_order() {
    init_tracing();
    let storage = Arc::new(MemoryStorage::new());
    let provider = ThemeProvider::new(registry(), storage.clone(), ThemeConfig::default());
    provider.load().await;

    for name in ["dark", "minimal", "admin", "pink", "dark"] {
        assert!(provider.switch_theme(name));
    }
    provider.flush().await;

    assert_eq!(storage.peek("@app_theme").as_deref(), Some("dark"));
}

/// Test a custom storage key and a stored theme that no longer exists
#[tokio::test]
async fn test_custom_key_and_stale_selection() {
    init_tracing();
    let storage = Arc::new(MemoryStorage::with_entries([("prefs:theme", "retired")]));
    let config = ThemeConfig::new().with_storage_key("prefs:theme").with_initial_theme("admin");
    let provider = ThemeProvider::new(registry(), storage, config);

    provider.load().await;
    assert_eq!(provider.theme_name(), "admin");
    assert!(!provider.is_loading());
}

/// Test that failed writes never undo a switch
#[tokio::test]
async fn test_failed_write_keeps_switch() {
    init_tracing();
    let provider = ThemeProvider::new(registry(), Arc::new(ReadOnlyStorage), ThemeConfig::default());
    provider.load().await;

    assert!(provider.switch_theme("dark"));
    provider.flush().await;

    assert_eq!(provider.theme_name(), "dark");
    assert!(provider.is_dark());
}

/// Test cycling through every built-in theme back to the start
#[tokio::test]
async fn test_cycle_visits_every_theme() {
    init_tracing();
    let provider =
        ThemeProvider::new(registry(), Arc::new(MemoryStorage::new()), ThemeConfig::default());
    provider.load().await;

    let mut seen = vec![provider.theme_name()];
    for _ in 0..5 {
        assert!(provider.cycle_theme());
        seen.push(provider.theme_name());
    }
    assert_eq!(seen, provider.theme_names());

    provider.cycle_theme();
    assert_eq!(provider.theme_name(), "modern");
}

/// Test that nested overrides restyle components without touching the session
#[tokio::test]
async fn test_overrides_restyle_components() {
    init_tracing();
    let provider =
        ThemeProvider::new(registry(), Arc::new(MemoryStorage::new()), ThemeConfig::default());
    provider.load().await;

    let button = Button::new("Save");
    let card = Card::new().with_variant(CardVariant::Outlined);
    let mut scope = provider.scope();

    let root_bg = button.computed_styles(&scope.current_theme().unwrap()).background;
    {
        let mut dark = scope.push_override("dark").unwrap();
        let dark_theme = dark.current_theme().unwrap();
        assert_eq!(button.computed_styles(&dark_theme).background, dark_theme.colors.primary);
        assert_eq!(
            card.computed_styles(&dark_theme).border_color.as_deref(),
            Some(dark_theme.colors.border.as_str())
        );

        let pink = dark
            .with_override("pink", |inner| inner.current_theme().unwrap())
            .unwrap();
        assert_eq!(pink.name(), "pink");
        assert_eq!(dark.depth(), 1);
        assert_eq!(dark.theme_name().unwrap(), "dark");
    }

    assert_eq!(scope.depth(), 0);
    assert_eq!(button.computed_styles(&scope.current_theme().unwrap()).background, root_bg);
    assert_eq!(provider.theme_name(), "modern");
}

/// Test font aggregation and the system font fallback
#[tokio::test]
async fn test_fonts_fall_back_to_system() {
    init_tracing();
    let registry = registry();
    let manifest = collect_fonts(&registry);

    assert!(!manifest.is_empty());
    assert!(manifest.source_of("Urbanist-Regular").is_some());
    assert!(manifest.source_of("GloriaHallelujah").is_some());

    let status = load_fonts(&NoFonts, &manifest).await;
    assert_eq!(status, FontStatus::Unavailable);

    let styles = Text::heading("Welcome", 1).computed_styles_with(&registry.get("modern"), status);
    assert_eq!(styles.font_family, theme::SYSTEM_FONT);
}
