use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::app::domain::editor::{EditorSession, PageChrome};
use crate::app::domain::settings::AppSettings;
use crate::app::domain::theme::ThemePreference;
use crate::app::infrastructure::error::{AppError, Result};

/// Key under which the color scheme is stored.
pub const THEME_KEY: &str = "darktheme";

/// Small persistent string map that survives restarts, like browser cookies.
pub trait DurableKeyValueStore {
    /// False when no storage location is available at all.
    fn enabled(&self) -> bool;
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Key-value entries kept in one JSON object on disk. Entries never expire.
pub struct JsonFileStore {
    path: Option<PathBuf>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// `<config dir>/pastepad/preferences.json`, or a disabled store when the
    /// platform has no config directory.
    pub fn default_location() -> Self {
        Self {
            path: dirs::config_dir().map(|_| AppSettings::config_dir().join("preferences.json")),
        }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    fn read_entries(&self) -> BTreeMap<String, String> {
        let Some(path) = &self.path else {
            return BTreeMap::new();
        };
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable preferences file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        }
    }
}

impl DurableKeyValueStore for JsonFileStore {
    fn enabled(&self) -> bool {
        self.path.is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| AppError::Settings("no preferences location available".to_string()))?;

        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Reads the stored color scheme once and writes it back on every toggle.
pub struct ThemePersistence<S: DurableKeyValueStore> {
    store: S,
    current: ThemePreference,
}

impl<S: DurableKeyValueStore> ThemePersistence<S> {
    /// Create and immediately load the stored preference.
    pub fn new(store: S) -> Self {
        let mut persistence = Self {
            store,
            current: ThemePreference::Dark,
        };
        persistence.current = persistence.load();
        persistence
    }

    /// Only the literal "no" selects the light theme.
    pub fn load(&self) -> ThemePreference {
        if !self.store.enabled() {
            return ThemePreference::Dark;
        }
        match self.store.get(THEME_KEY).as_deref() {
            Some("no") => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    pub fn save(&mut self, theme: ThemePreference) -> Result<()> {
        let value = if theme.is_dark() { "yes" } else { "no" };
        self.store.set(THEME_KEY, value)
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip the theme, persist it and repaint. A failed write only loses
    /// durability; the new theme is applied regardless.
    pub fn toggle(&mut self, editor: &mut dyn EditorSession, page: &mut dyn PageChrome) -> ThemePreference {
        self.current = self.current.toggled();
        if let Err(e) = self.save(self.current) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        editor.set_theme(self.current);
        page.set_theme(self.current);
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{MemoryStore, RecordingEditor, RecordingPage};

    fn store_with(value: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.entries.insert(THEME_KEY.to_string(), value.to_string());
        store
    }

    #[test]
    fn test_load_defaults_to_dark() {
        let themes = ThemePersistence::new(MemoryStore::default());
        assert_eq!(themes.load(), ThemePreference::Dark);
        assert_eq!(themes.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_load_no_is_light() {
        let themes = ThemePersistence::new(store_with("no"));
        assert_eq!(themes.current(), ThemePreference::Light);
    }

    #[test]
    fn test_load_unsupported_values_are_dark() {
        for value in ["yes", "No", "false", "", "light"] {
            let themes = ThemePersistence::new(store_with(value));
            assert_eq!(themes.load(), ThemePreference::Dark, "value {:?}", value);
        }
    }

    #[test]
    fn test_disabled_storage_is_dark() {
        let mut store = store_with("no");
        store.disabled = true;
        assert_eq!(ThemePersistence::new(store).current(), ThemePreference::Dark);
    }

    #[test]
    fn test_save_writes_yes_and_no() {
        let mut themes = ThemePersistence::new(MemoryStore::default());
        themes.save(ThemePreference::Light).unwrap();
        assert_eq!(themes.store().entries[THEME_KEY], "no");
        themes.save(ThemePreference::Dark).unwrap();
        assert_eq!(themes.store().entries[THEME_KEY], "yes");
    }

    #[test]
    fn test_toggle_persists_and_repaints() {
        let mut themes = ThemePersistence::new(MemoryStore::default());
        let mut editor = RecordingEditor::default();
        let mut page = RecordingPage::default();

        assert_eq!(themes.toggle(&mut editor, &mut page), ThemePreference::Light);
        assert_eq!(editor.theme(), ThemePreference::Light);
        assert_eq!(page.theme, Some(ThemePreference::Light));
        assert_eq!(themes.store().entries[THEME_KEY], "no");
        assert_eq!(themes.load(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut themes = ThemePersistence::new(store_with("yes"));
        let mut editor = RecordingEditor::default();
        let mut page = RecordingPage::default();

        themes.toggle(&mut editor, &mut page);
        themes.toggle(&mut editor, &mut page);

        assert_eq!(themes.current(), ThemePreference::Dark);
        assert_eq!(editor.theme_history, vec![ThemePreference::Light, ThemePreference::Dark]);
        assert_eq!(page.theme, Some(ThemePreference::Dark));
        assert_eq!(themes.store().entries[THEME_KEY], "yes");
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let mut store = MemoryStore::default();
        store.fail_writes = true;
        let mut themes = ThemePersistence::new(store);
        let mut editor = RecordingEditor::default();
        let mut page = RecordingPage::default();

        assert_eq!(themes.toggle(&mut editor, &mut page), ThemePreference::Light);
        assert_eq!(editor.theme, ThemePreference::Light);
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pastepad").join("preferences.json");

        let mut store = JsonFileStore::new(path.clone());
        assert!(store.enabled());
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "no").unwrap();
        store.set("other", "1").unwrap();

        let reopened = JsonFileStore::new(path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("no"));
        assert_eq!(reopened.get("other").as_deref(), Some("1"));
    }

    #[test]
    fn test_json_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "[1, 2").unwrap();

        let themes = ThemePersistence::new(JsonFileStore::new(path));
        assert_eq!(themes.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_disabled_json_store_rejects_writes() {
        let mut store = JsonFileStore::disabled();
        assert!(!store.enabled());
        assert!(store.set(THEME_KEY, "no").is_err());
    }
}
