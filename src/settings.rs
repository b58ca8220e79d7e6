//! Persisted client preferences.
//!
//! The only stored preference is the colour theme. It is read once at start
//! up (falling back to the terminal's colour scheme) and written on every
//! change through an injected [`SettingsStore`].

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Guess the terminal's scheme from a `COLORFGBG` value ("fg;bg").
    ///
    /// Background colour 7 or 15 is light; anything else, or no value, is
    /// dark.
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match background {
            Some(7) | Some(15) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// System preference read from the environment.
    pub fn system_preference() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CatalogError::Settings(format!(
                "unknown theme '{other}', expected 'light' or 'dark'"
            ))),
        }
    }
}

/// Key-value string storage for preferences.
pub trait SettingsStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in a JSON object on disk.
///
/// The file and its parent directory are created on first write.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory (`itemcat/settings.json`).
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "itemcat").ok_or_else(|| {
            CatalogError::ConfigMissing("could not determine a config directory".to_string())
        })?;
        Ok(Self::new(dirs.config_dir().join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                CatalogError::Settings(format!("{}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// Preferences held in memory only.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| CatalogError::Settings("settings lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| CatalogError::Settings("settings lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current theme plus the store it is persisted to.
pub struct ThemeService<S: SettingsStore> {
    store: S,
    theme: Theme,
}

impl<S: SettingsStore> ThemeService<S> {
    /// Read the stored theme, or use `system` when nothing valid is stored.
    ///
    /// An unreadable store counts as nothing stored; write errors still
    /// surface from [`set`](Self::set) and [`toggle`](Self::toggle).
    pub fn init(store: S, system: Theme) -> Self {
        let stored = match store.read(THEME_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "settings unreadable, using system theme");
                None
            }
        };
        let theme = match stored.as_deref().map(Theme::from_str) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "ignoring stored theme");
                system
            }
            None => system,
        };
        tracing::debug!(%theme, "theme initialised");
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch and persist the theme.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.write(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    /// Flip between light and dark, persisting the result.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggle();
        self.set(next)?;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_preference_used_when_nothing_stored() {
        let service = ThemeService::init(MemorySettingsStore::new(), Theme::Light);
        assert_eq!(service.theme(), Theme::Light);
    }

    #[test]
    fn test_stored_theme_wins() {
        let store = MemorySettingsStore::new();
        store.write(THEME_KEY, "dark").unwrap();

        let service = ThemeService::init(store, Theme::Light);
        assert_eq!(service.theme(), Theme::Dark);
    }

    #[test]
    fn test_garbage_stored_value_falls_back() {
        let store = MemorySettingsStore::new();
        store.write(THEME_KEY, "sepia").unwrap();

        let service = ThemeService::init(store, Theme::Light);
        assert_eq!(service.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_writes_every_time() {
        let mut service = ThemeService::init(MemorySettingsStore::new(), Theme::Dark);

        assert_eq!(service.toggle().unwrap(), Theme::Light);
        assert_eq!(service.store().read(THEME_KEY).unwrap().as_deref(), Some("light"));

        assert_eq!(service.toggle().unwrap(), Theme::Dark);
        assert_eq!(service.store().read(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut service = ThemeService::init(FileSettingsStore::new(&path), Theme::Dark);
        service.set(Theme::Light).unwrap();
        assert!(path.exists());

        let reopened = ThemeService::init(FileSettingsStore::new(&path), Theme::Dark);
        assert_eq!(reopened.theme(), Theme::Light);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let err = FileSettingsStore::new(&path).read(THEME_KEY).unwrap_err();
        assert!(matches!(err, CatalogError::Settings(_)));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_system_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        for contents in ["not json", "[1, 2]", r#"{"theme": 1}"#] {
            fs::write(&path, contents).unwrap();
            let service = ThemeService::init(FileSettingsStore::new(&path), Theme::Light);
            assert_eq!(service.theme(), Theme::Light, "contents: {contents}");
        }
    }

    #[test]
    fn test_corrupt_file_still_reports_write_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let mut service = ThemeService::init(FileSettingsStore::new(&path), Theme::Dark);
        assert!(service.toggle().is_err());
        assert_eq!(service.theme(), Theme::Dark);
    }

    #[test]
    fn test_colorfgbg_detection() {
        assert_eq!(Theme::from_colorfgbg(Some("0;15")), Theme::Light);
        assert_eq!(Theme::from_colorfgbg(Some("15;0")), Theme::Dark);
        assert_eq!(Theme::from_colorfgbg(Some("12;default;7")), Theme::Light);
        assert_eq!(Theme::from_colorfgbg(None), Theme::Dark);
    }
}
