//! # Settings Store
//!
//! Theme and UI language are the only values the app persists. They are
//! read once at startup and written back whenever the user changes them.
//!
//! `FileSettingsStore` keeps them in the `[appearance]` table of
//! `~/.yocode/config.toml`; `MemorySettingsStore` is used where nothing
//! should touch the disk.

use clap::ValueEnum;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::config::{self, ConfigError, YocodeConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UiLanguage {
    French,
    English,
    #[default]
    System,
}

impl UiLanguage {
    pub const ALL: [UiLanguage; 3] = [UiLanguage::French, UiLanguage::English, UiLanguage::System];
}

/// Key-value persistence for appearance settings.
pub trait SettingsStore {
    fn theme(&self) -> Theme;
    fn language(&self) -> UiLanguage;
    fn set_theme(&mut self, theme: Theme) -> Result<(), ConfigError>;
    fn set_language(&mut self, language: UiLanguage) -> Result<(), ConfigError>;
}

/// Settings stored in the config file. Other tables of the file are kept as loaded.
pub struct FileSettingsStore {
    path: Option<PathBuf>,
    config: YocodeConfig,
}

impl FileSettingsStore {
    /// Open the store for `path` (usually [`config::config_path`]).
    ///
    /// A file that cannot be read or parsed is never written back: the store
    /// falls back to defaults, keeps changes for this run only, and hands
    /// the error to the caller for reporting.
    pub fn open(path: Option<PathBuf>) -> (Self, Option<ConfigError>) {
        let Some(path) = path else {
            warn!("Could not determine home directory, settings won't be saved");
            return (Self::detached(YocodeConfig::default()), None);
        };
        match config::load_config_from(&path) {
            Ok(config) => (
                Self {
                    path: Some(path),
                    config,
                },
                None,
            ),
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                (Self::detached(YocodeConfig::default()), Some(e))
            }
        }
    }

    /// Store backed by an explicit file, loading its current contents.
    pub fn at(path: PathBuf) -> Result<Self, ConfigError> {
        let config = config::load_config_from(&path)?;
        Ok(Self {
            path: Some(path),
            config,
        })
    }

    /// Store that never touches the disk.
    pub fn detached(config: YocodeConfig) -> Self {
        Self { path: None, config }
    }

    pub fn config(&self) -> &YocodeConfig {
        &self.config
    }

    /// File the store writes to, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn save(&self) -> Result<(), ConfigError> {
        match &self.path {
            Some(path) => config::save_config(path, &self.config),
            // Detached: keep the value for this run only
            None => Ok(()),
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn theme(&self) -> Theme {
        self.config.appearance.theme.unwrap_or_default()
    }

    fn language(&self) -> UiLanguage {
        self.config.appearance.language.unwrap_or_default()
    }

    fn set_theme(&mut self, theme: Theme) -> Result<(), ConfigError> {
        self.config.appearance.theme = Some(theme);
        self.save()?;
        info!("Theme saved: {:?}", theme);
        Ok(())
    }

    fn set_language(&mut self, language: UiLanguage) -> Result<(), ConfigError> {
        self.config.appearance.language = Some(language);
        self.save()?;
        info!("Language saved: {:?}", language);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    pub theme: Theme,
    pub language: UiLanguage,
}

impl SettingsStore for MemorySettingsStore {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn language(&self) -> UiLanguage {
        self.language
    }

    fn set_theme(&mut self, theme: Theme) -> Result<(), ConfigError> {
        self.theme = theme;
        Ok(())
    }

    fn set_language(&mut self, language: UiLanguage) -> Result<(), ConfigError> {
        self.language = language;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CatalogConfig, StartupConfig, load_config_from};

    #[test]
    fn test_file_store_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::at(dir.path().join("config.toml")).unwrap();
        assert_eq!(store.theme(), Theme::System);
        assert_eq!(store.language(), UiLanguage::System);
    }

    #[test]
    fn test_file_store_persists_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = FileSettingsStore::at(path.clone()).unwrap();
        store.set_theme(Theme::Dark).unwrap();
        store.set_language(UiLanguage::French).unwrap();

        let reopened = FileSettingsStore::at(path).unwrap();
        assert_eq!(reopened.theme(), Theme::Dark);
        assert_eq!(reopened.language(), UiLanguage::French);
    }

    #[test]
    fn test_file_store_keeps_other_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\nfile = \"langs.toml\"\n").unwrap();

        let mut store = FileSettingsStore::at(path.clone()).unwrap();
        store.set_theme(Theme::Light).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(
            config.catalog,
            CatalogConfig {
                file: Some("langs.toml".to_string())
            }
        );
        assert_eq!(config.appearance.theme, Some(Theme::Light));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemorySettingsStore::default();
        store.set_theme(Theme::Light).unwrap();
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.language(), UiLanguage::System);
    }

    #[test]
    fn test_value_enum_parsing() {
        assert_eq!(Theme::from_str("dark", true), Ok(Theme::Dark));
        assert_eq!(UiLanguage::from_str("French", true), Ok(UiLanguage::French));
        assert!(Theme::from_str("sepia", true).is_err());
    }

    #[test]
    fn test_open_malformed_file_is_never_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let original = concat!(
            "[catalog]\nfile = \"mine.toml\"\n",
            "[startup]\nwelcome_dialog = false\n",
            "[appearance\n",
        );
        std::fs::write(&path, original).unwrap();

        let (mut store, error) = FileSettingsStore::open(Some(path.clone()));
        assert!(matches!(error, Some(ConfigError::Parse(_))));
        assert_eq!(store.path(), None);

        store.set_theme(Theme::Light).unwrap();
        store.set_language(UiLanguage::English).unwrap();
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_open_valid_file_writes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[startup]\nwelcome_dialog = false\n").unwrap();

        let (mut store, error) = FileSettingsStore::open(Some(path.clone()));
        assert!(error.is_none());
        assert_eq!(store.path(), Some(path.as_path()));

        store.set_theme(Theme::Dark).unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.appearance.theme, Some(Theme::Dark));
        assert_eq!(
            config.startup,
            StartupConfig {
                welcome_dialog: Some(false)
            }
        );
    }

    #[test]
    fn test_open_without_home_is_detached() {
        let (store, error) = FileSettingsStore::open(None);
        assert!(error.is_none());
        assert_eq!(store.path(), None);
        assert_eq!(store.config(), &YocodeConfig::default());
    }
}
