//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.yocode/config.toml`. If missing when the app starts,
//! a commented-out default is generated so users can discover all options.
//! The `[appearance]` table doubles as the settings store: theme and
//! language changes made in the app are written back to it.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::settings::{Theme, UiLanguage};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct YocodeConfig {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub startup: StartupConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppearanceConfig {
    pub theme: Option<Theme>,
    pub language: Option<UiLanguage>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct StartupConfig {
    pub welcome_dialog: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub file: Option<String>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<Theme>,
    pub language: Option<UiLanguage>,
    pub catalog: Option<PathBuf>,
    pub no_welcome: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub language: UiLanguage,
    pub welcome_dialog: bool,
    /// Custom catalog to load instead of the built-in one.
    pub catalog_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading / Saving
// ============================================================================

/// Returns `~/.yocode/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".yocode"))
}

/// Returns the path to `~/.yocode/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Write the commented-out default config to `path` unless a file is already there.
///
/// Only called when the interactive app starts, so one-shot commands leave
/// the home directory untouched.
pub fn ensure_config_file(path: &Path) {
    if path.exists() {
        return;
    }
    info!("No config file found, generating default at {}", path.display());
    generate_default_config(path);
}

/// Load config from an explicit path. A missing file reads as the default.
pub fn load_config_from(path: &Path) -> Result<YocodeConfig, ConfigError> {
    if !path.exists() {
        return Ok(YocodeConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: YocodeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Atomically write `config` to `path` (via `.tmp` + rename).
///
/// Comments of a generated default file are not preserved.
pub fn save_config(path: &Path, config: &YocodeConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents).map_err(ConfigError::Io)?;
    fs::rename(&tmp_path, path).map_err(ConfigError::Io)?;
    debug!("Config written to {}", path.display());
    Ok(())
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# YoCode Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [appearance]
# theme = "system"          # "light", "dark" or "system" (or YOCODE_THEME)
# language = "system"       # "french", "english" or "system" (or YOCODE_LANGUAGE)

# [startup]
# welcome_dialog = true     # Ask for a level when the app starts

# [catalog]
# file = "catalog.toml"     # Path relative to ~/.yocode/ (or YOCODE_CATALOG)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &YocodeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an explicit environment lookup.
pub fn resolve_with_env(
    config: &YocodeConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| env_value::<Theme>(&env, "YOCODE_THEME"))
        .or(config.appearance.theme)
        .unwrap_or_default();

    // Language: CLI → env → config → default
    let language = cli
        .language
        .or_else(|| env_value::<UiLanguage>(&env, "YOCODE_LANGUAGE"))
        .or(config.appearance.language)
        .unwrap_or_default();

    // Catalog file: CLI → env → config (relative to ~/.yocode/)
    let catalog_file = cli
        .catalog
        .clone()
        .or_else(|| env("YOCODE_CATALOG").map(PathBuf::from))
        .or_else(|| config.catalog.file.as_deref().map(config_relative));

    let welcome_dialog = !cli.no_welcome && config.startup.welcome_dialog.unwrap_or(true);

    ResolvedConfig {
        theme,
        language,
        welcome_dialog,
        catalog_file,
    }
}

/// Parse an enum-valued env var, ignoring (with a warning) values that don't parse.
fn env_value<T: ValueEnum>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match T::from_str(raw.trim(), true) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

/// Paths in the config file are relative to `~/.yocode/` unless absolute.
fn config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = YocodeConfig::default();
        assert!(config.appearance.theme.is_none());
        assert!(config.catalog.file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&YocodeConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.theme, Theme::System);
        assert_eq!(resolved.language, UiLanguage::System);
        assert!(resolved.welcome_dialog);
        assert_eq!(resolved.catalog_file, None);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = YocodeConfig {
            appearance: AppearanceConfig {
                theme: Some(Theme::Dark),
                language: Some(UiLanguage::French),
            },
            startup: StartupConfig {
                welcome_dialog: Some(false),
            },
            catalog: CatalogConfig {
                file: Some("/srv/catalog.toml".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.theme, Theme::Dark);
        assert_eq!(resolved.language, UiLanguage::French);
        assert!(!resolved.welcome_dialog);
        assert_eq!(resolved.catalog_file, Some(PathBuf::from("/srv/catalog.toml")));
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = YocodeConfig {
            appearance: AppearanceConfig {
                theme: Some(Theme::Dark),
                language: Some(UiLanguage::French),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "YOCODE_THEME" => Some("Light".to_string()),
            "YOCODE_LANGUAGE" => Some("english".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.theme, Theme::Light);
        assert_eq!(resolved.language, UiLanguage::English);
    }

    #[test]
    fn test_invalid_env_value_ignored() {
        let config = YocodeConfig {
            appearance: AppearanceConfig {
                theme: Some(Theme::Dark),
                language: None,
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "YOCODE_THEME").then(|| "purple".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.theme, Theme::Dark);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let cli = CliOverrides {
            theme: Some(Theme::Light),
            language: Some(UiLanguage::English),
            catalog: Some(PathBuf::from("mine.toml")),
            no_welcome: true,
        };
        let env = |key: &str| match key {
            "YOCODE_THEME" => Some("dark".to_string()),
            "YOCODE_CATALOG" => Some("env.toml".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&YocodeConfig::default(), &cli, env);
        assert_eq!(resolved.theme, Theme::Light);
        assert_eq!(resolved.language, UiLanguage::English);
        assert_eq!(resolved.catalog_file, Some(PathBuf::from("mine.toml")));
        assert!(!resolved.welcome_dialog);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[appearance]
theme = "light"
language = "french"

[startup]
welcome_dialog = false

[catalog]
file = "langs.toml"
"#;
        let config: YocodeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.appearance.theme, Some(Theme::Light));
        assert_eq!(config.appearance.language, Some(UiLanguage::French));
        assert_eq!(config.startup.welcome_dialog, Some(false));
        assert_eq!(config.catalog.file.as_deref(), Some("langs.toml"));

        let written = toml::to_string_pretty(&config).unwrap();
        let reparsed: YocodeConfig = toml::from_str(&written).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[appearance]
theme = "dark"
"#;
        let config: YocodeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.appearance.theme, Some(Theme::Dark));
        assert!(config.appearance.language.is_none());
        assert!(config.startup.welcome_dialog.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = YocodeConfig {
            appearance: AppearanceConfig {
                theme: Some(Theme::Light),
                language: None,
            },
            ..Default::default()
        };
        save_config(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, YocodeConfig::default());
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[appearance\ntheme = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_ensure_config_file_generates_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".yocode").join("config.toml");

        ensure_config_file(&path);
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# [appearance]"));
        assert_eq!(load_config_from(&path).unwrap(), YocodeConfig::default());

        fs::write(&path, "[startup]\nwelcome_dialog = false\n").unwrap();
        ensure_config_file(&path);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[startup]\nwelcome_dialog = false\n"
        );
    }
}
