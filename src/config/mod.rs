// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and log level
//! - `[i18n]` - Default locale and an optional directory of `.ftl` overrides
//! - `[style]` - Optional path to a style configuration file
//!
//! # Migration
//!
//! Old flat config files (`language = "es"` at top level) are migrated to the
//! sectioned format when loaded. The next save writes the new format.
//!
//! # Examples
//!
//! ```no_run
//! use postula::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("es".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use crate::style::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Warning key returned by [`load`] when the settings file is unreadable.
pub const WARNING_CONFIG_LOAD: &str = "config-load-error";

/// Top-level tables of the sectioned format.
const SECTIONS: [&str; 3] = ["general", "i18n", "style"];

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// `tracing` filter directive, e.g. "info" or "postula=debug".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            log_level: None,
        }
    }
}

/// Localization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct I18nConfig {
    /// Locale used as the first fallback for missing keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,

    /// Directory of `<locale>.ftl` files replacing the embedded catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales_dir: Option<PathBuf>,
}

/// Style configuration source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StyleSection {
    /// JSON or TOML style configuration replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub style: StyleSection,
}

impl Config {
    /// Returns the configured default locale, or [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn default_locale(&self) -> &str {
        self.i18n
            .default_locale
            .as_deref()
            .filter(|locale| !locale.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
    }

    /// Returns the configured log filter, or [`DEFAULT_LOG_LEVEL`].
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.general
            .log_level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// Legacy Config (for migration from flat format)
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LegacyConfig {
    language: Option<String>,
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    theme_mode: ThemeMode,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Config {
            general: GeneralConfig {
                language: legacy.language,
                theme_mode: legacy.theme_mode,
                log_level: None,
            },
            ..Config::default()
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with [`WARNING_CONFIG_LOAD`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(WARNING_CONFIG_LOAD.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path, migrating the legacy flat format.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let table: toml::Table = fs::read_to_string(path)?.parse()?;

    if SECTIONS.iter().any(|section| table.contains_key(*section)) {
        return Ok(table.try_into::<Config>()?);
    }

    tracing::debug!(path = %path.display(), "migrating flat settings file");
    let legacy: LegacyConfig = table.try_into()?;
    Ok(Config::from(legacy))
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
