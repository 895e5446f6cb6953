// SPDX-License-Identifier: MPL-2.0
//! Style configuration consumed by the CSS build step.
//!
//! The configuration has four recognized fields:
//!
//! - `darkMode` - how dark mode is activated ([`DarkModeStrategy`])
//! - `content` - ordered globs of files scanned for utility classes
//! - `theme.extend.colors` - color token name to hex color
//! - `plugins` - ordered plugin references
//!
//! # Examples
//!
//! ```
//! use postula::style::StyleConfig;
//!
//! let style = StyleConfig::default();
//! assert_eq!(style.color("postula-blue").map(|c| c.as_str()), Some("#377BB5"));
//! ```

pub mod color;
pub mod content;
pub mod theming;
pub mod tokens;

pub use color::HexColor;
pub use content::{ContentMatcher, ContentPattern};
pub use theming::ThemeMode;

use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// How the build tool activates dark variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// Follow `prefers-color-scheme`; no class is toggled.
    #[default]
    Media,
    /// Dark variants apply under a `.dark` ancestor.
    Class,
    /// Like `Class`, matching the element itself as well as descendants.
    Selector,
}

impl DarkModeStrategy {
    /// Class to set on the document root for `mode`, if this strategy uses one.
    #[must_use]
    pub fn root_class(self, mode: ThemeMode) -> Option<&'static str> {
        match self {
            DarkModeStrategy::Media => None,
            DarkModeStrategy::Class | DarkModeStrategy::Selector => {
                mode.is_dark().then_some(tokens::DARK_CLASS)
            }
        }
    }

    /// The CSS condition dark variants compile to.
    #[must_use]
    pub fn variant_selector(self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "@media (prefers-color-scheme: dark)",
            DarkModeStrategy::Class => ".dark &",
            DarkModeStrategy::Selector => "&:where(.dark, .dark *)",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "media",
            DarkModeStrategy::Class => "class",
            DarkModeStrategy::Selector => "selector",
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeExtension {
    #[serde(default)]
    pub colors: BTreeMap<String, HexColor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub extend: ThemeExtension,
}

/// The style configuration. Missing fields take the build tool's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    #[serde(default)]
    pub dark_mode: DarkModeStrategy,

    #[serde(default)]
    pub content: Vec<String>,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub plugins: Vec<String>,
}

impl Default for StyleConfig {
    /// The shipped Postula configuration.
    fn default() -> Self {
        let brand = HexColor::parse(tokens::palette::POSTULA_BLUE)
            .map(|color| (tokens::palette::POSTULA_BLUE_TOKEN.to_string(), color));

        Self {
            dark_mode: DarkModeStrategy::Class,
            content: tokens::DEFAULT_CONTENT.iter().map(|s| s.to_string()).collect(),
            theme: ThemeConfig {
                extend: ThemeExtension {
                    colors: brand.into_iter().collect(),
                },
            },
            plugins: Vec::new(),
        }
    }
}

impl StyleConfig {
    /// Loads a style configuration: JSON for `.json` files, TOML otherwise.
    ///
    /// Content globs are validated, so a returned config always has a
    /// working [`content_matcher`](Self::content_matcher).
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let style: StyleConfig = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content).map_err(|e| Error::Style(e.to_string()))?
        };

        style.content_matcher()?;
        tracing::debug!(path = %path.display(), colors = style.theme.extend.colors.len(), "loaded style config");
        Ok(style)
    }

    /// Uses `[style] config_path` when set, the built-in configuration otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.style.config_path {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Same as [`from_config`](Self::from_config) with an explicit path taking precedence.
    pub fn resolve(explicit: Option<PathBuf>, config: &Config) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(&path),
            None => Self::from_config(config),
        }
    }

    /// Looks up a color token in `theme.extend.colors`.
    #[must_use]
    pub fn color(&self, token: &str) -> Option<&HexColor> {
        self.theme.extend.colors.get(token)
    }

    #[must_use]
    pub fn root_class(&self, mode: ThemeMode) -> Option<&'static str> {
        self.dark_mode.root_class(mode)
    }

    #[must_use]
    pub fn variant_selector(&self) -> &'static str {
        self.dark_mode.variant_selector()
    }

    pub fn content_matcher(&self) -> Result<ContentMatcher> {
        ContentMatcher::new(&self.content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
