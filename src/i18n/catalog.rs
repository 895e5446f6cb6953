// SPDX-License-Identifier: MPL-2.0
//! Locale sources: one Fluent file per locale, embedded or read from disk.

use crate::config::{I18nConfig, SHIPPED_LOCALES};
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FTL_SUFFIX: &str = ".ftl";

/// One locale's Fluent source and the message keys it defines.
#[derive(Debug, Clone)]
pub struct LocaleSource {
    locale: LanguageIdentifier,
    source: String,
    keys: BTreeSet<String>,
}

impl LocaleSource {
    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    #[must_use]
    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

/// All locale sources, ordered by locale code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: BTreeMap<String, LocaleSource>,
}

impl Catalog {
    /// Loads the `.ftl` files compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut catalog = Self::default();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8(content.data.into_owned()).map_err(|e| Error::Catalog {
                    locale: locale.to_string(),
                    message: e.to_string(),
                })?;
                catalog.insert(locale, source)?;
            }
        }
        if let Some(missing) = SHIPPED_LOCALES
            .iter()
            .find(|code| !catalog.locales.contains_key(**code))
        {
            return Err(Error::Catalog {
                locale: missing.to_string(),
                message: "shipped locale is not embedded".to_string(),
            });
        }
        tracing::debug!(locales = catalog.len(), "loaded embedded catalog");
        Ok(catalog)
    }

    /// Loads every `<locale>.ftl` file directly inside `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::default();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(locale) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(locale_from_filename)
            else {
                continue;
            };
            catalog.insert(locale, fs::read_to_string(&path)?)?;
        }
        tracing::debug!(dir = %dir.display(), locales = catalog.len(), "loaded catalog from directory");
        Ok(catalog)
    }

    /// Uses `locales_dir` when configured, the embedded catalog otherwise.
    pub fn load(config: &I18nConfig) -> Result<Self> {
        match &config.locales_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }

    /// Adds or replaces a locale. The source must parse cleanly and define
    /// each message key once.
    pub fn insert(&mut self, locale: LanguageIdentifier, source: String) -> Result<()> {
        let keys = message_keys(&locale, &source)?;
        self.locales.insert(
            locale.to_string(),
            LocaleSource {
                locale,
                source,
                keys,
            },
        );
        Ok(())
    }

    pub fn locales(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.locales.values().map(LocaleSource::locale)
    }

    pub fn sources(&self) -> impl Iterator<Item = &LocaleSource> {
        self.locales.values()
    }

    #[must_use]
    pub fn get(&self, locale: &LanguageIdentifier) -> Option<&LocaleSource> {
        self.locales.get(&locale.to_string())
    }

    #[must_use]
    pub fn keys(&self, locale: &LanguageIdentifier) -> Option<&BTreeSet<String>> {
        self.get(locale).map(LocaleSource::keys)
    }

    #[must_use]
    pub fn contains(&self, locale: &LanguageIdentifier) -> bool {
        self.get(locale).is_some()
    }

    /// Negotiates the configured default locale against this catalog.
    /// The default must resolve, since every fallback lookup ends there.
    pub fn default_locale(&self, requested: &str) -> Result<LanguageIdentifier> {
        let available: Vec<LanguageIdentifier> = self.locales().cloned().collect();
        super::negotiate(requested, &available).ok_or_else(|| Error::Catalog {
            locale: requested.to_string(),
            message: "default locale is not in the catalog".to_string(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Builds one Fluent bundle per locale.
    ///
    /// Unicode isolation marks are disabled: the strings land in plain UI
    /// text and CLI output.
    pub fn bundles(&self) -> Result<HashMap<LanguageIdentifier, FluentBundle<FluentResource>>> {
        let mut bundles = HashMap::with_capacity(self.locales.len());
        for entry in self.locales.values() {
            let catalog_error = |message: String| Error::Catalog {
                locale: entry.locale.to_string(),
                message,
            };

            let resource = FluentResource::try_new(entry.source.clone())
                .map_err(|(_, errors)| catalog_error(join_errors(&errors)))?;
            let mut bundle = FluentBundle::new(vec![entry.locale.clone()]);
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| catalog_error(join_errors(&errors)))?;
            bundles.insert(entry.locale.clone(), bundle);
        }
        Ok(bundles)
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    let stem = filename.strip_suffix(FTL_SUFFIX)?;
    match stem.parse::<LanguageIdentifier>() {
        Ok(locale) => Some(locale),
        Err(err) => {
            tracing::warn!(file = filename, error = %err, "skipping file with invalid locale name");
            None
        }
    }
}

fn message_keys(locale: &LanguageIdentifier, source: &str) -> Result<BTreeSet<String>> {
    let resource = fluent_syntax::parser::parse(source).map_err(|(_, errors)| Error::Catalog {
        locale: locale.to_string(),
        message: join_errors(&errors),
    })?;

    let mut seen = BTreeSet::new();
    let mut keys = BTreeSet::new();
    for entry in resource.body {
        if let ast::Entry::Message(message) = entry {
            let key = message.id.name;
            if !seen.insert(key) {
                return Err(Error::Catalog {
                    locale: locale.to_string(),
                    message: format!("duplicate key '{}'", key),
                });
            }
            // Attribute-only messages have nothing for a lookup to return.
            if message.value.is_some() {
                keys.insert(key.to_string());
            }
        }
    }
    Ok(keys)
}

fn join_errors<E: std::fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
