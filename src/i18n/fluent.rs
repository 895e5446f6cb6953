// SPDX-License-Identifier: MPL-2.0
use super::catalog::Catalog;
use super::resolve_locale;
use crate::config::Config;
use crate::error::{Error, Result};
use fluent_bundle::types::FluentNumber;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .field("default_locale", &self.default_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads the catalog named by `config` and picks the starting locale.
    pub fn new(cli_lang: Option<&str>, config: &Config) -> Result<Self> {
        let catalog = Catalog::load(&config.i18n)?;
        Self::from_catalog(&catalog, cli_lang, config)
    }

    pub fn from_catalog(catalog: &Catalog, cli_lang: Option<&str>, config: &Config) -> Result<Self> {
        let bundles = catalog.bundles()?;
        let available_locales: Vec<LanguageIdentifier> = catalog.locales().cloned().collect();

        let default_locale = catalog.default_locale(config.default_locale())?;
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        tracing::info!(current = %current_locale, default = %default_locale, "i18n ready");

        Ok(Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        })
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn default_locale(&self) -> &LanguageIdentifier {
        &self.default_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    #[must_use]
    pub fn supports(&self, locale: &str) -> bool {
        parse_locale(locale).is_some_and(|l| self.bundles.contains_key(&l))
    }

    /// Switches the current locale. Unsupported locales are ignored and
    /// `false` is returned.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            tracing::warn!(locale = %locale, "ignoring unsupported locale");
            false
        }
    }

    /// Strict lookup: no fallback, a lookup-miss is an error.
    pub fn translate(&self, locale: &str, key: &str) -> Result<String> {
        let locale = parse_locale(locale).ok_or_else(|| Error::missing(locale, key))?;
        self.format(&locale, key, None)
    }

    /// Strict lookup with Fluent arguments.
    pub fn translate_with_args(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Result<String> {
        let locale = parse_locale(locale).ok_or_else(|| Error::missing(locale, key))?;
        let fluent_args = build_args(args);
        self.format(&locale, key, Some(&fluent_args))
    }

    /// Looks `key` up in the current locale, then the default locale, and
    /// finally returns the key itself.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let fluent_args = build_args(args);
        self.lookup(key, Some(&fluent_args))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> String {
        match self.format(&self.current_locale, key, args) {
            Ok(value) => return value,
            Err(err) => tracing::warn!(error = %err, "falling back to default locale"),
        }

        if self.default_locale != self.current_locale {
            match self.format(&self.default_locale, key, args) {
                Ok(value) => return value,
                Err(err) => tracing::warn!(error = %err, "falling back to raw key"),
            }
        }

        key.to_string()
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str, args: Option<&FluentArgs>) -> Result<String> {
        let bundle = self
            .bundles
            .get(locale)
            .ok_or_else(|| Error::missing(locale, key))?;
        let pattern = bundle
            .get_message(key)
            .and_then(|msg| msg.value())
            .ok_or_else(|| Error::missing(locale, key))?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Ok(value.into_owned())
        } else {
            Err(Error::Format {
                key: key.to_string(),
                message: errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            })
        }
    }
}

fn parse_locale(raw: &str) -> Option<LanguageIdentifier> {
    raw.trim().parse::<LanguageIdentifier>().ok()
}

/// Values that format back to the same text are passed as numbers so plural
/// selectors apply; anything else (`007`, `+3`, `1e3`) stays a string.
fn build_args<'a>(args: &[(&'a str, &'a str)]) -> FluentArgs<'a> {
    let mut fluent_args = FluentArgs::new();
    for &(name, value) in args {
        match value.parse::<FluentNumber>() {
            Ok(number) if number.value.is_finite() && number.as_string() == value => {
                fluent_args.set(name, FluentValue::from(number))
            }
            _ => fluent_args.set(name, FluentValue::from(value)),
        }
    }
    fluent_args
}
