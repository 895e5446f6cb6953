// SPDX-License-Identifier: MPL-2.0
//! Key-set checks across locales.
//!
//! Every locale must define exactly the keys of the reference locale, and
//! the current table must still cover every key of the legacy table.

use super::catalog::Catalog;
use super::keys::LEGACY_KEYS;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Keys one locale lacks, or has in excess, relative to the reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleDiff {
    pub missing: BTreeSet<String>,
    pub extra: BTreeSet<String>,
}

impl LocaleDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityReport {
    reference: String,
    reference_keys: usize,
    diffs: BTreeMap<String, LocaleDiff>,
}

impl ParityReport {
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// True when every locale has exactly the reference key set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.diffs.values().all(LocaleDiff::is_empty)
    }

    /// Differences for `locale`; `None` for the reference and unknown locales.
    #[must_use]
    pub fn diff(&self, locale: &str) -> Option<&LocaleDiff> {
        self.diffs.get(locale)
    }

    pub fn diffs(&self) -> impl Iterator<Item = (&str, &LocaleDiff)> {
        self.diffs.iter().map(|(locale, diff)| (locale.as_str(), diff))
    }
}

impl fmt::Display for ParityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "reference: {} ({} keys)", self.reference, self.reference_keys)?;
        for (locale, diff) in &self.diffs {
            if diff.is_empty() {
                writeln!(f, "{}: ok", locale)?;
                continue;
            }
            for key in &diff.missing {
                writeln!(f, "{}: missing '{}'", locale, key)?;
            }
            for key in &diff.extra {
                writeln!(f, "{}: extra '{}'", locale, key)?;
            }
        }
        Ok(())
    }
}

/// Compares every locale's key set against `reference`.
pub fn check_parity(catalog: &Catalog, reference: &LanguageIdentifier) -> Result<ParityReport> {
    let reference_keys = catalog.keys(reference).ok_or_else(|| Error::Catalog {
        locale: reference.to_string(),
        message: "reference locale is not in the catalog".to_string(),
    })?;

    let diffs = catalog
        .sources()
        .filter(|source| source.locale() != reference)
        .map(|source| {
            let diff = LocaleDiff {
                missing: reference_keys.difference(source.keys()).cloned().collect(),
                extra: source.keys().difference(reference_keys).cloned().collect(),
            };
            if !diff.is_empty() {
                tracing::warn!(
                    locale = %source.locale(),
                    missing = diff.missing.len(),
                    extra = diff.extra.len(),
                    "locale key set differs from reference"
                );
            }
            (source.locale().to_string(), diff)
        })
        .collect();

    Ok(ParityReport {
        reference: reference.to_string(),
        reference_keys: reference_keys.len(),
        diffs,
    })
}

/// Legacy keys absent per locale. Locales covering all of them are omitted.
#[must_use]
pub fn missing_legacy_keys(catalog: &Catalog) -> BTreeMap<String, Vec<&'static str>> {
    catalog
        .sources()
        .filter_map(|source| {
            let missing: Vec<&'static str> = LEGACY_KEYS
                .iter()
                .copied()
                .filter(|key| !source.contains_key(key))
                .collect();
            (!missing.is_empty()).then(|| (source.locale().to_string(), missing))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langid(code: &str) -> LanguageIdentifier {
        code.parse().expect("valid locale")
    }

    fn catalog(entries: &[(&str, &str)]) -> Catalog {
        let mut catalog = Catalog::default();
        for (code, source) in entries {
            catalog
                .insert(langid(code), source.to_string())
                .expect("valid source");
        }
        catalog
    }

    #[test]
    fn shipped_catalog_is_symmetric() {
        let catalog = Catalog::embedded().expect("embedded catalog loads");
        let report = check_parity(&catalog, &langid("en")).expect("en is present");
        assert!(report.is_complete(), "{}", report);

        let reverse = check_parity(&catalog, &langid("es")).expect("es is present");
        assert!(reverse.is_complete(), "{}", reverse);
    }

    #[test]
    fn shipped_catalog_supersedes_legacy_table() {
        let catalog = Catalog::embedded().expect("embedded catalog loads");
        assert!(missing_legacy_keys(&catalog).is_empty());
    }

    #[test]
    fn reports_missing_and_extra_keys() {
        let catalog = catalog(&[
            ("en", "save = Save\nback = Back\n"),
            ("es", "save = Guardar\nvolver = Volver\n"),
        ]);
        let report = check_parity(&catalog, &langid("en")).expect("en is present");

        assert!(!report.is_complete());
        let diff = report.diff("es").expect("es diff present");
        assert_eq!(diff.missing.iter().collect::<Vec<_>>(), vec!["back"]);
        assert_eq!(diff.extra.iter().collect::<Vec<_>>(), vec!["volver"]);
        assert!(report.diff("en").is_none());

        let rendered = report.to_string();
        assert!(rendered.contains("es: missing 'back'"));
        assert!(rendered.contains("es: extra 'volver'"));
    }

    #[test]
    fn unknown_reference_is_an_error() {
        let catalog = catalog(&[("en", "save = Save\n")]);
        assert!(matches!(
            check_parity(&catalog, &langid("de")),
            Err(Error::Catalog { .. })
        ));
    }

    #[test]
    fn minimal_table_reports_legacy_gaps() {
        let catalog = catalog(&[("es", "dashboardTitle = Mis Curriculums\n")]);
        let missing = missing_legacy_keys(&catalog);
        let es = missing.get("es").expect("es has gaps");
        assert_eq!(es.len(), LEGACY_KEYS.len() - 1);
        assert!(!es.contains(&"dashboardTitle"));
    }
}
