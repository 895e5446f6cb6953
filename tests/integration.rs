// SPDX-License-Identifier: MPL-2.0
use postula::config::{self, Config, GeneralConfig, I18nConfig, StyleSection};
use postula::i18n::parity::check_parity;
use postula::i18n::{Catalog, I18n};
use postula::style::ThemeMode;
use postula::Error;
use std::fs;
use tempfile::tempdir;

fn config_with_language(language: &str) -> Config {
    Config {
        general: GeneralConfig {
            language: Some(language.to_string()),
            theme_mode: ThemeMode::System,
            log_level: None,
        },
        i18n: I18nConfig::default(),
        style: StyleSection::default(),
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    config::save_to_path(&config_with_language("en"), &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded).expect("i18n builds");
    assert_eq!(i18n_en.current_locale().to_string(), "en");
    assert_eq!(i18n_en.tr("dashboardTitle"), "My Resumes");

    config::save_to_path(&config_with_language("es"), &temp_config_file_path)
        .expect("Failed to write spanish config file");
    let loaded = config::load_from_path(&temp_config_file_path).expect("Failed to load config");
    let i18n_es = I18n::new(None, &loaded).expect("i18n builds");
    assert_eq!(i18n_es.current_locale().to_string(), "es");
    assert_eq!(i18n_es.tr("dashboardTitle"), "Mis Curriculums");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config() {
    let i18n = I18n::new(Some("en"), &config_with_language("es")).expect("i18n builds");
    assert_eq!(i18n.current_locale().to_string(), "en");
}

#[test]
fn every_default_locale_key_translates_in_every_locale() {
    let catalog = Catalog::embedded().expect("embedded catalog loads");
    let i18n = I18n::from_catalog(&catalog, Some("en"), &Config::default()).expect("i18n builds");
    let reference = i18n.default_locale().clone();
    let keys = catalog.keys(&reference).expect("default locale present");

    for locale in catalog.locales() {
        for key in keys {
            match i18n.translate(&locale.to_string(), key) {
                Ok(value) => assert!(!value.is_empty(), "{}/{} is empty", locale, key),
                // Messages with placeholders need arguments; they still exist.
                Err(Error::Format { .. }) => {}
                Err(err) => panic!("{}/{}: {}", locale, key, err),
            }
        }
    }
}

#[test]
fn spanish_and_english_are_distinct_where_expected() {
    let i18n = I18n::new(Some("en"), &Config::default()).expect("i18n builds");
    for key in ["dashboardTitle", "createNew", "save", "cv_experienceTitle", "skillsDB"] {
        assert_ne!(
            i18n.translate("en", key).unwrap(),
            i18n.translate("es", key).unwrap(),
            "{} should be translated",
            key
        );
    }
}

#[test]
fn locales_dir_override_replaces_embedded_catalog() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("en.ftl"), "dashboardTitle = My CVs\nsave = Save\n")
        .expect("write en");
    fs::write(dir.path().join("es.ftl"), "dashboardTitle = Mis CVs\n").expect("write es");

    let mut config = config_with_language("es");
    config.i18n.locales_dir = Some(dir.path().to_path_buf());

    let i18n = I18n::new(None, &config).expect("i18n builds");
    assert_eq!(i18n.tr("dashboardTitle"), "Mis CVs");
    // Missing in es, served from the default locale.
    assert_eq!(i18n.tr("save"), "Save");
    assert_eq!(
        i18n.translate("es", "save"),
        Err(Error::missing("es", "save"))
    );

    let catalog = Catalog::load(&config.i18n).expect("catalog loads");
    let report = check_parity(&catalog, &"en".parse().unwrap()).expect("en present");
    assert!(!report.is_complete());
}

#[test]
fn broken_locale_file_surfaces_catalog_error() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("en.ftl"), "save = Save\n{ broken\n").expect("write en");

    let mut config = Config::default();
    config.i18n.locales_dir = Some(dir.path().to_path_buf());

    match I18n::new(None, &config) {
        Err(Error::Catalog { locale, .. }) => assert_eq!(locale, "en"),
        other => panic!("expected Catalog error, got {:?}", other),
    }
}
