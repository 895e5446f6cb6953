// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The locale is not supported, or the key is absent for that locale.
    #[error("Missing translation: '{key}' in locale '{locale}'")]
    MissingTranslation { locale: String, key: String },

    /// The message exists but Fluent could not resolve it (e.g. missing argument).
    #[error("Format Error: '{key}': {message}")]
    Format { key: String, message: String },

    /// A locale source failed to parse or to load into a bundle.
    #[error("Catalog Error ({locale}): {message}")]
    Catalog { locale: String, message: String },

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Style Error: {0}")]
    Style(String),
}

impl Error {
    pub fn missing(locale: impl ToString, key: impl Into<String>) -> Self {
        Error::MissingTranslation {
            locale: locale.to_string(),
            key: key.into(),
        }
    }

    /// Returns true if this error is a lookup-miss.
    #[must_use]
    pub fn is_missing_translation(&self) -> bool {
        matches!(self, Error::MissingTranslation { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Style(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Style(err.to_string())
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
