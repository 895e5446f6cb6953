// SPDX-License-Identifier: MPL-2.0
//! `tracing` subscriber setup for the CLI.
//!
//! `RUST_LOG` takes precedence over the configured level.

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    default_level: String,
    ansi: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_level: crate::config::DEFAULT_LOG_LEVEL.to_string(),
            ansi: true,
        }
    }

    #[must_use]
    pub fn default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    #[must_use]
    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Builds the filter without installing anything.
    pub fn filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.default_level)
                .map_err(|e| Error::Config(format!("invalid log level '{}': {}", self.default_level, e))),
        }
    }

    /// Installs the global subscriber. Logs go to stderr so command output
    /// on stdout stays clean.
    pub fn init(self) -> Result<()> {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(self.ansi)
            .with_target(false);

        registry()
            .with(self.filter()?)
            .with(layer)
            .try_init()
            .map_err(|e| Error::Config(format!("logger already initialized: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_level() {
        std::env::remove_var(EnvFilter::DEFAULT_ENV);
        let result = LoggerBuilder::new().default_level("postula=verbose").filter();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn accepts_target_directives() {
        std::env::remove_var(EnvFilter::DEFAULT_ENV);
        assert!(LoggerBuilder::new().default_level("postula=debug,warn").filter().is_ok());
    }
}
