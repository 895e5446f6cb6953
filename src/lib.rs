// SPDX-License-Identifier: MPL-2.0
//! `postula` holds the static UI resources of the Postula resume builder.
//!
//! It provides the localized UI strings (Spanish and English, via Fluent)
//! with strict and fallback lookups, and the typed style configuration
//! (dark-mode strategy, content globs, color tokens, plugins) read by the
//! CSS build step.

#![doc(html_root_url = "https://docs.rs/postula/0.2.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod paths;
pub mod style;

pub use error::{Error, Result};
pub use i18n::I18n;
pub use style::StyleConfig;
