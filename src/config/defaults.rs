// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Locale**: default and shipped locales
//! - **Logging**: default log filter
//! - **Files**: settings file name

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when the requested one is unsupported or lacks a key.
pub const DEFAULT_LOCALE: &str = "en";

/// Locales shipped in the embedded catalog.
pub const SHIPPED_LOCALES: &[&str] = &["en", "es"];

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `tracing` filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ==========================================================================
// File Names
// ==========================================================================

/// User settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LOCALE.is_empty());
    assert!(SHIPPED_LOCALES.len() >= 2);
    assert!(!DEFAULT_LOG_LEVEL.is_empty());
};
