// SPDX-License-Identifier: MPL-2.0
//! Design tokens shipped with the built-in style configuration.

/// Brand palette.
pub mod palette {
    /// Token name of the brand blue in `theme.extend.colors`.
    pub const POSTULA_BLUE_TOKEN: &str = "postula-blue";
    pub const POSTULA_BLUE: &str = "#377BB5";
}

/// Root class toggled by class-based dark mode.
pub const DARK_CLASS: &str = "dark";

/// Files scanned for utility classes, in declaration order.
pub const DEFAULT_CONTENT: &[&str] = &["./index.html", "./src/**/*.{vue,js,ts,jsx,tsx}"];
