// SPDX-License-Identifier: MPL-2.0
//! Hex color tokens as authored in the style configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CSS hex color (`#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`).
///
/// The authored spelling is preserved so the token reads back exactly as
/// written; channels are decoded once at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    raw: String,
    rgba: [u8; 4],
}

impl HexColor {
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        let digits = raw
            .strip_prefix('#')
            .ok_or_else(|| Error::Style(format!("color '{}' must start with '#'", raw)))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::Style(format!("color '{}' has non-hex digits", raw)));
        }

        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            n => {
                return Err(Error::Style(format!(
                    "color '{}' has {} digits, expected 3, 4, 6 or 8",
                    raw, n
                )))
            }
        };

        let mut rgba = [0, 0, 0, u8::MAX];
        for (i, slot) in rgba.iter_mut().enumerate().take(expanded.len() / 2) {
            *slot = u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16)
                .map_err(|e| Error::Style(format!("color '{}': {}", raw, e)))?;
        }

        Ok(Self {
            raw: raw.to_string(),
            rgba,
        })
    }

    /// The color exactly as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.rgba[0], self.rgba[1], self.rgba[2])
    }

    #[must_use]
    pub fn alpha(&self) -> u8 {
        self.rgba[3]
    }

    /// Lowercase `#rrggbb` (or `#rrggbbaa` when not opaque).
    #[must_use]
    pub fn to_canonical(&self) -> String {
        let [r, g, b, a] = self.rgba;
        if a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.raw
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_blue_keeps_authored_spelling() {
        let color = HexColor::parse("#377BB5").expect("valid color");
        assert_eq!(color.as_str(), "#377BB5");
        assert_eq!(color.rgb(), (0x37, 0x7B, 0xB5));
        assert_eq!(color.alpha(), 255);
        assert_eq!(color.to_canonical(), "#377bb5");
    }

    #[test]
    fn shorthand_is_expanded() {
        let color = HexColor::parse("#fa0").expect("valid color");
        assert_eq!(color.rgb(), (0xff, 0xaa, 0x00));

        let translucent = HexColor::parse("#0008").expect("valid color");
        assert_eq!(translucent.alpha(), 0x88);
        assert_eq!(translucent.to_canonical(), "#00000088");
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(HexColor::parse("377BB5").is_err());
        assert!(HexColor::parse("#37").is_err());
        assert!(HexColor::parse("#GGGGGG").is_err());
        assert!(HexColor::parse("#12345").is_err());
    }

    #[test]
    fn deserializes_through_validation() {
        let ok: HexColor = serde_json::from_str("\"#377BB5\"").expect("valid json color");
        assert_eq!(ok.to_string(), "#377BB5");

        let err = serde_json::from_str::<HexColor>("\"blue\"");
        assert!(err.is_err());
    }
}
