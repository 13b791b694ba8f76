// SPDX-License-Identifier: MIT
//
// 24-bit sRGB colors and the `#rrggbb` hex notation.
//
// Hex output is always lowercase, zero-padded, seven characters. Hex input
// is stricter than what CSS accepts: exactly six digits, optional `#`, any
// case. Shorthand (`#abc`) and alpha (`#rrggbbaa`) are rejected.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ColorError;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .unwrap_or_else(|e| unreachable!("hex pattern is a literal: {e}"))
});

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` / `rrggbb` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for anything else.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s)
    }

    /// Format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Channels scaled to 0.0–1.0 (`value / 255`).
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Build from channels in 0.0–1.0, rounding to the nearest 8-bit value.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b } = *self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a six-digit hex color.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when `s` does not match
/// `#?[0-9a-fA-F]{6}`.
pub fn parse_hex(s: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidColorFormat(s.to_string());
    let caps = HEX_RE.captures(s).ok_or_else(invalid)?;
    let channel = |i: usize| -> Result<u8, ColorError> {
        let digits = caps.get(i).ok_or_else(invalid)?.as_str();
        u8::from_str_radix(digits, 16).map_err(|_| invalid())
    };
    Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half up.
#[inline]
pub(crate) fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parse_with_hash() {
        assert_eq!(parse_hex("#ff8000"), Ok(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(parse_hex("00ff00"), Ok(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_hex("#C86432"), parse_hex("#c86432"));
        assert_eq!(parse_hex("#AbCdEf"), Ok(Rgb::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "#", "xyz", "#12345", "#1234567", "#f80", "#ff000080", "#gg0000", " #ffffff", "not-a-color"] {
            assert_eq!(
                parse_hex(bad),
                Err(ColorError::InvalidColorFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_str_matches_parse_hex() {
        let rgb: Rgb = "#2f27ce".parse().unwrap();
        assert_eq!(rgb, Rgb::new(0x2f, 0x27, 0xce));
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(1, 10, 255).to_hex(), "#010aff");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn display_matches_to_hex() {
        let c = Rgb::new(0xde, 0xdc, 0xff);
        assert_eq!(c.to_string(), c.to_hex());
    }

    #[test]
    fn hex_roundtrip() {
        let original = "#c86432";
        assert_eq!(parse_hex(original).unwrap().to_hex(), original);
    }

    // ── Unit scaling ─────────────────────────────────────────────────────

    #[test]
    fn unit_scaling_bounds() {
        assert_eq!(Rgb::BLACK.to_unit(), (0.0, 0.0, 0.0));
        assert_eq!(Rgb::WHITE.to_unit(), (1.0, 1.0, 1.0));
    }

    #[test]
    fn from_unit_rounds_and_clamps() {
        assert_eq!(Rgb::from_unit(0.5, -0.2, 1.4), Rgb::new(128, 0, 255));
    }
}
