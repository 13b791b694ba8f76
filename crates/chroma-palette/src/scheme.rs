//! Color-wheel harmony rules: pure hue derivation.
//!
//! Each scheme maps a `base_hue` to exactly four hues via fixed offsets.
//! The positions have fixed meaning for the palette synthesizer:
//! 0 → primary, 1 → accent, 2 → secondary, 3 → reserved.

use std::fmt;
use std::str::FromStr;

use chroma_color::normalize_hue;

use crate::error::SchemeError;

/// The harmony rule used to derive related hues from a base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// One hue throughout.
    Monochromatic,
    /// Neighbors at ±30 degrees.
    Analogous,
    /// The opposite side of the wheel.
    Complementary,
    /// Three hues 120 degrees apart.
    Triadic,
    /// The two neighbors of the complement (±30 around +180).
    SplitComplementary,
    /// Split complement plus an analogous neighbor.
    Compound,
}

impl ColorScheme {
    /// All schemes, in the order random selection indexes them.
    pub const ALL: [Self; 6] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Compound,
    ];

    /// Hue offsets in degrees, applied to the base hue in order.
    #[must_use]
    pub const fn offsets(self) -> [f64; 4] {
        match self {
            Self::Monochromatic => [0.0, 0.0, 0.0, 0.0],
            Self::Analogous => [0.0, 30.0, -30.0, 15.0],
            Self::Complementary => [0.0, 180.0, 0.0, 180.0],
            Self::Triadic => [0.0, 120.0, 240.0, 60.0],
            Self::SplitComplementary => [0.0, 150.0, 210.0, 180.0],
            Self::Compound => [0.0, 150.0, 210.0, 30.0],
        }
    }

    /// Derive the four related hues, each wrapped into [0, 360).
    #[must_use]
    pub fn hues(self, base_hue: f64) -> [f64; 4] {
        self.offsets().map(|offset| normalize_hue(base_hue + offset))
    }

    /// Kebab-case name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Compound => "compound",
        }
    }

    /// Parse a scheme from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.iter().find(|s| s.name() == lower).copied()
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SchemeError::UnknownScheme(s.to_string()))
    }
}

/// Derive `[primary, accent, secondary, reserved]` hues for `scheme`.
#[must_use]
pub fn scheme_hues(base_hue: f64, scheme: ColorScheme) -> [f64; 4] {
    scheme.hues(base_hue)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn analogous_wraps_past_360() {
        assert_eq!(scheme_hues(350.0, ColorScheme::Analogous), [350.0, 20.0, 320.0, 5.0]);
    }

    #[test]
    fn analogous_wraps_below_zero() {
        assert_eq!(scheme_hues(10.0, ColorScheme::Analogous), [10.0, 40.0, 340.0, 25.0]);
    }

    #[test]
    fn monochromatic_repeats_base() {
        assert_eq!(scheme_hues(42.0, ColorScheme::Monochromatic), [42.0; 4]);
    }

    #[test]
    fn complementary() {
        assert_eq!(scheme_hues(200.0, ColorScheme::Complementary), [200.0, 20.0, 200.0, 20.0]);
    }

    #[test]
    fn triadic() {
        assert_eq!(scheme_hues(0.0, ColorScheme::Triadic), [0.0, 120.0, 240.0, 60.0]);
    }

    #[test]
    fn split_complementary() {
        assert_eq!(
            scheme_hues(90.0, ColorScheme::SplitComplementary),
            [90.0, 240.0, 300.0, 270.0]
        );
    }

    #[test]
    fn compound() {
        assert_eq!(scheme_hues(300.0, ColorScheme::Compound), [300.0, 90.0, 150.0, 330.0]);
    }

    /// All hues are in [0, 360) for every scheme and awkward bases.
    #[test]
    fn all_hues_in_range() {
        for scheme in ColorScheme::ALL {
            for base in [-725.0, -30.0, 0.0, 90.0, 180.0, 270.0, 359.9, 360.0, 1000.0] {
                let hues = scheme.hues(base);
                assert_eq!(hues.len(), 4);
                for h in hues {
                    assert!((0.0..360.0).contains(&h), "{scheme} base={base} produced hue {h}");
                }
            }
        }
    }

    #[test]
    fn first_hue_is_base() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.hues(123.0)[0], 123.0, "{scheme}");
        }
    }

    #[test]
    fn names_roundtrip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.name().parse::<ColorScheme>(), Ok(scheme));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Split-Complementary".parse(), Ok(ColorScheme::SplitComplementary));
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            "tetradic".parse::<ColorScheme>(),
            Err(SchemeError::UnknownScheme("tetradic".to_string()))
        );
    }
}
