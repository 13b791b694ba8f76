// SPDX-License-Identifier: MIT
//
// HSL ↔ RGB conversion.
//
// Hue is in degrees, saturation and lightness are percentages, the same
// units a color picker shows. Conversion to RGB uses the chroma/offset
// formulation:
//
//   a    = s · min(l, 1 − l)
//   k(n) = (n + h / 30) mod 12
//   f(n) = l − a · max(min(k − 3, 9 − k, 1), −1)
//   rgb  = (f(0), f(8), f(4))
//
// which avoids the six-way sector branch of the textbook algorithm. The
// inverse is the usual max/min decomposition. Hue is wrapped and the two
// percentages are clamped on the way in, so no input can make this fail.

use std::fmt;

use crate::error::ColorError;
use crate::rgb::{Rgb, parse_hex};

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color as hue (0–360°), saturation (0–100%) and lightness (0–100%).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue angle in degrees, in [0, 360).
    pub h: f64,
    /// Saturation percentage, in [0, 100].
    pub s: f64,
    /// Lightness percentage, in [0, 100].
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color, wrapping the hue and clamping the percentages.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Convert to 8-bit sRGB, rounding each channel to the nearest integer.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let Self { h, s, l } = Self::new(self.h, self.s, self.l);
        let s = s / 100.0;
        let l = l / 100.0;
        let a = s * l.min(1.0 - l);
        let f = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            a.mul_add(-(k - 3.0).min(9.0 - k).min(1.0).max(-1.0), l)
        };
        Rgb::from_unit(f(0.0), f(8.0), f(4.0))
    }

    /// Decompose an 8-bit sRGB color into HSL.
    ///
    /// Achromatic colors (r == g == b) report hue 0 and saturation 0.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d == 0.0 {
            return Self { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let s = d / (1.0 - 2.0f64.mul_add(l, -1.0).abs());
        let h = if max == r {
            60.0 * ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / d + 2.0)
        } else {
            60.0 * ((r - g) / d + 4.0)
        };

        Self::new(h, s * 100.0, l * 100.0)
    }

    /// Format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Convert an HSL triple straight to `#rrggbb`.
///
/// Hue may be any real number; saturation and lightness are clamped to
/// 0–100. The result is always a well-formed seven-character hex string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Parse `#rrggbb` and decompose it into HSL.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `s` is not a six-digit hex color.
pub fn hex_to_hsl(s: &str) -> Result<Hsl, ColorError> {
    parse_hex(s).map(Hsl::from_rgb)
}

/// Wrap a hue angle into [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    ((h % 360.0) + 360.0) % 360.0
}

#[inline]
fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
