//! WCAG contrast ratio between two colors.
//!
//! - Relative luminance uses the WCAG 2.x sRGB linearization (threshold
//!   0.03928) and the 0.2126 / 0.7152 / 0.0722 channel weights.
//! - Contrast ratio is `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1, 21].
//!
//! The string-based [`contrast_ratio`] never fails: a malformed hex color is
//! scored as black (luminance 0) so a preview can always show a number.
//! Callers who would rather reject bad input use [`try_contrast_ratio`].

use std::fmt;

use chroma_color::{ColorError, Rgb, parse_hex};

/// Linearize one sRGB channel given in [0, 1].
#[inline]
fn linearize(v: f64) -> f64 {
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.x, in [0, 1].
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_unit();
    0.2126f64.mul_add(linearize(r), 0.7152f64.mul_add(linearize(g), 0.0722 * linearize(b)))
}

/// Relative luminance of a hex string; malformed input counts as black.
#[must_use]
pub fn hex_luminance(hex: &str) -> f64 {
    match parse_hex(hex) {
        Ok(rgb) => relative_luminance(rgb),
        Err(err) => {
            tracing::trace!(%err, "scoring unparseable color as black");
            0.0
        }
    }
}

fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two typed colors, in [1, 21].
#[must_use]
pub fn rgb_contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio between two hex colors, in [1, 21].
///
/// Symmetric in its arguments. A string that is not `#?[0-9a-fA-F]{6}` is
/// treated as `#000000` rather than reported.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    ratio_from_luminance(hex_luminance(a), hex_luminance(b))
}

/// Contrast ratio between two hex colors, surfacing parse failures.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for the first argument that
/// fails to parse.
pub fn try_contrast_ratio(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(rgb_contrast_ratio(parse_hex(a)?, parse_hex(b)?))
}

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// Display grade for a contrast ratio. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    /// Below 3:1.
    Fail,
    /// At least 3:1, large text only.
    AaLarge,
    /// At least 4.5:1.
    Aa,
    /// At least 7:1.
    Aaa,
}

impl Grade {
    /// Classify a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
            Self::Fail => "Fail",
        }
    }

    /// Whether body-size text is legible at this grade (AA or better).
    #[must_use]
    pub const fn passes_normal_text(self) -> bool {
        matches!(self, Self::Aa | Self::Aaa)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance(Rgb::BLACK), 0.0, 1e-12));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(relative_luminance(Rgb::WHITE), 1.0, 1e-9));
    }

    #[test]
    fn luminance_pure_channels() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_low_channel_is_linear() {
        // 10/255 ≈ 0.0392 sits below the 0.03928 knee.
        let lum = relative_luminance(Rgb::new(10, 10, 10));
        assert!(approx_eq(lum, 10.0 / 255.0 / 12.92, 1e-12), "lum: {lum}");
    }

    #[test]
    fn malformed_hex_luminance_is_zero() {
        assert_eq!(hex_luminance("#12345"), 0.0);
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_white_white_is_1() {
        assert!(approx_eq(contrast_ratio("#ffffff", "#ffffff"), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#cc334d", "#1a1a66");
        let ba = contrast_ratio("#1a1a66", "#cc334d");
        assert!(approx_eq(ab, ba, 1e-12), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_known_pair() {
        // #777777 on white is the classic 4.48:1 near-miss.
        let ratio = contrast_ratio("#777777", "#ffffff");
        assert!(approx_eq(ratio, 4.48, 0.01), "ratio: {ratio}");
    }

    #[test]
    fn malformed_input_scores_as_black() {
        let bad = contrast_ratio("not-a-color", "#ffffff");
        let black = contrast_ratio("#000000", "#ffffff");
        assert!(approx_eq(bad, black, 1e-12), "{bad} vs {black}");
    }

    #[test]
    fn both_malformed_is_1() {
        assert!(approx_eq(contrast_ratio("", "zzz"), 1.0, 1e-12));
    }

    #[test]
    fn try_contrast_reports_bad_input() {
        assert_eq!(
            try_contrast_ratio("#ffffff", "oops"),
            Err(ColorError::InvalidColorFormat("oops".to_string()))
        );
        let ok = try_contrast_ratio("#000", "#fff");
        assert!(ok.is_err(), "shorthand is not accepted");
    }

    #[test]
    fn try_contrast_matches_lenient_on_valid_input() {
        let strict = try_contrast_ratio("#2f27ce", "#fbfbfe").unwrap();
        assert!(approx_eq(strict, contrast_ratio("#2f27ce", "#fbfbfe"), 1e-12));
    }

    // ── Grade ───────────────────────────────────────────────────────

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_ratio(21.0), Grade::Aaa);
        assert_eq!(Grade::from_ratio(7.0), Grade::Aaa);
        assert_eq!(Grade::from_ratio(6.99), Grade::Aa);
        assert_eq!(Grade::from_ratio(4.5), Grade::Aa);
        assert_eq!(Grade::from_ratio(4.49), Grade::AaLarge);
        assert_eq!(Grade::from_ratio(3.0), Grade::AaLarge);
        assert_eq!(Grade::from_ratio(2.99), Grade::Fail);
        assert_eq!(Grade::from_ratio(1.0), Grade::Fail);
    }

    #[test]
    fn grade_labels() {
        assert_eq!(Grade::Aaa.to_string(), "AAA");
        assert_eq!(Grade::AaLarge.to_string(), "AA Large");
        assert!(Grade::Aa.passes_normal_text());
        assert!(!Grade::AaLarge.passes_normal_text());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = Rgb> {
            (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
        }

        proptest! {
            #[test]
            fn contrast_symmetric(a in any_rgb(), b in any_rgb()) {
                let ab = contrast_ratio(&a.to_hex(), &b.to_hex());
                let ba = contrast_ratio(&b.to_hex(), &a.to_hex());
                prop_assert!((ab - ba).abs() < 1e-12, "{} vs {}", ab, ba);
            }

            #[test]
            fn contrast_identity(c in any_rgb()) {
                let hex = c.to_hex();
                prop_assert_eq!(contrast_ratio(&hex, &hex), 1.0);
            }

            #[test]
            fn contrast_in_bounds(a in any_rgb(), b in any_rgb()) {
                let ratio = rgb_contrast_ratio(a, b);
                prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {}", ratio);
            }
        }
    }
}
