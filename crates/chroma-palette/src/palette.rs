//! Five-role palette synthesis: the bridge from hue sets to hex colors.
//!
//! Takes the hues from [`scheme`](crate::scheme) and turns them into a
//! website palette. Each role draws its saturation and lightness from a
//! fixed band, so every generated palette has the same overall "look":
//! a vivid primary and accent, a pale secondary tint, a near-white
//! background and a near-black text color.

use std::fmt;
use std::str::FromStr;

use chroma_color::{Hsl, parse_hex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::contrast::contrast_ratio;
use crate::error::RoleError;
use crate::scheme::ColorScheme;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// One of the five named colors in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Text,
    Background,
    Primary,
    Secondary,
    Accent,
}

impl Role {
    /// All roles in export order.
    pub const ALL: [Self; 5] = [
        Self::Text,
        Self::Background,
        Self::Primary,
        Self::Secondary,
        Self::Accent,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Background => "background",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .find(|r| r.name() == lower)
            .copied()
            .ok_or_else(|| RoleError::UnknownRole(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ColorPalette
// ---------------------------------------------------------------------------

/// A website palette: five hex colors keyed by role.
///
/// Generated palettes always hold well-formed `#rrggbb` strings. Palettes
/// edited through [`with_role`](Self::with_role) hold whatever the caller
/// put there; use [`invalid_roles`](Self::invalid_roles) to check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPalette {
    pub text: String,
    pub background: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl ColorPalette {
    /// Build a palette from five hex strings in export order.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        background: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            background: background.into(),
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
        }
    }

    /// The hex color assigned to `role`.
    #[must_use]
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Text => &self.text,
            Role::Background => &self.background,
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Accent => &self.accent,
        }
    }

    /// Return this palette with exactly one role replaced. No validation.
    #[must_use]
    pub fn with_role(mut self, role: Role, hex: impl Into<String>) -> Self {
        let slot = match role {
            Role::Text => &mut self.text,
            Role::Background => &mut self.background,
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
            Role::Accent => &mut self.accent,
        };
        *slot = hex.into();
        self
    }

    /// `(role, hex)` pairs in export order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// The palette as a preview shows it. Dark mode swaps text and background.
    #[must_use]
    pub fn for_display(&self, dark: bool) -> Self {
        if dark {
            Self {
                text: self.background.clone(),
                background: self.text.clone(),
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    /// Contrast ratio of the text color on the background color.
    #[must_use]
    pub fn text_contrast(&self) -> f64 {
        contrast_ratio(&self.text, &self.background)
    }

    /// Roles whose value is not a six-digit hex color.
    #[must_use]
    pub fn invalid_roles(&self) -> Vec<Role> {
        self.iter()
            .filter(|(_, hex)| parse_hex(hex).is_err())
            .map(|(role, _)| role)
            .collect()
    }
}

/// Return a copy of `palette` with `role` set to `hex`.
///
/// Pure: the input palette is untouched. The hex string is not validated.
#[must_use]
pub fn set_palette_field(palette: &ColorPalette, role: Role, hex: impl Into<String>) -> ColorPalette {
    palette.clone().with_role(role, hex)
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Saturation and lightness bands (percent) a role is sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
}

impl Band {
    /// The sampling band for each role.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Primary => Self { saturation: (70.0, 90.0), lightness: (45.0, 60.0) },
            Role::Accent => Self { saturation: (65.0, 90.0), lightness: (50.0, 65.0) },
            // Light tint.
            Role::Secondary => Self { saturation: (20.0, 50.0), lightness: (85.0, 95.0) },
            // Near-white.
            Role::Background => Self { saturation: (5.0, 20.0), lightness: (96.0, 99.0) },
            // Near-black.
            Role::Text => Self { saturation: (30.0, 70.0), lightness: (3.0, 10.0) },
        }
    }

    fn sample<R: Rng + ?Sized>(self, hue: f64, rng: &mut R) -> String {
        let s = range(rng, self.saturation.0, self.saturation.1);
        let l = range(rng, self.lightness.0, self.lightness.1);
        Hsl::new(hue, s, l).to_hex()
    }
}

/// Uniform f64 in [lo, hi).
fn range<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    (hi - lo).mul_add(rng.random::<f64>(), lo)
}

/// Generate a palette from a random base hue and a random scheme.
///
/// The base hue is a whole degree in [0, 360); the scheme is uniform over
/// [`ColorScheme::ALL`]. All randomness comes from `rng`.
pub fn generate_random_palette<R: Rng + ?Sized>(rng: &mut R) -> ColorPalette {
    let base_hue = f64::from(rng.random_range(0..360u16));
    let scheme = ColorScheme::ALL[rng.random_range(0..ColorScheme::ALL.len())];
    generate_palette(base_hue, scheme, rng)
}

/// Generate a palette for a caller-chosen base hue and scheme.
///
/// Primary, accent and secondary take scheme hues 0, 1 and 2. Background
/// and text are tinted with the base hue. Bands are sampled in the order
/// primary, accent, secondary, background, text.
pub fn generate_palette<R: Rng + ?Sized>(base_hue: f64, scheme: ColorScheme, rng: &mut R) -> ColorPalette {
    let [primary_hue, accent_hue, secondary_hue, _] = scheme.hues(base_hue);
    tracing::debug!(base_hue, %scheme, primary_hue, accent_hue, secondary_hue, "generating palette");

    let primary = Band::for_role(Role::Primary).sample(primary_hue, rng);
    let accent = Band::for_role(Role::Accent).sample(accent_hue, rng);
    let secondary = Band::for_role(Role::Secondary).sample(secondary_hue, rng);
    let background = Band::for_role(Role::Background).sample(base_hue, rng);
    let text = Band::for_role(Role::Text).sample(base_hue, rng);

    ColorPalette { text, background, primary, secondary, accent }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
