//! # chroma-palette: harmony palettes and contrast grading
//!
//! Generates five-role website palettes (text, background, primary,
//! secondary, accent) from color-wheel harmony rules, and grades any two
//! colors by their WCAG 2.x contrast ratio.
//!
//! # Architecture
//!
//! ```text
//! base_hue + ColorScheme + rng
//!     │
//!     ▼
//! scheme.rs:   derive related hues (pure math)
//!     │
//!     ▼
//! palette.rs:  assign hues to roles with per-role saturation/lightness bands
//!     │
//!     ▼
//! chroma-color: HSL → "#rrggbb"
//!     │
//!     ▼
//! export.rs:   CSS custom properties / config object / JSON
//!
//! contrast.rs: relative luminance + contrast ratio over any two hex colors
//! ```
//!
//! Nothing here performs I/O. Randomness is always supplied by the caller,
//! so a seeded generator reproduces the same palette.

// Mathematical code uses small integer-to-float casts (hue draws, indices).
#![allow(clippy::cast_precision_loss)]

pub mod contrast;
pub mod error;
pub mod export;
pub mod palette;
pub mod preset;
pub mod scheme;

pub use contrast::{Grade, contrast_ratio, relative_luminance, try_contrast_ratio};
pub use error::{RoleError, SchemeError};
pub use palette::{ColorPalette, Role, generate_palette, generate_random_palette, set_palette_field};
pub use scheme::{ColorScheme, scheme_hues};
