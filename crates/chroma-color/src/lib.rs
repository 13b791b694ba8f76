// SPDX-License-Identifier: MIT
//
// chroma-color: the color codec underneath chroma-lab.
//
// Two representations, one conversion path:
//
//   Hsl (degrees, percent, percent)  ↔  Rgb (three u8 channels)  ↔  "#rrggbb"
//
// Everything here is a pure function over small `Copy` values. Parsing is
// the only fallible operation and it reports a typed `ColorError`; numeric
// inputs are clamped or wrapped instead of rejected.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Channel rounding goes through f64 and back to u8 after an explicit clamp.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod ansi;
pub mod error;
pub mod hsl;
pub mod rgb;

pub use error::ColorError;
pub use hsl::{Hsl, hex_to_hsl, hsl_to_hex, normalize_hue};
pub use rgb::{Rgb, parse_hex};
