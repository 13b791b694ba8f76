//! Text export formats for a palette.
//!
//! All formats list roles in the same order: text, background, primary,
//! secondary, accent.

use std::fmt::Write as _;

use crate::palette::ColorPalette;

/// CSS custom-property block.
///
/// ```text
/// :root {
///   --text: #050315;
///   ...
/// }
/// ```
#[must_use]
pub fn to_css(palette: &ColorPalette) -> String {
    let mut out = String::from(":root {\n");
    for (role, hex) in palette.iter() {
        let _ = writeln!(out, "  --{role}: {hex};");
    }
    out.push('}');
    out
}

/// Tailwind-style `colors` configuration object literal.
///
/// ```text
/// colors: {
///   text: '#050315',
///   ...
/// }
/// ```
#[must_use]
pub fn to_config_object(palette: &ColorPalette) -> String {
    let mut out = String::from("colors: {\n");
    for (role, hex) in palette.iter() {
        let _ = writeln!(out, "  {role}: '{hex}',");
    }
    out.push('}');
    out
}

/// Pretty-printed JSON object keyed by role name.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures, which a palette of
/// plain strings does not produce in practice.
pub fn to_json(palette: &ColorPalette) -> serde_json::Result<String> {
    serde_json::to_string_pretty(palette)
}
