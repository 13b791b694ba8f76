// SPDX-License-Identifier: MIT
//
// Palette output: the colored terminal preview plus the text export formats.
//
// Swatch layout, one row per role, then the legibility summary:
//
//   ▐ Aa ▌ text        #050315
//   ▐ Aa ▌ background  #fbfbfe   19.05:1 AAA
//   ...
//   text on background: 19.05:1 AAA
//
// Each sample cell paints the palette's text color over the role color.

use std::io::Write;

use anyhow::Result;
use chroma_color::{Rgb, ansi, parse_hex};
use chroma_palette::{ColorPalette, Grade, Role, contrast_ratio, export};

use crate::config::Format;

/// Write `palette` in `format`, followed by a newline.
pub fn palette(w: &mut impl Write, palette: &ColorPalette, format: Format) -> Result<()> {
    match format {
        Format::Swatch => swatch(w, palette)?,
        Format::Css => writeln!(w, "{}", export::to_css(palette))?,
        Format::Config => writeln!(w, "{}", export::to_config_object(palette))?,
        Format::Json => writeln!(w, "{}", export::to_json(palette)?)?,
    }
    Ok(())
}

/// A contrast ratio as shown to users: `4.48:1 AA Large`.
pub fn ratio_label(ratio: f64) -> String {
    format!("{ratio:.2}:1 {}", Grade::from_ratio(ratio))
}

fn swatch(w: &mut impl Write, palette: &ColorPalette) -> Result<()> {
    // Unparseable colors preview as black, matching how they are scored.
    let rgb = |hex: &str| parse_hex(hex).unwrap_or(Rgb::BLACK);
    let text = rgb(&palette.text);

    for (role, hex) in palette.iter() {
        ansi::paint(w, " Aa ", text, rgb(hex))?;
        write!(w, " {:<11} {hex}", role.name())?;
        if role != Role::Text {
            write!(w, "   {}", ratio_label(contrast_ratio(&palette.text, hex)))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "text on background: {}", ratio_label(palette.text_contrast()))?;
    Ok(())
}
