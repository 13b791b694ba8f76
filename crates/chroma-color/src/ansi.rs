// SPDX-License-Identifier: MIT
//
// ANSI escape sequences for painting color swatches in a terminal.
//
// Pure functions that write 24-bit SGR sequences to any `impl Write`. The
// caller decides layout; this module only knows the byte-level encoding.
use std::io::{self, Write};

use crate::rgb::Rgb;

/// Set the foreground (text) color using 24-bit `TrueColor`.
#[inline]
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let Rgb { r, g, b } = color;
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set the background color using 24-bit `TrueColor`.
#[inline]
pub fn bg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let Rgb { r, g, b } = color;
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Write `text` in `fg` over `bg`, then reset.
pub fn paint(w: &mut impl Write, text: &str, fg_color: Rgb, bg_color: Rgb) -> io::Result<()> {
    fg(w, fg_color)?;
    bg(w, bg_color)?;
    w.write_all(text.as_bytes())?;
    reset(w)
}
