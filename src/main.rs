// SPDX-License-Identifier: MIT
//
// chroma-lab: harmony palette generator and WCAG contrast checker.
//
// This is the binary that wires the engine crates to a terminal:
//
//   chroma-color   → HSL ↔ RGB ↔ hex, ANSI swatch escapes
//   chroma-palette → schemes, palette synthesis, contrast, exports, presets
//
// Each invocation flows through:
//
//   argv → Cli → Config (optional TOML) → subcommand → render → stdout
//
// The engine never touches I/O or global randomness. `generate` owns the
// RNG: a PCG seeded from `--seed`, the config file, or the OS, in that order.

mod cli;
mod config;
mod logging;
mod render;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use chroma_color::{Hsl, hex_to_hsl};
use chroma_palette::{
    ColorScheme, contrast_ratio, generate_palette, generate_random_palette, preset, scheme_hues,
    try_contrast_ratio,
};

use crate::cli::{Cli, Command, ConvertArgs, GenerateArgs};
use crate::config::{Config, Format};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(cli, &mut out) {
        eprintln!("chroma-lab: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => generate(&args, &config, out),
        Command::Contrast { a, b, strict } => {
            let ratio = if strict {
                try_contrast_ratio(&a, &b)?
            } else {
                contrast_ratio(&a, &b)
            };
            writeln!(out, "{}", render::ratio_label(ratio))?;
            Ok(())
        }
        Command::Hues { base, scheme } => {
            let hues = scheme_hues(base, scheme).map(|h| h.to_string());
            writeln!(out, "{}", hues.join(" "))?;
            Ok(())
        }
        Command::Convert(args) => convert(&args, out),
        Command::Preset { name, format, dark } => {
            let Some(name) = name else {
                for name in preset::preset_names() {
                    writeln!(out, "{name}")?;
                }
                return Ok(());
            };
            let palette = preset::preset(&name).with_context(|| {
                format!("Unknown preset {name:?} (try one of: {})", preset::preset_names().join(", "))
            })?;
            let format = format.or(config.format).unwrap_or_default();
            render::palette(out, &palette.for_display(dark || config.dark), format)
        }
    }
}

fn generate(args: &GenerateArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let scheme: Option<ColorScheme> = match args.scheme {
        Some(scheme) => Some(scheme),
        None => config.scheme()?,
    };
    let format = args.format.or(config.format).unwrap_or_default();
    let dark = args.dark || config.dark;
    tracing::info!(seed, ?scheme, base_hue = ?args.base_hue, count = args.count, "generating");

    let mut rng = Pcg64::seed_from_u64(seed);
    for i in 0..args.count {
        let palette = if scheme.is_none() && args.base_hue.is_none() {
            generate_random_palette(&mut rng)
        } else {
            let base_hue = args
                .base_hue
                .unwrap_or_else(|| f64::from(rng.random_range(0..360u16)));
            let scheme = scheme
                .unwrap_or_else(|| ColorScheme::ALL[rng.random_range(0..ColorScheme::ALL.len())]);
            generate_palette(base_hue, scheme, &mut rng)
        };

        if i > 0 {
            writeln!(out)?;
        }
        if args.count > 1 || format == Format::Swatch {
            writeln!(out, "# seed {seed}, palette {}", i + 1)?;
        }
        render::palette(out, &palette.for_display(dark), format)?;
    }
    Ok(())
}

fn convert(args: &ConvertArgs, out: &mut impl Write) -> Result<()> {
    if let Some(hex) = &args.hex {
        let hsl = hex_to_hsl(hex)?;
        writeln!(out, "{hsl}")?;
        return Ok(());
    }
    let (Some(h), Some(s), Some(l)) = (args.hue, args.saturation, args.lightness) else {
        anyhow::bail!("convert needs either --hex or hue, saturation and lightness");
    };
    writeln!(out, "{}", Hsl::new(h, s, l).to_hex())?;
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
