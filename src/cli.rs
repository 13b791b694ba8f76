// SPDX-License-Identifier: MIT
//
// Command-line surface. Parsing only; `main.rs` does the work.

use std::path::PathBuf;

use chroma_palette::ColorScheme;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::Format;

#[derive(Debug, Parser)]
#[command(name = "chroma-lab", version, about = "Generate harmony palettes and check WCAG contrast")]
pub struct Cli {
    /// TOML config file with defaults for `generate` and `preset`.
    #[arg(long, env = "CHROMA_LAB_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a palette from a random (or fixed) base hue and scheme.
    Generate(GenerateArgs),

    /// Contrast ratio and grade of two hex colors.
    Contrast {
        a: String,
        b: String,

        /// Reject malformed colors instead of scoring them as black.
        #[arg(long)]
        strict: bool,
    },

    /// The four hues a scheme derives from a base hue.
    Hues {
        #[arg(allow_hyphen_values = true)]
        base: f64,
        scheme: ColorScheme,
    },

    /// Convert HSL to hex, or hex to HSL with `--hex`.
    Convert(ConvertArgs),

    /// List the preset palettes, or print one.
    Preset {
        name: Option<String>,

        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Preview in dark mode (text and background swapped).
        #[arg(long)]
        dark: bool,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Seed for reproducible output. Random when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Harmony rule. Random when absent.
    #[arg(long)]
    pub scheme: Option<ColorScheme>,

    /// Base hue in degrees. Random when absent.
    #[arg(long, allow_hyphen_values = true)]
    pub base_hue: Option<f64>,

    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Preview in dark mode (text and background swapped).
    #[arg(long)]
    pub dark: bool,

    /// Number of palettes to generate from the same seed stream.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Hex color to decompose into HSL.
    #[arg(long, conflicts_with_all = ["hue", "saturation", "lightness"])]
    pub hex: Option<String>,

    #[arg(required_unless_present = "hex", allow_hyphen_values = true)]
    pub hue: Option<f64>,

    #[arg(required_unless_present = "hex")]
    pub saturation: Option<f64>,

    #[arg(required_unless_present = "hex")]
    pub lightness: Option<f64>,
}
