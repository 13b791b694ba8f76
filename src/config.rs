// SPDX-License-Identifier: MIT
//
// Optional TOML defaults for the CLI.
//
//   seed   = 42           # fixed seed for `generate`
//   scheme = "triadic"    # fixed harmony rule for `generate`
//   format = "css"        # swatch | css | config | json
//   dark   = false        # dark-mode preview
//
// Every key is optional. Command-line flags override file values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chroma_palette::ColorScheme;
use clap::ValueEnum;
use serde::Deserialize;

/// Output format for a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Colored terminal preview.
    #[default]
    Swatch,
    /// CSS custom-property block.
    Css,
    /// Tailwind-style `colors` object.
    Config,
    /// JSON object.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub seed: Option<u64>,
    pub scheme: Option<String>,
    pub format: Option<Format>,
    pub dark: bool,
}

impl Config {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse TOML text and validate the scheme name.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.scheme()?;
        Ok(config)
    }

    /// The configured scheme, if any.
    pub fn scheme(&self) -> Result<Option<ColorScheme>> {
        self.scheme
            .as_deref()
            .map(str::parse::<ColorScheme>)
            .transpose()
            .context("Invalid `scheme` in config")
    }
}
