//! Named preset palettes: ready-to-use starting points.

use crate::palette::ColorPalette;

/// Preset names paired with `[text, background, primary, secondary, accent]`.
const PRESETS: [(&str, [&str; 5]); 6] = [
    ("default", ["#050315", "#fbfbfe", "#2f27ce", "#dedcff", "#433bff"]),
    ("forest", ["#1a1a2e", "#f5f5f5", "#16a34a", "#dcfce7", "#22c55e"]),
    ("ocean", ["#0f172a", "#f8fafc", "#0284c7", "#e0f2fe", "#0ea5e9"]),
    ("sunset", ["#1c1917", "#fafaf9", "#ea580c", "#ffedd5", "#f97316"]),
    ("rose", ["#1f2937", "#fdf2f8", "#db2777", "#fce7f3", "#ec4899"]),
    ("mono", ["#171717", "#fafafa", "#404040", "#e5e5e5", "#737373"]),
];

/// Look up a preset palette by name (case-insensitive).
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn preset(name: &str) -> Option<ColorPalette> {
    let lower = name.to_lowercase();
    PRESETS
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, [text, background, primary, secondary, accent])| {
            ColorPalette::new(*text, *background, *primary, *secondary, *accent)
        })
}

/// List all preset names, `default` first.
#[must_use]
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::Grade;

    #[test]
    fn all_presets_resolve() {
        for name in preset_names() {
            assert!(preset(name).is_some(), "Preset '{name}' failed to resolve");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(preset("nonexistent").is_none());
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(preset("Ocean"), preset("ocean"));
    }

    #[test]
    fn default_is_first() {
        assert_eq!(preset_names()[0], "default");
        assert_eq!(preset("default").unwrap().primary, "#2f27ce");
    }

    #[test]
    fn presets_are_well_formed() {
        for name in preset_names() {
            let p = preset(name).unwrap();
            assert!(p.invalid_roles().is_empty(), "{name}: {:?}", p.invalid_roles());
        }
    }

    #[test]
    fn preset_text_is_aaa() {
        for name in preset_names() {
            let p = preset(name).unwrap();
            let grade = Grade::from_ratio(p.text_contrast());
            assert_eq!(grade, Grade::Aaa, "{name}: {}", p.text_contrast());
        }
    }

    #[test]
    fn each_preset_is_distinct() {
        let names = preset_names();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(preset(a), preset(b), "{a} == {b}");
            }
        }
    }
}
