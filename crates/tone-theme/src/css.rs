//! CSS custom-property emission.
//!
//! The output is two string maps, `light` and `dark`, from a variable
//! name to a CSS color literal. Presentation code injects them verbatim,
//! so the key set is fixed:
//!
//! - `--red-<tone>` for tone keys `0 1 2 3 4 5 5-5 6`
//! - `--color-<shadow>` for `red-3-shadow` and `red-6-shadow`
//!
//! The dark map is hand-authored by default: it does not read the
//! computed [`DarkModeVariants`] and emits the same literals for every
//! seed. [`DarkCss::Derived`] switches to a map built from the variants.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::DarkCss;
use crate::tonal::{DarkModeVariants, ShadowSet, TonalPalette, ToneKey};

/// Prefix for tone-ramp variables.
pub const TONE_PREFIX: &str = "--red-";
/// Prefix for shadow variables.
pub const SHADOW_PREFIX: &str = "--color-";

/// Dark-mode literals used by [`DarkCss::HandAuthored`].
const HAND_AUTHORED_DARK: [(&str, &str); 5] = [
    ("--red-0", "var(--red-1)"),
    ("--red-4", "rgba(255, 208, 208, 0.5)"),
    ("--red-5", "rgba(255, 228, 228, 0.15)"),
    ("--red-5-5", "rgba(255, 236, 236, 0.05)"),
    ("--red-6", "rgba(255, 243, 243, 0.2)"),
];

/// `--red-<key>`.
#[must_use]
pub fn tone_var(key: ToneKey) -> String {
    format!("{TONE_PREFIX}{key}")
}

/// Light and dark CSS custom-property maps.
///
/// Immutable once built. Iteration is sorted by name, but consumers
/// should look up by key rather than rely on order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssVariables {
    light: BTreeMap<String, String>,
    dark: BTreeMap<String, String>,
}

impl CssVariables {
    /// Build both maps in one pass each.
    #[must_use]
    pub fn build(
        light_variants: &TonalPalette,
        shadows: &ShadowSet,
        dark_variants: &DarkModeVariants,
        dark_css: DarkCss,
    ) -> Self {
        let tones = light_variants.iter().map(|(key, color)| (tone_var(key), color.to_css_hex()));
        let shades = shadows
            .iter()
            .map(|(key, color)| (format!("{SHADOW_PREFIX}{key}"), color.to_css_hex()));
        let light = tones.chain(shades).collect();

        let dark = match dark_css {
            DarkCss::HandAuthored => HAND_AUTHORED_DARK
                .iter()
                .map(|&(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
            DarkCss::Derived => dark_variants
                .iter()
                .map(|(key, color)| {
                    let value = if color.is_opaque() { color.rgb.to_css_hex() } else { color.to_css() };
                    (tone_var(key), value)
                })
                .collect(),
        };

        Self { light, dark }
    }

    #[must_use]
    pub const fn light(&self) -> &BTreeMap<String, String> {
        &self.light
    }

    #[must_use]
    pub const fn dark(&self) -> &BTreeMap<String, String> {
        &self.dark
    }

    /// Render both maps as stylesheet rules, one declaration per line.
    #[must_use]
    pub fn to_css(&self, light_selector: &str, dark_selector: &str) -> String {
        let mut out = String::new();
        write_rule(&mut out, light_selector, &self.light);
        out.push('\n');
        write_rule(&mut out, dark_selector, &self.dark);
        out
    }

    /// Render only the light map.
    #[must_use]
    pub fn light_css(&self, selector: &str) -> String {
        let mut out = String::new();
        write_rule(&mut out, selector, &self.light);
        out
    }

    /// Render only the dark map.
    #[must_use]
    pub fn dark_css(&self, selector: &str) -> String {
        let mut out = String::new();
        write_rule(&mut out, selector, &self.dark);
        out
    }
}

fn write_rule(out: &mut String, selector: &str, vars: &BTreeMap<String, String>) {
    let body: String = vars.iter().map(|(name, value)| format!("  {name}: {value};\n")).collect();
    out.push_str(&format!("{selector} {{\n{body}}}\n"));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
