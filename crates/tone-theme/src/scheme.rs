//! Four-color scheme: the base, its complement, and one step darker and
//! lighter.

use serde::Serialize;
use tone_color::Rgb;

/// Lightness step, in HSL points, between the base and its dark/light
/// siblings.
pub const SCHEME_LIGHTNESS_STEP: f64 = 20.0;

/// A base color plus three derived siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    /// The input, unchanged.
    pub primary: Rgb,
    /// Same saturation and lightness, hue rotated 180°.
    pub complement: Rgb,
    /// Lightness −20, floored at 0.
    pub dark: Rgb,
    /// Lightness +20, capped at 100.
    pub light: Rgb,
}

/// Derive a [`ColorScheme`] from `base`.
#[must_use]
pub fn generate_color_scheme(base: Rgb) -> ColorScheme {
    let hsl = base.to_hsl();
    ColorScheme {
        primary: base,
        complement: hsl.complement().to_rgb(),
        dark: hsl.darken(SCHEME_LIGHTNESS_STEP).to_rgb(),
        light: hsl.lighten(SCHEME_LIGHTNESS_STEP).to_rgb(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
