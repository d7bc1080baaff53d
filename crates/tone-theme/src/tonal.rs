//! Tonal palette generation — one seed, a full tone ramp.
//!
//! The ramp has eight stops keyed `0` through `6` with an extra `5-5`
//! between `5` and `6`. Stop `3` is the seed itself; stops below it are
//! darker, stops above it lighter and progressively less saturated:
//!
//! | key | Δs  | Δl  |
//! |-----|-----|-----|
//! | 0   | 0   | −15 |
//! | 1   | 0   | −10 |
//! | 2   | 0   | −5  |
//! | 3   | base (identity) ||
//! | 4   | −10 | +5  |
//! | 5   | −15 | +10 |
//! | 5-5 | −20 | +15 |
//! | 6   | −25 | +20 |
//!
//! Two deep shadows sit below the ramp, and a dark-mode set re-targets
//! the light end of the ramp to near-white overlays with alpha.

use std::fmt;
use std::ops::Index;

use serde::{Serialize, Serializer};
use tone_color::{Hsl, Rgb, Rgba};

use crate::config::DarkCss;
use crate::css::CssVariables;

// ---------------------------------------------------------------------------
// ToneKey
// ---------------------------------------------------------------------------

/// One stop of the tone ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToneKey {
    Zero,
    One,
    Two,
    /// The seed color.
    Three,
    Four,
    Five,
    /// The half step between `5` and `6`, spelled `5-5`.
    FiveHalf,
    Six,
}

impl ToneKey {
    /// Every key, darkest first.
    pub const ALL: [Self; 8] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::FiveHalf,
        Self::Six,
    ];

    /// The key as it appears in CSS variable names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::FiveHalf => "5-5",
            Self::Six => "6",
        }
    }

    /// Position in [`ToneKey::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a key by its CSS spelling.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == s)
    }

    /// Saturation and lightness deltas for the light ramp.
    /// `None` for the identity stop.
    const fn light_delta(self) -> Option<(f64, f64)> {
        match self {
            Self::Zero => Some((0.0, -15.0)),
            Self::One => Some((0.0, -10.0)),
            Self::Two => Some((0.0, -5.0)),
            Self::Three => None,
            Self::Four => Some((-10.0, 5.0)),
            Self::Five => Some((-15.0, 10.0)),
            Self::FiveHalf => Some((-20.0, 15.0)),
            Self::Six => Some((-25.0, 20.0)),
        }
    }
}

impl fmt::Display for ToneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply a saturation/lightness delta, clamping each component.
fn shift(hsl: Hsl, saturation: f64, lightness: f64) -> Rgb {
    hsl.saturate(saturation).lighten(lightness).to_rgb()
}

// ---------------------------------------------------------------------------
// TonalPalette
// ---------------------------------------------------------------------------

/// The light tone ramp, indexed by [`ToneKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonalPalette {
    colors: [Rgb; 8],
}

impl TonalPalette {
    /// Build the ramp around `base`. Stop `3` is `base` exactly.
    #[must_use]
    pub fn generate(base: Rgb) -> Self {
        let hsl = base.to_hsl();
        let colors = ToneKey::ALL.map(|key| match key.light_delta() {
            None => base,
            Some((ds, dl)) => shift(hsl, ds, dl),
        });
        Self { colors }
    }

    #[must_use]
    pub const fn get(&self, key: ToneKey) -> Rgb {
        self.colors[key.index()]
    }

    /// Stops in ramp order, darkest first.
    pub fn iter(&self) -> impl Iterator<Item = (ToneKey, Rgb)> + '_ {
        ToneKey::ALL.into_iter().zip(self.colors)
    }
}

impl Index<ToneKey> for TonalPalette {
    type Output = Rgb;

    fn index(&self, key: ToneKey) -> &Rgb {
        &self.colors[key.index()]
    }
}

impl Serialize for TonalPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(key, color)| (key.as_str(), color)))
    }
}

// ---------------------------------------------------------------------------
// Shadows
// ---------------------------------------------------------------------------

/// A named deep shade below the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowKey {
    /// Saturation +10, lightness −30.
    Red3Shadow,
    /// Saturation +15, lightness −25.
    Red6Shadow,
}

impl ShadowKey {
    pub const ALL: [Self; 2] = [Self::Red3Shadow, Self::Red6Shadow];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red3Shadow => "red-3-shadow",
            Self::Red6Shadow => "red-6-shadow",
        }
    }

    const fn delta(self) -> (f64, f64) {
        match self {
            Self::Red3Shadow => (10.0, -30.0),
            Self::Red6Shadow => (15.0, -25.0),
        }
    }
}

impl fmt::Display for ShadowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deep shades for drop shadows and pressed states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowSet {
    colors: [Rgb; 2],
}

impl ShadowSet {
    #[must_use]
    pub fn generate(base: Rgb) -> Self {
        let hsl = base.to_hsl();
        let colors = ShadowKey::ALL.map(|key| {
            let (ds, dl) = key.delta();
            shift(hsl, ds, dl)
        });
        Self { colors }
    }

    #[must_use]
    pub const fn get(&self, key: ShadowKey) -> Rgb {
        self.colors[key as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShadowKey, Rgb)> + '_ {
        ShadowKey::ALL.into_iter().zip(self.colors)
    }
}

impl Serialize for ShadowSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(key, color)| (key.as_str(), color)))
    }
}

// ---------------------------------------------------------------------------
// Dark-mode variants
// ---------------------------------------------------------------------------

/// How a dark-mode stop is derived from the base.
#[derive(Debug, Clone, Copy)]
enum DarkStep {
    /// Relative shift, fully opaque.
    Shift { saturation: f64, lightness: f64 },
    /// Absolute lightness with alpha, saturation unchanged. Near-white
    /// targets read well on a dark background whatever the base lightness.
    Fixed { lightness: f64, alpha: f64 },
}

/// Alpha for `6` is above `5-5` on purpose: the last stop needs to stand
/// out against the one before it.
const DARK_RAMP: [(ToneKey, DarkStep); 5] = [
    (ToneKey::Zero, DarkStep::Shift { saturation: -5.0, lightness: 5.0 }),
    (ToneKey::Four, DarkStep::Fixed { lightness: 82.0, alpha: 0.5 }),
    (ToneKey::Five, DarkStep::Fixed { lightness: 89.0, alpha: 0.15 }),
    (ToneKey::FiveHalf, DarkStep::Fixed { lightness: 93.0, alpha: 0.05 }),
    (ToneKey::Six, DarkStep::Fixed { lightness: 95.0, alpha: 0.2 }),
];

/// Dark-mode overlays for keys `0`, `4`, `5`, `5-5`, `6`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarkModeVariants {
    colors: [(ToneKey, Rgba); 5],
}

impl DarkModeVariants {
    #[must_use]
    pub fn generate(base: Rgb) -> Self {
        let hsl = base.to_hsl();
        let colors = DARK_RAMP.map(|(key, step)| {
            let color = match step {
                DarkStep::Shift { saturation, lightness } => {
                    Rgba::opaque(shift(hsl, saturation, lightness))
                }
                DarkStep::Fixed { lightness, alpha } => {
                    hsl.with_lightness(lightness).to_rgb().with_alpha(alpha)
                }
            };
            (key, color)
        });
        Self { colors }
    }

    /// The overlay for `key`, or `None` for keys without a dark variant.
    #[must_use]
    pub fn get(&self, key: ToneKey) -> Option<Rgba> {
        self.colors.iter().find(|(k, _)| *k == key).map(|&(_, color)| color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToneKey, Rgba)> + '_ {
        self.colors.iter().copied()
    }
}

impl Serialize for DarkModeVariants {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(key, color)| (key.as_str(), color)))
    }
}

// ---------------------------------------------------------------------------
// FullColorScheme
// ---------------------------------------------------------------------------

/// Everything derived from one base: the ramp, shadows, dark overlays,
/// and their CSS custom-property form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullColorScheme {
    pub light_variants: TonalPalette,
    pub shadow_colors: ShadowSet,
    pub dark_mode_variants: DarkModeVariants,
    pub css_variables: CssVariables,
}

impl FullColorScheme {
    /// Derive every set from `base`, emitting dark CSS in `dark_css` mode.
    #[must_use]
    pub fn generate(base: Rgb, dark_css: DarkCss) -> Self {
        let light_variants = TonalPalette::generate(base);
        let shadow_colors = ShadowSet::generate(base);
        let dark_mode_variants = DarkModeVariants::generate(base);
        let css_variables =
            CssVariables::build(&light_variants, &shadow_colors, &dark_mode_variants, dark_css);

        log::trace!(
            "full scheme for {base}: ramp {} .. {}, {} css vars",
            light_variants.get(ToneKey::Zero),
            light_variants.get(ToneKey::Six),
            css_variables.light().len() + css_variables.dark().len(),
        );

        Self { light_variants, shadow_colors, dark_mode_variants, css_variables }
    }
}

/// Derive the full scheme with the hand-authored dark CSS map.
#[must_use]
pub fn generate_full_color_scheme(base: Rgb) -> FullColorScheme {
    FullColorScheme::generate(base, DarkCss::HandAuthored)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    const SEED: Rgb = Rgb::new(200, 80, 80);

    // ── ToneKey ─────────────────────────────────────────────────────

    #[test]
    fn keys_spell_like_css() {
        let spelled: Vec<_> = ToneKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(spelled, ["0", "1", "2", "3", "4", "5", "5-5", "6"]);
    }

    #[test]
    fn keys_parse_back() {
        for key in ToneKey::ALL {
            assert_eq!(ToneKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(ToneKey::parse("7"), None);
    }

    // ── Light ramp ──────────────────────────────────────────────────

    #[test]
    fn stop_three_is_identity() {
        let palette = TonalPalette::generate(SEED);
        assert_eq!(palette[ToneKey::Three], SEED);
    }

    #[test]
    fn lightness_steps_match_table() {
        let base_l = SEED.to_hsl().l;
        let palette = TonalPalette::generate(SEED);
        let expected = [-15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0];
        for ((key, color), dl) in palette.iter().zip(expected) {
            let l = color.to_hsl().l;
            assert!(approx_eq(l, base_l + dl, 0.25), "{key}: l = {l}, want {}", base_l + dl);
        }
    }

    #[test]
    fn upper_stops_lose_saturation() {
        let base_s = SEED.to_hsl().s;
        let palette = TonalPalette::generate(SEED);
        let s4 = palette[ToneKey::Four].to_hsl().s;
        let s6 = palette[ToneKey::Six].to_hsl().s;
        assert!(approx_eq(s4, base_s - 10.0, 1.0), "s4 = {s4}");
        assert!(approx_eq(s6, base_s - 25.0, 1.0), "s6 = {s6}");
    }

    #[test]
    fn ramp_clamps_each_stop() {
        let palette = TonalPalette::generate(Rgb::new(250, 250, 250));
        assert_eq!(palette[ToneKey::Six], Rgb::WHITE);
        assert_eq!(palette[ToneKey::FiveHalf], Rgb::WHITE);
        let palette = TonalPalette::generate(Rgb::new(10, 10, 10));
        assert_eq!(palette[ToneKey::Zero], Rgb::BLACK);
    }

    // ── Shadows ─────────────────────────────────────────────────────

    #[test]
    fn shadows_are_deeper_than_darkest_stop() {
        let palette = TonalPalette::generate(SEED);
        let shadows = ShadowSet::generate(SEED);
        let darkest = palette[ToneKey::Zero].to_hsl().l;
        for (key, color) in shadows.iter() {
            assert!(color.to_hsl().l < darkest, "{key} not deeper than stop 0");
        }
    }

    #[test]
    fn shadow_deltas() {
        let hsl = SEED.to_hsl();
        let shadows = ShadowSet::generate(SEED);
        let red3 = shadows.get(ShadowKey::Red3Shadow).to_hsl();
        let red6 = shadows.get(ShadowKey::Red6Shadow).to_hsl();
        assert!(approx_eq(red3.l, hsl.l - 30.0, 0.25), "red-3 l = {}", red3.l);
        assert!(approx_eq(red6.l, hsl.l - 25.0, 0.25), "red-6 l = {}", red6.l);
        assert!(approx_eq(red3.s, hsl.s + 10.0, 1.5), "red-3 s = {}", red3.s);
        assert!(approx_eq(red6.s, hsl.s + 15.0, 1.5), "red-6 s = {}", red6.s);
    }

    // ── Dark-mode variants ──────────────────────────────────────────

    #[test]
    fn dark_variant_keys_and_alphas() {
        let variants = DarkModeVariants::generate(SEED);
        let alphas: Vec<_> = variants.iter().map(|(k, c)| (k.as_str(), c.alpha)).collect();
        assert_eq!(
            alphas,
            [("0", 1.0), ("4", 0.5), ("5", 0.15), ("5-5", 0.05), ("6", 0.2)]
        );
        assert!(variants.get(ToneKey::Three).is_none());
    }

    #[test]
    fn dark_variants_use_absolute_lightness() {
        for seed in [SEED, Rgb::BLACK, Rgb::new(20, 200, 120)] {
            let variants = DarkModeVariants::generate(seed);
            for (key, target) in [
                (ToneKey::Four, 82.0),
                (ToneKey::Five, 89.0),
                (ToneKey::FiveHalf, 93.0),
                (ToneKey::Six, 95.0),
            ] {
                let l = variants.get(key).map(|c| c.rgb.to_hsl().l).unwrap_or_default();
                assert!(approx_eq(l, target, 0.25), "{seed} {key}: l = {l}");
            }
        }
    }

    #[test]
    fn channels_near_half_round_unfused() {
        // Both put a channel within float dust of .5 before rounding.
        let ramp = TonalPalette::generate(Rgb::new(0x00, 0x81, 0x81));
        assert_eq!(ramp[ToneKey::Five], Rgb::new(0x0d, 0xa7, 0xa7));

        let six = DarkModeVariants::generate(Rgb::new(0x03, 0x03, 0x06)).get(ToneKey::Six).unwrap();
        assert_eq!(six.rgb, Rgb::new(0xee, 0xee, 0xf6));
    }

    #[test]
    fn black_dark_variant_four_is_gray_82() {
        let four = DarkModeVariants::generate(Rgb::BLACK).get(ToneKey::Four).unwrap();
        assert_eq!(four.rgb, Rgb::new(209, 209, 209));
        assert!(approx_eq(four.alpha, 0.5, 1e-12));
    }

    #[test]
    fn dark_variant_zero_is_lighter_and_opaque() {
        let zero = DarkModeVariants::generate(SEED).get(ToneKey::Zero).unwrap();
        assert!(zero.is_opaque());
        assert!(approx_eq(zero.rgb.to_hsl().l, SEED.to_hsl().l + 5.0, 0.25));
    }

    // ── Full scheme ─────────────────────────────────────────────────

    #[test]
    fn full_scheme_default_is_hand_authored() {
        let full = generate_full_color_scheme(SEED);
        assert_eq!(full.css_variables.dark().get("--red-0").map(String::as_str), Some("var(--red-1)"));
        assert_eq!(full.light_variants[ToneKey::Three], SEED);
    }

    #[test]
    fn full_scheme_serializes_keys_as_css_spelling() {
        let json = serde_json::to_value(generate_full_color_scheme(SEED)).unwrap();
        assert_eq!(json["light_variants"]["3"]["r"], 200);
        assert!(json["light_variants"].get("5-5").is_some());
        assert!(json["shadow_colors"].get("red-3-shadow").is_some());
        assert_eq!(json["dark_mode_variants"]["4"]["alpha"], 0.5);
    }
}
