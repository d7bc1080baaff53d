// SPDX-License-Identifier: MIT
//
// Color value types: Rgb (device sRGB, 8 bits per channel), Hsl (the
// working space for every tonal adjustment), and Rgba (Rgb plus an alpha
// for dark-mode overlays).
//
// All three are immutable `Copy` values. Adjustments return fresh values;
// nothing is mutated in place.

use std::fmt;
use std::str::FromStr;

use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::error::ColorError;
use crate::hex::{parse_hex, rgb_to_hex};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A color in device RGB, one byte per channel.
///
/// The channel range [0, 255] is enforced by the type. Use
/// [`Rgb::from_channels`] when the input comes from an untyped source
/// (JSON, a CLI argument, an extraction service) and may be malformed.
///
/// # Examples
///
/// ```
/// use tone_color::Rgb;
///
/// let seed = Rgb::new(200, 80, 80);
/// assert_eq!(seed.to_hex(), "c85050");
/// assert_eq!(seed.to_string(), "#c85050");
///
/// let hsl = seed.to_hsl();
/// assert!((hsl.l - 54.9).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build an `Rgb` from untyped numeric channels.
    ///
    /// Each channel must be finite and inside [0, 255]. Fractional values
    /// inside the range round to the nearest integer.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColor`] naming the first bad channel. The value
    /// is never clamped.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Result<Self, ColorError> {
        Ok(Self {
            r: checked_channel('r', r)?,
            g: checked_channel('g', g)?,
            b: checked_channel('b', b)?,
        })
    }

    /// Convert to HSL.
    #[inline]
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Six lowercase hex digits, no leading `#`.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// `#rrggbb`, ready for a stylesheet.
    #[must_use]
    pub fn to_css_hex(self) -> String {
        format!("#{}", rgb_to_hex(self))
    }

    /// Attach an alpha channel.
    ///
    /// `alpha` is expected in [0, 1]; use [`Rgba::try_new`] to validate
    /// untrusted input.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }

    /// Channels as an array, in r, g, b order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl TryFrom<[i64; 3]> for Rgb {
    type Error = ColorError;

    #[allow(clippy::cast_precision_loss)]
    fn try_from([r, g, b]: [i64; 3]) -> Result<Self, Self::Error> {
        Self::from_channels(r as f64, g as f64, b as f64)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn checked_channel(channel: char, value: f64) -> Result<u8, ColorError> {
    if value.is_finite() && (0.0..=255.0).contains(&value) {
        // In range and finite, so the rounded value fits a u8.
        Ok(value.round() as u8)
    } else {
        Err(ColorError::InvalidColor { channel, value })
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL: hue in degrees [0, 360), saturation and lightness as
/// percentages in [0, 100].
///
/// HSL is the intermediate space for every tonal adjustment. It is not a
/// storage format: round-tripping through it reproduces an [`Rgb`] within
/// ±1 per channel.
///
/// The adjustment helpers ([`lighten`](Self::lighten),
/// [`desaturate`](Self::desaturate), …) clamp each component into
/// [0, 100] independently, so any chain of them yields a valid `Hsl`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation, 0–100.
    pub s: f64,
    /// Lightness, 0–100.
    pub l: f64,
}

impl Hsl {
    /// Construct without validation.
    ///
    /// The caller guarantees `s` and `l` are in [0, 100] and `h` is in
    /// [0, 360). Use [`Hsl::try_new`] otherwise.
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Construct with validation. Any finite hue is accepted and wrapped
    /// into [0, 360).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHsl`] if a component is non-finite, or if
    /// saturation or lightness fall outside [0, 100].
    pub fn try_new(h: f64, s: f64, l: f64) -> Result<Self, ColorError> {
        if !h.is_finite() {
            return Err(ColorError::InvalidHsl { component: 'h', value: h });
        }
        for (component, value) in [('s', s), ('l', l)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ColorError::InvalidHsl { component, value });
            }
        }
        Ok(Self { h: normalize_hue(h), s, l })
    }

    /// Convert back to RGB.
    #[inline]
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    /// Whether this color has no hue (zero saturation).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s.abs() < f64::EPSILON
    }

    // ─── Adjustments ─────────────────────────────────────────────────────

    /// Set lightness to an absolute value (clamped to 0–100).
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l: l.clamp(0.0, 100.0), ..self }
    }

    /// Set saturation to an absolute value (clamped to 0–100).
    #[inline]
    #[must_use]
    pub const fn with_saturation(self, s: f64) -> Self {
        Self { s: s.clamp(0.0, 100.0), ..self }
    }

    /// Increase lightness by `amount` points, capped at 100.
    #[inline]
    #[must_use]
    pub const fn lighten(self, amount: f64) -> Self {
        self.with_lightness(self.l + amount)
    }

    /// Decrease lightness by `amount` points, floored at 0.
    #[inline]
    #[must_use]
    pub const fn darken(self, amount: f64) -> Self {
        self.with_lightness(self.l - amount)
    }

    /// Increase saturation by `amount` points, capped at 100.
    #[inline]
    #[must_use]
    pub const fn saturate(self, amount: f64) -> Self {
        self.with_saturation(self.s + amount)
    }

    /// Decrease saturation by `amount` points, floored at 0.
    #[inline]
    #[must_use]
    pub const fn desaturate(self, amount: f64) -> Self {
        self.with_saturation(self.s - amount)
    }

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self { h: normalize_hue(self.h + degrees), ..self }
    }

    /// The complementary color (hue rotated 180°).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.rotate_hue(180.0)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

/// Wrap a hue angle into [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Shortest angular distance between two hues, in [0, 180].
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// An [`Rgb`] with an alpha channel in [0, 1].
///
/// Used for dark-mode overlays that are composited by the browser against
/// whatever background sits underneath.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// A fully opaque color.
    #[inline]
    #[must_use]
    pub const fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    /// Construct with validation.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColor`] on channel `'a'` if `alpha` is
    /// non-finite or outside [0, 1].
    pub fn try_new(rgb: Rgb, alpha: f64) -> Result<Self, ColorError> {
        if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
            Ok(Self { rgb, alpha })
        } else {
            Err(ColorError::InvalidColor { channel: 'a', value: alpha })
        }
    }

    /// Whether alpha is 1.0.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// CSS `rgba(r, g, b, a)` literal.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::opaque(rgb)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.rgb;
        write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Rgb boundary ─────────────────────────────────────────────────────

    #[test]
    fn from_channels_accepts_range_edges() {
        assert_eq!(Rgb::from_channels(0.0, 255.0, 128.0), Ok(Rgb::new(0, 255, 128)));
    }

    #[test]
    fn from_channels_rounds_fractions() {
        assert_eq!(Rgb::from_channels(10.4, 10.5, 254.6), Ok(Rgb::new(10, 11, 255)));
    }

    #[test]
    fn from_channels_rejects_out_of_range() {
        let err = Rgb::from_channels(0.0, 256.0, 0.0).unwrap_err();
        assert_eq!(err, ColorError::InvalidColor { channel: 'g', value: 256.0 });
        assert!(Rgb::from_channels(-1.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn from_channels_rejects_non_finite() {
        assert!(Rgb::from_channels(f64::NAN, 0.0, 0.0).is_err());
        assert!(Rgb::from_channels(0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn try_from_integer_array() {
        assert_eq!(Rgb::try_from([200_i64, 80, 80]), Ok(Rgb::new(200, 80, 80)));
        assert!(Rgb::try_from([300_i64, 0, 0]).is_err());
    }

    #[test]
    fn display_is_css_hex() {
        assert_eq!(Rgb::new(200, 80, 80).to_string(), "#c85050");
        assert_eq!(Rgb::new(1, 2, 3).to_css_hex(), "#010203");
    }

    #[test]
    fn from_str_parses_hex() {
        assert_eq!("#c85050".parse::<Rgb>(), Ok(Rgb::new(200, 80, 80)));
    }

    // ── Hsl ──────────────────────────────────────────────────────────────

    #[test]
    fn try_new_wraps_hue() {
        let hsl = Hsl::try_new(360.0, 50.0, 50.0).unwrap();
        assert!(approx_eq(hsl.h, 0.0, 1e-9));
        let hsl = Hsl::try_new(-90.0, 50.0, 50.0).unwrap();
        assert!(approx_eq(hsl.h, 270.0, 1e-9));
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert_eq!(
            Hsl::try_new(0.0, 101.0, 50.0),
            Err(ColorError::InvalidHsl { component: 's', value: 101.0 })
        );
        assert!(Hsl::try_new(0.0, 50.0, -0.5).is_err());
        assert!(Hsl::try_new(f64::NAN, 50.0, 50.0).is_err());
    }

    #[test]
    fn lighten_caps_at_100() {
        let hsl = Hsl::new(0.0, 50.0, 95.0).lighten(20.0);
        assert!(approx_eq(hsl.l, 100.0, 1e-9));
    }

    #[test]
    fn darken_floors_at_0() {
        let hsl = Hsl::new(0.0, 50.0, 5.0).darken(20.0);
        assert!(approx_eq(hsl.l, 0.0, 1e-9));
    }

    #[test]
    fn saturation_clamps_independently() {
        let hsl = Hsl::new(10.0, 95.0, 40.0).saturate(15.0);
        assert!(approx_eq(hsl.s, 100.0, 1e-9));
        assert!(approx_eq(hsl.l, 40.0, 1e-9));
        let hsl = Hsl::new(10.0, 5.0, 40.0).desaturate(25.0);
        assert!(approx_eq(hsl.s, 0.0, 1e-9));
    }

    #[test]
    fn rotate_hue_wraps() {
        let hsl = Hsl::new(300.0, 50.0, 50.0).rotate_hue(90.0);
        assert!(approx_eq(hsl.h, 30.0, 1e-9));
        let hsl = Hsl::new(30.0, 50.0, 50.0).rotate_hue(-90.0);
        assert!(approx_eq(hsl.h, 300.0, 1e-9));
    }

    #[test]
    fn complement_twice_is_identity() {
        let hsl = Hsl::new(123.0, 50.0, 50.0);
        assert!(approx_eq(hsl.complement().complement().h, 123.0, 1e-9));
    }

    #[test]
    fn normalize_hue_never_returns_360() {
        assert!(normalize_hue(-1e-16) < 360.0);
        assert!(approx_eq(normalize_hue(720.0), 0.0, 1e-9));
    }

    #[test]
    fn hue_distance_takes_short_arc() {
        assert!(approx_eq(hue_distance(350.0, 10.0), 20.0, 1e-9));
        assert!(approx_eq(hue_distance(0.0, 180.0), 180.0, 1e-9));
    }

    // ── Rgba ─────────────────────────────────────────────────────────────

    #[test]
    fn rgba_css_literal() {
        let rgba = Rgb::new(255, 208, 208).with_alpha(0.5);
        assert_eq!(rgba.to_css(), "rgba(255, 208, 208, 0.5)");
        assert_eq!(Rgb::new(255, 228, 228).with_alpha(0.15).to_css(), "rgba(255, 228, 228, 0.15)");
    }

    #[test]
    fn rgba_try_new_validates_alpha() {
        assert!(Rgba::try_new(Rgb::BLACK, 0.2).is_ok());
        assert!(Rgba::try_new(Rgb::BLACK, 1.5).is_err());
        assert!(Rgba::try_new(Rgb::BLACK, f64::NAN).is_err());
    }

    #[test]
    fn rgba_from_rgb_is_opaque() {
        assert!(Rgba::from(Rgb::WHITE).is_opaque());
    }
}
