// SPDX-License-Identifier: MIT
//
// RGB ↔ HSL conversion.
//
// The standard hexcone model: lightness is the midpoint of the largest
// and smallest channel, saturation is the spread relative to how far
// that midpoint sits from the ends, and hue is picked by whichever
// channel is largest.
//
// Both directions are pure and total over valid input. `hsl_to_rgb`
// assumes s and l in [0, 100]; under that precondition every channel
// lands in [0, 255] before rounding.

use crate::color::{Hsl, Rgb, normalize_hue};

/// Convert an [`Rgb`] to [`Hsl`].
///
/// Achromatic input (all channels equal) yields `h = 0, s = 0`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Exact comparison is fine: both come from the same three inputs.
    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(normalize_hue(h / 6.0 * 360.0), s * 100.0, l * 100.0)
}

/// Convert an [`Hsl`] to [`Rgb`], rounding each channel to the nearest
/// integer.
///
/// A hue of exactly 360 is treated as 0.
#[must_use]
#[allow(clippy::float_cmp, clippy::suboptimal_flops)]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        let v = to_u8(l);
        return Rgb::new(v, v, v);
    }

    // Not mul_add: the fused form rounds .5-boundary channels differently.
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Sample one channel of the periodic hue ramp.
///
/// `t` is a phase wrapped into [0, 1). The ramp rises from `p` to `q`
/// over the first sixth, holds at `q` until one half, falls back to `p`
/// by two thirds, and stays at `p` for the rest.
#[inline]
#[allow(clippy::suboptimal_flops)]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Scale a unit value to a byte with round-half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Valid HSL keeps v in [0, 1]; the clamp only absorbs float dust.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        let close = |a: u8, e: u8| a.abs_diff(e) <= 1;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "RGB mismatch: got {actual}, expected {expected}"
        );
    }

    // ── Known values ─────────────────────────────────────────────────────

    #[test]
    fn muted_red_to_hsl() {
        let hsl = rgb_to_hsl(Rgb::new(200, 80, 80));
        assert!(approx_eq(hsl.h, 0.0, 1e-9), "h = {}", hsl.h);
        assert!(approx_eq(hsl.s, 52.17, 0.01), "s = {}", hsl.s);
        assert!(approx_eq(hsl.l, 54.9, 0.05), "l = {}", hsl.l);
    }

    #[test]
    fn black_is_all_zero() {
        let hsl = rgb_to_hsl(Rgb::BLACK);
        assert_eq!(hsl, Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(hsl_to_rgb(hsl), Rgb::BLACK);
    }

    #[test]
    fn white_is_full_lightness() {
        let hsl = rgb_to_hsl(Rgb::WHITE);
        assert!(approx_eq(hsl.l, 100.0, 1e-9));
        assert!(approx_eq(hsl.s, 0.0, 1e-9));
        assert_eq!(hsl_to_rgb(hsl), Rgb::WHITE);
    }

    #[test]
    fn primaries_have_expected_hues() {
        let cases = [
            (Rgb::new(255, 0, 0), 0.0),
            (Rgb::new(255, 255, 0), 60.0),
            (Rgb::new(0, 255, 0), 120.0),
            (Rgb::new(0, 255, 255), 180.0),
            (Rgb::new(0, 0, 255), 240.0),
            (Rgb::new(255, 0, 255), 300.0),
        ];
        for (rgb, hue) in cases {
            let hsl = rgb_to_hsl(rgb);
            assert!(approx_eq(hsl.h, hue, 1e-9), "{rgb}: h = {}", hsl.h);
            assert!(approx_eq(hsl.s, 100.0, 1e-9), "{rgb}: s = {}", hsl.s);
            assert!(approx_eq(hsl.l, 50.0, 1e-9), "{rgb}: l = {}", hsl.l);
        }
    }

    #[test]
    fn red_max_with_blue_above_green_wraps() {
        // g < b in the red branch lands the hue just under 360.
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 10));
        assert!(hsl.h > 350.0 && hsl.h < 360.0, "h = {}", hsl.h);
    }

    #[test]
    fn gray_is_achromatic() {
        let hsl = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert!(hsl.is_achromatic());
        assert!(approx_eq(hsl.h, 0.0, 1e-9));
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 50.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hue_360_equals_hue_0() {
        let a = hsl_to_rgb(Hsl::new(0.0, 60.0, 40.0));
        let b = hsl_to_rgb(Hsl::new(360.0, 60.0, 40.0));
        assert_eq!(a, b);
    }

    #[test]
    fn full_lightness_is_white_regardless_of_hue() {
        assert_eq!(hsl_to_rgb(Hsl::new(200.0, 80.0, 100.0)), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(Hsl::new(200.0, 80.0, 0.0)), Rgb::BLACK);
    }

    #[test]
    fn half_boundary_channel_uses_unfused_arithmetic() {
        let hsl = rgb_to_hsl(Rgb::new(0x00, 0x81, 0x81)).desaturate(15.0).lighten(10.0);
        assert_eq!(hsl_to_rgb(hsl), Rgb::new(0x0d, 0xa7, 0xa7));
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn roundtrip_sample_colors() {
        let samples = [
            Rgb::new(200, 80, 80),
            Rgb::new(12, 200, 99),
            Rgb::new(1, 2, 3),
            Rgb::new(254, 253, 1),
            Rgb::new(77, 0, 255),
            Rgb::new(128, 128, 129),
        ];
        for rgb in samples {
            assert_rgb_close(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);
        }
    }

    // ── hue_to_channel ───────────────────────────────────────────────────

    #[test]
    fn hue_ramp_segments() {
        let (p, q) = (0.2, 0.8);
        assert!(approx_eq(hue_to_channel(p, q, 0.0), p, 1e-12));
        assert!(approx_eq(hue_to_channel(p, q, 1.0 / 12.0), 0.5, 1e-12));
        assert!(approx_eq(hue_to_channel(p, q, 0.3), q, 1e-12));
        assert!(approx_eq(hue_to_channel(p, q, 0.9), p, 1e-12));
    }

    #[test]
    fn hue_ramp_wraps_phase() {
        let (p, q) = (0.1, 0.9);
        assert!(approx_eq(hue_to_channel(p, q, 1.3), hue_to_channel(p, q, 0.3), 1e-12));
        assert!(approx_eq(hue_to_channel(p, q, -0.2), hue_to_channel(p, q, 0.8), 1e-12));
    }
}
