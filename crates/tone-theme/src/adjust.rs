//! Seed adjustment — keep extracted colors inside a legible band.
//!
//! Colors pulled from photos are often washed out (near-gray skies,
//! skin tones) or blown out (neon signage). Either extreme produces a
//! tone ramp that is unreadable at one end. The policy here clamps the
//! seed's HSL saturation and lightness into a fixed band before any
//! derivation happens.
//!
//! Values inside the band pass through untouched. Values outside snap to
//! the nearer bound; nothing is rescaled.

use serde::{Deserialize, Serialize};
use tone_color::{Hsl, Rgb};

use crate::config::ConfigError;

/// Saturation/lightness bounds for [`AdjustPolicy::apply`].
///
/// All values are HSL percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustPolicy {
    pub min_saturation: f64,
    pub max_saturation: f64,
    pub min_lightness: f64,
    pub max_lightness: f64,
}

impl AdjustPolicy {
    /// Saturation 40–80, lightness 30–70.
    pub const DEFAULT: Self = Self {
        min_saturation: 40.0,
        max_saturation: 80.0,
        min_lightness: 30.0,
        max_lightness: 70.0,
    };

    /// Check that each bound lies in [0, 100] and each lower bound does
    /// not exceed its upper bound.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPolicy`] describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pairs = [
            ("saturation", self.min_saturation, self.max_saturation),
            ("lightness", self.min_lightness, self.max_lightness),
        ];
        for (name, lo, hi) in pairs {
            let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
            if !in_range(lo) || !in_range(hi) {
                return Err(ConfigError::InvalidPolicy(format!(
                    "{name} bounds must lie in [0, 100], got [{lo}, {hi}]"
                )));
            }
            if lo > hi {
                return Err(ConfigError::InvalidPolicy(format!(
                    "{name} lower bound {lo} exceeds upper bound {hi}"
                )));
            }
        }
        Ok(())
    }

    /// Whether `hsl` already sits inside the band.
    #[must_use]
    pub fn contains(&self, hsl: Hsl) -> bool {
        (self.min_saturation..=self.max_saturation).contains(&hsl.s)
            && (self.min_lightness..=self.max_lightness).contains(&hsl.l)
    }

    /// Clamp an HSL value into the band. Hue is untouched.
    #[must_use]
    pub fn clamp_hsl(&self, hsl: Hsl) -> Hsl {
        Hsl::new(
            hsl.h,
            hsl.s.clamp(self.min_saturation, self.max_saturation),
            hsl.l.clamp(self.min_lightness, self.max_lightness),
        )
    }

    /// Clamp a color's saturation and lightness into the band.
    ///
    /// A color already inside the band is returned as-is, with no
    /// round-trip through HSL.
    #[must_use]
    pub fn apply(&self, color: Rgb) -> Rgb {
        let hsl = color.to_hsl();
        if self.contains(hsl) {
            return color;
        }
        let adjusted = self.clamp_hsl(hsl).to_rgb();
        log::debug!("adjusted seed {color} ({hsl}) -> {adjusted}");
        adjusted
    }
}

impl Default for AdjustPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Clamp `color` with the default policy (saturation 40–80, lightness 30–70).
#[must_use]
pub fn adjust_color(color: Rgb) -> Rgb {
    AdjustPolicy::DEFAULT.apply(color)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
