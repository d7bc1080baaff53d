//! Theme assembly — one seed, every derived set, ready to serialize.

use serde::Serialize;
use tone_color::Rgb;

use crate::config::ThemeConfig;
use crate::scheme::{ColorScheme, generate_color_scheme};
use crate::tonal::FullColorScheme;

/// A complete theme derived from one seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    /// The color as supplied by the caller.
    pub seed: Rgb,
    /// The color every set is derived from: the seed after the
    /// adjustment policy, or the seed itself when adjustment is off.
    pub base: Rgb,
    pub scheme: ColorScheme,
    #[serde(flatten)]
    pub full: FullColorScheme,
}

impl Theme {
    /// Derive a theme from `seed` under `config`.
    #[must_use]
    pub fn derive(seed: Rgb, config: &ThemeConfig) -> Self {
        let base = if config.adjust { config.policy.apply(seed) } else { seed };
        log::debug!("deriving theme: seed {seed}, base {base}, dark css {:?}", config.dark_css);

        Self {
            seed,
            base,
            scheme: generate_color_scheme(base),
            full: FullColorScheme::generate(base, config.dark_css),
        }
    }

    /// Render the light and dark rule blocks with the configured selectors.
    #[must_use]
    pub fn to_css(&self, config: &ThemeConfig) -> String {
        self.full.css_variables.to_css(&config.selector_light, &config.selector_dark)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
