//! # tone-theme — tonal theming engine
//!
//! Derives a complete light/dark CSS theme from one seed color. Every
//! step is a pure function over `Copy` color values; there is no shared
//! state and nothing here touches a document or window.
//!
//! # Architecture
//!
//! ```text
//! image bytes ──► extract.rs: SeedExtractor (histogram, optional)
//!     │
//!     ▼
//! seed Rgb
//!     │
//!     ▼
//! adjust.rs:  clamp saturation/lightness into a legible band
//!     │
//!     ├──► scheme.rs: primary / complement / dark / light
//!     │
//!     ▼
//! tonal.rs:   7-step tone ramp + shadows + dark-mode alpha overlays
//!     │
//!     ▼
//! css.rs:     `--red-*` / `--color-*` custom properties (light + dark)
//!     │
//!     ▼
//! theme.rs:   Theme bundle, driven by config.rs
//! ```
//!
//! # Color Space
//!
//! All adjustments happen in HSL. Values are converted back to 8-bit RGB
//! at the end of each derivation, so every output is a plain `Rgb` or
//! `Rgba` ready for hex/CSS serialization.

pub mod adjust;
pub mod config;
pub mod css;
pub mod extract;
pub mod scheme;
pub mod theme;
pub mod tonal;

pub use adjust::{AdjustPolicy, adjust_color};
pub use config::{ConfigError, DarkCss, ThemeConfig};
pub use css::CssVariables;
pub use extract::{ExtractError, HistogramExtractor, SeedExtractor};
pub use scheme::{ColorScheme, generate_color_scheme};
pub use theme::Theme;
pub use tonal::{FullColorScheme, ShadowKey, ToneKey, generate_full_color_scheme};
