//! Theme configuration.
//!
//! A small JSON document controlling how a seed becomes a theme. Every
//! field is optional; the defaults reproduce the stock derivation
//! (adjust the seed with the 40–80 / 30–70 policy, hand-authored dark
//! CSS).
//!
//! ```json
//! {
//!   "version": 1,
//!   "adjust": true,
//!   "policy": { "min_saturation": 40, "max_saturation": 80 },
//!   "dark_css": "derived",
//!   "selector_light": ":root",
//!   "selector_dark": "[data-theme=\"dark\"]"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adjust::AdjustPolicy;

/// Current configuration file format version.
pub const CONFIG_VERSION: u32 = 1;

/// Errors loading or validating a [`ThemeConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error reading the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Adjustment bounds are out of range or inverted
    #[error("Invalid adjustment policy: {0}")]
    InvalidPolicy(String),

    /// File was written by a newer, incompatible version
    #[error("Unsupported config version {found}")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
    },
}

/// How the dark CSS map is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DarkCss {
    /// Fixed literals, identical for every seed.
    #[default]
    HandAuthored,
    /// Built from the computed dark-mode variants of the seed.
    Derived,
}

/// Configuration for [`Theme::derive`](crate::Theme::derive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Version of the configuration file format
    pub version: u32,
    /// Run the adjustment policy on the seed before deriving
    pub adjust: bool,
    /// Saturation/lightness band for the adjustment policy
    pub policy: AdjustPolicy,
    /// Dark CSS emission mode
    pub dark_css: DarkCss,
    /// Selector for the light rule block
    pub selector_light: String,
    /// Selector for the dark rule block
    pub selector_dark: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            adjust: true,
            policy: AdjustPolicy::DEFAULT,
            dark_css: DarkCss::HandAuthored,
            selector_light: ":root".to_owned(),
            selector_dark: "[data-theme=\"dark\"]".to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed JSON, or a validation error from
    /// [`ThemeConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`ThemeConfig::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        log::debug!("loaded config from {}", path.display());
        Self::from_json(&json)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the version and the adjustment policy bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedVersion`] or [`ConfigError::InvalidPolicy`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion { found: self.version });
        }
        self.policy.validate()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
