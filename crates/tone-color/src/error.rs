// SPDX-License-Identifier: MIT
//
// Errors raised at the color-value boundary.

use thiserror::Error;

/// Malformed color input.
///
/// Raised only by the fallible constructors ([`Rgb::from_channels`],
/// [`Hsl::try_new`], [`parse_hex`]). Conversions between valid values
/// never fail.
///
/// [`Rgb::from_channels`]: crate::Rgb::from_channels
/// [`Hsl::try_new`]: crate::Hsl::try_new
/// [`parse_hex`]: crate::parse_hex
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// An RGB channel was non-finite or outside [0, 255].
    #[error("invalid color: channel '{channel}' = {value} is outside [0, 255]")]
    InvalidColor {
        /// Channel name (`r`, `g`, `b`, or `a` for alpha).
        channel: char,
        /// The offending value.
        value: f64,
    },

    /// An HSL component was non-finite or outside its range.
    #[error("invalid HSL: component '{component}' = {value} is out of range")]
    InvalidHsl {
        /// Component name (`h`, `s`, or `l`).
        component: char,
        /// The offending value.
        value: f64,
    },

    /// A string could not be parsed as a hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}
