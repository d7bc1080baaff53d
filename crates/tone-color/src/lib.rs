// SPDX-License-Identifier: MIT
//
// tone-color — color value types for tonekit.
//
// Three small `Copy` values and the math between them:
//
//   Rgb  ↔  Hsl        (convert.rs)
//   Rgb  →  "rrggbb"   (hex.rs)
//   Rgba →  "rgba(…)"  (color.rs)
//
// Nothing here allocates except hex/CSS string output, and nothing here
// clamps a caller's input. Out-of-range channels are rejected at the
// boundary constructors with a `ColorError`; clamping is a named policy
// that lives in tone-theme.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod color;
pub mod convert;
pub mod error;
pub mod hex;

pub use color::{Hsl, Rgb, Rgba};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use error::ColorError;
pub use hex::{parse_hex, rgb_to_hex};
