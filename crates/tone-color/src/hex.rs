// SPDX-License-Identifier: MIT
//
// Hex codec. Encoding is the presentation path (every CSS variable goes
// through it); parsing is the CLI/config input path.

use crate::color::Rgb;
use crate::error::ColorError;

/// Encode as six lowercase hex digits in r, g, b order, without `#`.
///
/// ```
/// use tone_color::{Rgb, rgb_to_hex};
///
/// assert_eq!(rgb_to_hex(Rgb::new(200, 80, 80)), "c85050");
/// assert_eq!(rgb_to_hex(Rgb::new(0, 10, 255)), "000aff");
/// ```
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb.to_array();
    format!("{r:02x}{g:02x}{b:02x}")
}

/// Parse `#rgb`, `#rrggbb`, or either form without the `#`.
/// Digits are case-insensitive.
///
/// # Errors
///
/// [`ColorError::InvalidHex`] for any other length or a non-hex digit.
pub fn parse_hex(s: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidHex(s.to_owned());
    let digits = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());
    let bytes = digits.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0]).ok_or_else(invalid)?;
            let g = parse_hex_digit(bytes[1]).ok_or_else(invalid)?;
            let b = parse_hex_digit(bytes[2]).ok_or_else(invalid)?;
            Ok(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2]).ok_or_else(invalid)?;
            let g = parse_hex_byte(&bytes[2..4]).ok_or_else(invalid)?;
            let b = parse_hex_byte(&bytes[4..6]).ok_or_else(invalid)?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(invalid()),
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
