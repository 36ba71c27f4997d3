//! Hex string parsing for 8-bit sRGB colors
//!
//! Accepts CSS-style notation with or without a leading `#`:
//! `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`, case-insensitive.

use std::str::FromStr;

use super::quantized::{SrgbU8, SrgbaU8};
use crate::error::{Error, Result};

/// Parse a hex color into `[r, g, b, a]`, defaulting alpha to 255
fn parse_channels(input: &str) -> Result<[u8; 4]> {
    let invalid = || Error::InvalidHex(input.to_string());

    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

    // Expand one nibble to a byte: 0xA -> 0xAA
    let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 0x11;

    match digits.len() {
        3 => Ok([nibble(8), nibble(4), nibble(0), 0xFF]),
        4 => Ok([nibble(12), nibble(8), nibble(4), nibble(0)]),
        6 => Ok(SrgbaU8::from_hex(value << 8 | 0xFF).to_array()),
        8 => Ok(SrgbaU8::from_hex(value).to_array()),
        _ => Err(invalid()),
    }
}

impl FromStr for SrgbU8 {
    type Err = Error;

    /// Parse `#RGB` or `#RRGGBB`
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !matches!(digits.len(), 3 | 6) {
            return Err(Error::InvalidHex(s.to_string()));
        }
        let [r, g, b, _] = parse_channels(s)?;
        Ok(Self::new(r, g, b))
    }
}

impl FromStr for SrgbaU8 {
    type Err = Error;

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`
    fn from_str(s: &str) -> Result<Self> {
        parse_channels(s).map(Self::from)
    }
}
