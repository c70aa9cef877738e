//! Opaque RGB colors
//!
//! Host color inputs hand us `#rrggbb` strings; the surface stores ABGR packed
//! `u32` (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA]) so the pixel buffer
//! copies straight into a canvas `ImageData`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::PadError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (case-insensitive, surrounding whitespace ignored)
    pub fn parse_hex(text: &str) -> Result<Self, PadError> {
        let invalid = || PadError::InvalidColor(text.to_string());

        let digits = text.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
                match (channel(0), channel(2), channel(4)) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::rgb(r, g, b)),
                    _ => Err(invalid()),
                }
            }
            3 => {
                // #abc expands to #aabbcc
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
                match (channel(0), channel(1), channel(2)) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::rgb(r, g, b)),
                    _ => Err(invalid()),
                }
            }
            _ => Err(invalid()),
        }
    }

    /// Lowercase `#rrggbb`, the form a color input reports
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | self.r as u32
    }

    /// Alpha is dropped; the surface is always opaque.
    #[inline]
    pub fn from_abgr(packed: u32) -> Self {
        Self {
            r: (packed & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: ((packed >> 16) & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::parse_hex("#009578").unwrap(), Color::rgb(0x00, 0x95, 0x78));
        assert_eq!(Color::parse_hex("#FFF").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_hex("  #a1B2c3 ").unwrap(), Color::rgb(0xa1, 0xb2, 0xc3));
    }

    #[test]
    fn rejects_malformed_hex() {
        for text in ["", "#", "009578", "#00957", "#0095788", "#gg0000", "#+1+2+3"] {
            assert!(Color::parse_hex(text).is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn hex_output_is_lowercase() {
        assert_eq!(Color::rgb(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
    }

    #[test]
    fn abgr_packing_matches_canvas_byte_order() {
        let c = Color::rgb(0x11, 0x22, 0x33);
        let packed = c.to_abgr();
        assert_eq!(packed, 0xFF33_2211);
        assert_eq!(packed.to_le_bytes(), [0x11, 0x22, 0x33, 0xFF]);
        assert_eq!(Color::from_abgr(packed), c);
    }
}
