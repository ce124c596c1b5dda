use std::{fmt::Display, str::FromStr};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

lazy_static::lazy_static! {
    static ref HEX6_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
    static ref HEX3_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])$").unwrap();
    static ref RGB_REGEX: Regex = Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap();
}

/// A cell color, stored as packed 8 bit RGB.
///
/// Equality is exact on the three channels, so colors parsed from different
/// spellings (`#FFF`, `#ffffff`, `rgb(255, 255, 255)`, `white`) compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Packed `0x00RRGGBB` value
    pub fn to_u32(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Canonical lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Parses a color from text.
    ///
    /// Accepts `#rrggbb`, `rrggbb`, `#rgb`, `rgb(r, g, b)` and the names
    /// `white` / `black`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidHexColor` for anything else, including
    /// `rgb()` channels above 255.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let text = hex.trim();
        if text.eq_ignore_ascii_case("white") {
            return Ok(Color::WHITE);
        }
        if text.eq_ignore_ascii_case("black") {
            return Ok(Color::BLACK);
        }

        if let Some(cap) = HEX6_REGEX.captures(text) {
            let (_, [r, g, b]) = cap.extract();
            return Ok(Color::new(parse_hex_channel(r, hex)?, parse_hex_channel(g, hex)?, parse_hex_channel(b, hex)?));
        }

        if let Some(cap) = HEX3_REGEX.captures(text) {
            // #abc is shorthand for #aabbcc
            let (_, [r, g, b]) = cap.extract();
            let r = parse_hex_channel(r, hex)?;
            let g = parse_hex_channel(g, hex)?;
            let b = parse_hex_channel(b, hex)?;
            return Ok(Color::new(r * 0x11, g * 0x11, b * 0x11));
        }

        if let Some(cap) = RGB_REGEX.captures(text) {
            let (_, [r, g, b]) = cap.extract();
            return Ok(Color::new(parse_dec_channel(r, hex)?, parse_dec_channel(g, hex)?, parse_dec_channel(b, hex)?));
        }

        Err(EngineError::invalid_hex_color(hex))
    }
}

fn parse_hex_channel(digits: &str, source: &str) -> Result<u8> {
    u8::from_str_radix(digits, 16).map_err(|_| EngineError::invalid_hex_color(source))
}

fn parse_dec_channel(digits: &str, source: &str) -> Result<u8> {
    digits.parse::<u8>().map_err(|_| EngineError::invalid_hex_color(source))
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> String {
        value.to_hex()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::new(value.0, value.1, value.2)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(value: Color) -> (u8, u8, u8) {
        (value.r, value.g, value.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color::new(value[0], value[1], value[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> [u8; 3] {
        [value.r, value.g, value.b]
    }
}
