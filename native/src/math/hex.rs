use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to 0.0-1.0.
    pub fn normalized(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|v| v as f64 / 255.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex_rgb(s)
    }
}

/// Parse `#rrggbb` or `rrggbb` (any case) into RGB channels.
/// Exactly 6 ASCII hex digits must remain after stripping one leading `#`.
pub fn parse_hex_rgb(hex: &str) -> Result<Rgb> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix tolerates a leading '+', so check the digits first
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColorFormat(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&raw[i..i + 2], 16).map_err(|_| Error::InvalidColorFormat(hex.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}
