//! Hex color values used for post tinting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EditorError, EditorResult};

/// A validated sRGB color, written as `#RRGGBB`.
///
/// Parsing accepts the CSS shorthand `#RGB` as well, but the value always
/// displays (and serializes) in the long uppercase form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RGB` or `#RRGGBB` string (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn parse(input: &str) -> EditorResult<Self> {
        let invalid = || EditorError::InvalidColor {
            input: input.to_string(),
        };

        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let d = digits.as_bytes();
                // 0xF -> 0xFF
                let expand = |b: u8| hex_value(b) * 17;
                Ok(Self::from_rgb(expand(d[0]), expand(d[1]), expand(d[2])))
            }
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())
                };
                Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => Err(invalid()),
        }
    }

    /// The (r, g, b) components.
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Value of a single ASCII hex digit. Callers check `is_ascii_hexdigit` first.
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
