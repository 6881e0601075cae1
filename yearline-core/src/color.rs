//! RGB colors exchanged as `#rrggbb` hex text.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::YearlineError;

/// An RGB color. Serialized as the 7-character `#rrggbb` form that
/// collaborators (config files, snapshots, terminals) exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = YearlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|rest| rest.len() == 6)
            .ok_or_else(|| YearlineError::InvalidColor(s.to_string()))?;

        let parse = |range| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| YearlineError::InvalidColor(s.to_string()))
        };

        Ok(Color {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!("#4caf50".parse::<Color>().unwrap(), Color::new(0x4c, 0xaf, 0x50));
        assert_eq!("#FF9800".parse::<Color>().unwrap(), Color::new(0xff, 0x98, 0x00));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("4caf50".parse::<Color>().is_err());
        assert!("#4caf5".parse::<Color>().is_err());
        assert!("#4caf50ff".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::new(0x4c, 0xaf, 0x50).to_string(), "#4caf50");
        assert_eq!(Color::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn serde_as_string() {
        let color = Color::new(0x21, 0x96, 0xf3);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#2196f3\"");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), color);
    }
}
