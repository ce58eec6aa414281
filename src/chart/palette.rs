use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default series palette, assigned by field position
pub const COLOR_PALETTE: [Color; 12] = [
    Color::rgb(0xfc, 0x13, 0x02), // Red
    Color::rgb(0x00, 0x00, 0x8b), // Dark blue
    Color::rgb(0x22, 0x8b, 0x22), // Forest green
    Color::rgb(0xff, 0xe0, 0x33), // Yellow
    Color::rgb(0x99, 0x32, 0xcc), // Dark orchid
    Color::rgb(0xff, 0x8c, 0x00), // Dark orange
    Color::rgb(0x20, 0xb2, 0xaa), // Light sea green
    Color::rgb(0x41, 0x69, 0xe1), // Royal blue
    Color::rgb(0xdc, 0x14, 0x3c), // Crimson
    Color::rgb(0x8b, 0x45, 0x13), // Saddle brown
    Color::rgb(0x00, 0xce, 0xd1), // Dark turquoise
    Color::rgb(0xff, 0x69, 0xb4), // Hot pink
];

/// RGBA colour, written as `#rrggbb` (or `#rrggbbaa` when not opaque).
///
/// The default, all zeros, is transparent and means "unassigned".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b, 255])
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.0;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Colour for the series at `index`; wraps around the palette.
///
/// Returns `None` only for an empty palette.
pub fn color_for_index(palette: &[Color], index: usize) -> Option<Color> {
    if palette.is_empty() {
        None
    } else {
        Some(palette[index % palette.len()])
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid colour '{0}', expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color([channel(0)?, channel(2)?, channel(4)?, alpha]))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        assert_eq!(COLOR_PALETTE[0].to_hex(), "#fc1302");
        assert_eq!("#00008B".parse::<Color>().unwrap(), COLOR_PALETTE[1]);
        assert_eq!("#11223380".parse::<Color>().unwrap(), Color([0x11, 0x22, 0x33, 0x80]));
        assert_eq!(Color([0x11, 0x22, 0x33, 0x80]).to_hex(), "#11223380");
    }

    #[test]
    fn rejects_malformed_colours() {
        assert_eq!(
            "blue".parse::<Color>().unwrap_err().to_string(),
            "invalid colour 'blue', expected #rrggbb or #rrggbbaa"
        );
        for bad in ["fc1302", "#fc13", "#gg1302", "", "#", "#fc1302a"] {
            assert!(bad.parse::<Color>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(color_for_index(&COLOR_PALETTE, 0), Some(COLOR_PALETTE[0]));
        assert_eq!(color_for_index(&COLOR_PALETTE, 12), Some(COLOR_PALETTE[0]));
        assert_eq!(color_for_index(&COLOR_PALETTE, 25), Some(COLOR_PALETTE[1]));
        assert_eq!(color_for_index(&[], 3), None);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&COLOR_PALETTE[2]).unwrap();
        assert_eq!(json, r##""#228b22""##);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, COLOR_PALETTE[2]);
        assert!(serde_json::from_str::<Color>(r#""red""#).is_err());
    }
}
