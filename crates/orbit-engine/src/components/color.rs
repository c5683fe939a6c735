use std::fmt;

use serde::Deserialize;

/// sRGB color with a straight (non-premultiplied) alpha.
///
/// Channels are stored as bytes because every consumer ends up writing a CSS
/// color string; alpha stays a float so twinkle opacities don't quantize.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Create a color from RGB bytes and an alpha in 0.0 - 1.0.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB bytes.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let nibble = |i: usize| {
            u8::from_str_radix(&digits[i..i + 1], 16)
                .ok()
                .map(|n| n * 17)
        };
        match digits.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(
                byte(0)?,
                byte(2)?,
                byte(4)?,
                byte(6)? as f32 / 255.0,
            )),
            _ => None,
        }
    }

    /// CSS `rgba(...)` string. Alpha is clamped to 0.0 - 1.0.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = if self.a.is_nan() { 0.0 } else { self.a.clamp(0.0, 1.0) };
        write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, a)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid hex color: {value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_hex("#4d9de0"), Some(Color::rgb(0x4d, 0x9d, 0xe0)));
        assert_eq!(Color::from_hex("c9b06b"), Some(Color::rgb(0xc9, 0xb0, 0x6b)));
    }

    #[test]
    fn parses_short_and_alpha_hex() {
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        let c = Color::from_hex("#ff000080").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn css_clamps_alpha() {
        assert_eq!(Color::rgba(1, 2, 3, -0.4).to_css(), "rgba(1,2,3,0.000)");
        assert_eq!(Color::rgba(1, 2, 3, 1.7).to_css(), "rgba(1,2,3,1.000)");
        assert_eq!(Color::WHITE.with_alpha(0.06).to_css(), "rgba(255,255,255,0.060)");
    }

    #[test]
    fn deserializes_from_hex_string() {
        let c: Color = serde_json::from_str("\"#e06c4d\"").unwrap();
        assert_eq!(c, Color::rgb(0xe0, 0x6c, 0x4d));
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
