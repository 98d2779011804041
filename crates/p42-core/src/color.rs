//! Color vocabulary shared by every component.
//!
//! Besides plain RGB values there are a few semantic colors whose concrete
//! value is decided by the host (`Primary`, `Secondary`), and `Clear`, the
//! "no color" sentinel. `Clear` never compares equal to a real color.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A presentation color.
///
/// Serializes as `"#rrggbb"` for RGB values and as the lowercase name for the
/// semantic variants (`"white"`, `"black"`, `"primary"`, `"secondary"`,
/// `"clear"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Rgb(u8, u8, u8),
    White,
    Black,
    /// Inherited default text color
    #[default]
    Primary,
    /// De-emphasised text color
    Secondary,
    /// No color at all; backgrounds are left unpainted
    Clear,
}

impl Color {
    /// Build an RGB color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Color::Rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// The `0xRRGGBB` value, if this is an RGB color
    pub const fn to_hex(self) -> Option<u32> {
        match self {
            Color::Rgb(r, g, b) => Some(((r as u32) << 16) | ((g as u32) << 8) | b as u32),
            _ => None,
        }
    }

    pub const fn is_clear(self) -> bool {
        matches!(self, Color::Clear)
    }

    /// Parse `#rrggbb` / `rrggbb` or one of the semantic names
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "white" => return Some(Color::White),
            "black" => return Some(Color::Black),
            "primary" => return Some(Color::Primary),
            "secondary" => return Some(Color::Secondary),
            "clear" | "none" => return Some(Color::Clear),
            _ => {}
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Color::from_hex)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
            Color::Primary => write!(f, "primary"),
            Color::Secondary => write!(f, "secondary"),
            Color::Clear => write!(f, "clear"),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value).ok_or_else(|| format!("invalid color: {:?}", value))
    }
}

/// Named colors used as component defaults.
pub mod palette {
    use super::Color;

    pub const GREEN: Color = Color::from_hex(0x008E00);
    pub const RED: Color = Color::from_hex(0xFF2500);
    pub const AMBER: Color = Color::from_hex(0xFDC209);
    pub const SYSTEM_BLUE: Color = Color::from_hex(0x007AFF);
    pub const SYSTEM_GRAY: Color = Color::from_hex(0x8E8E93);
}
