//! Color mapping from widget colors to terminal colors.

use p42_core::Color as WidgetColor;
use ratatui::style::Color;

// --- Fixed host colors ---
pub const DIVIDER: Color = Color::DarkGray;
pub const TEXT_SECONDARY: Color = Color::Gray;

/// Terminal color for a widget color; `None` for [`WidgetColor::Clear`].
///
/// `Primary` maps to the terminal's own default color so trees follow the
/// user's light or dark scheme.
pub fn to_terminal(color: WidgetColor) -> Option<Color> {
    match color {
        WidgetColor::Rgb(r, g, b) => Some(Color::Rgb(r, g, b)),
        WidgetColor::White => Some(Color::White),
        WidgetColor::Black => Some(Color::Black),
        WidgetColor::Primary => Some(Color::Reset),
        WidgetColor::Secondary => Some(TEXT_SECONDARY),
        WidgetColor::Clear => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use p42_core::color::palette;

    #[test]
    fn test_rgb_passes_through() {
        assert_eq!(to_terminal(palette::RED), Some(Color::Rgb(0xFF, 0x25, 0x00)));
        assert_eq!(to_terminal(palette::GREEN), Some(Color::Rgb(0x00, 0x8E, 0x00)));
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(to_terminal(WidgetColor::White), Some(Color::White));
        assert_eq!(to_terminal(WidgetColor::Primary), Some(Color::Reset));
        assert_eq!(to_terminal(WidgetColor::Secondary), Some(TEXT_SECONDARY));
    }

    #[test]
    fn test_clear_has_no_color() {
        assert_eq!(to_terminal(WidgetColor::Clear), None);
    }
}
