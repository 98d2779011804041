//! Style builders for layout tree nodes.

use p42_app::tree::{Font, FontWeight, Image, Text};
use p42_core::Color as WidgetColor;
use ratatui::style::{Modifier, Style};

use super::palette;

// --- Text styles ---

/// Foreground style of a text node. Never sets a background, so text drawn
/// over a container keeps the container's fill.
pub fn text(text: &Text) -> Style {
    let mut style = foreground(text.color);
    let bold = matches!(text.font, Font::LargeTitle | Font::Title | Font::Headline)
        || text.weight.is_emphasised();
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if text.font == Font::LargeTitle {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if text.dimmed || text.weight == FontWeight::Light {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

pub fn image(image: &Image) -> Style {
    foreground(image.color)
}

pub fn divider() -> Style {
    Style::default().fg(palette::DIVIDER)
}

// --- Color styles ---

pub fn foreground(color: WidgetColor) -> Style {
    match palette::to_terminal(color) {
        Some(color) => Style::default().fg(color),
        None => Style::default(),
    }
}

pub fn background(color: WidgetColor) -> Style {
    match palette::to_terminal(color) {
        Some(color) => Style::default().bg(color),
        None => Style::default(),
    }
}
