//! Badge primitive: one piece of text or icon in a padded, filled capsule.

use p42_core::color::palette;
use p42_core::{BadgeContent, Color};

use crate::tree::{Background, Container, EdgeInsets, Font, Image, Node, Shape, Text};

/// Visual options for [`badge`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeOptions {
    /// Text/icon color (default: white)
    pub foreground: Color,
    /// Fill color (default: system blue); `Clear` leaves it unpainted
    pub background: Color,
    /// Default: body
    pub font: Font,
    /// Default: 10 on every edge
    pub padding: EdgeInsets,
    /// Default: capsule
    pub shape: Shape,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            background: palette::SYSTEM_BLUE,
            font: Font::Body,
            padding: EdgeInsets::all(10),
            shape: Shape::Capsule,
        }
    }
}

impl BadgeOptions {
    pub fn colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = EdgeInsets::all(padding);
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }
}

/// Build a badge node.
///
/// Text badges are labelled with their text for accessibility; icon badges
/// carry no text at all.
pub fn badge(content: BadgeContent, options: BadgeOptions) -> Node {
    let container = match content {
        BadgeContent::Text(text) => Container::new(
            Text::new(text.clone())
                .font(options.font)
                .color(options.foreground),
        )
        .accessibility_label(text),
        BadgeContent::Icon(icon) => Container::new(Image::new(icon).color(options.foreground)),
    };

    container
        .padding(options.padding)
        .background(Background::solid(options.background))
        .shape(options.shape)
        .into()
}
