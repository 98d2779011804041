//! Footer: topic text with an optional trailing fragment.

use p42_core::Color;

use crate::tree::{Container, EdgeInsets, Font, FontWeight, Node, Stack, Text};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterOptions {
    /// Default: footnote
    pub font: Font,
    /// Default: light
    pub weight: FontWeight,
    /// Default: secondary
    pub label_color: Color,
}

impl Default for FooterOptions {
    fn default() -> Self {
        Self {
            font: Font::Footnote,
            weight: FontWeight::Light,
            label_color: Color::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterParams {
    pub topic: String,
    /// Rendered as given after the topic
    pub trailing: Option<Node>,
    pub options: FooterOptions,
}

impl FooterParams {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            trailing: None,
            options: FooterOptions::default(),
        }
    }

    pub fn trailing(mut self, node: impl Into<Node>) -> Self {
        self.trailing = Some(node.into());
        self
    }

    pub fn options(mut self, options: FooterOptions) -> Self {
        self.options = options;
        self
    }
}

pub fn footer(params: &FooterParams) -> Node {
    let opts = &params.options;
    let mut row: Vec<Node> = vec![
        Text::new(params.topic.as_str())
            .font(opts.font)
            .weight(opts.weight)
            .color(opts.label_color)
            .into(),
        Node::Spacer,
    ];
    if let Some(trailing) = &params.trailing {
        row.push(trailing.clone());
    }

    Container::new(Stack::horizontal(row))
        .padding(EdgeInsets::vertical(4))
        .fill_width()
        .into()
}

/// The usual trailing fragment: a dimmed "last update" stamp in the footer's
/// font and color.
pub fn last_update(text: impl Into<String>, options: &FooterOptions) -> Node {
    Text::new(text)
        .font(options.font)
        .color(options.label_color)
        .dimmed()
        .into()
}
