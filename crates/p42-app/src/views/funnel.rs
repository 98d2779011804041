//! Funnel card: ordered percentage rows with proportional fills.

use p42_core::{Color, FunnelItem};

use super::ROW_BADGE_DIAMETER;
use crate::tree::{
    Alignment, Background, Container, EdgeInsets, Font, FontWeight, Image, Node, Shape, Stack,
    Text,
};

/// Width of the right-aligned percentage column
pub const PERCENT_COLUMN_WIDTH: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunnelOptions {
    /// Format percentages as `"25%"` rather than `"25"` (default: true)
    pub show_percent_sign: bool,
    /// Vertical gap between rows (default: 2)
    pub row_spacing: u16,
}

impl Default for FunnelOptions {
    fn default() -> Self {
        Self {
            show_percent_sign: true,
            row_spacing: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunnelParams {
    pub title: Option<String>,
    /// Rendered in this order
    pub items: Vec<FunnelItem>,
    pub footer_tag: Option<String>,
    pub options: FunnelOptions,
}

impl FunnelParams {
    pub fn new(items: Vec<FunnelItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn footer_tag(mut self, tag: impl Into<String>) -> Self {
        self.footer_tag = Some(tag.into());
        self
    }
}

/// Whole-number percentage of an already clamped value
pub fn format_percentage(percentage: f64, show_percent_sign: bool) -> String {
    if show_percent_sign {
        format!("{:.0}%", percentage)
    } else {
        format!("{:.0}", percentage)
    }
}

/// One funnel row, keyed by the item id
pub fn funnel_row(item: &FunnelItem, options: &FunnelOptions) -> Node {
    let percentage = item.clamped_percentage();
    let text = format_percentage(percentage, options.show_percent_sign);

    let icon = Container::new(Image::new(item.icon.clone()).color(item.icon_color))
        .shape(Shape::Circle)
        .background(Background::solid(item.color))
        .width(ROW_BADGE_DIAMETER)
        .height(ROW_BADGE_DIAMETER)
        .alignment(Alignment::Center);

    Container::new(
        Stack::horizontal(vec![
            icon.into(),
            Container::new(Text::new(text.as_str()).weight(FontWeight::Semibold))
                .width(PERCENT_COLUMN_WIDTH)
                .alignment(Alignment::Trailing)
                .into(),
            Container::new(Text::new(item.label.as_str()).font(Font::Footnote))
                .padding(EdgeInsets::horizontal(4))
                .into(),
            Node::Spacer,
        ])
        .spacing(4),
    )
    .background(Background::proportional(item.color, percentage / 100.0))
    .fill_width()
    .key(item.id.as_str())
    .accessibility_label(format!("{}: {}", item.label, text))
    .into()
}

pub fn funnel(params: &FunnelParams) -> Node {
    let opts = &params.options;
    let mut column: Vec<Node> = Vec::with_capacity(params.items.len() + 2);

    if let Some(title) = &params.title {
        column.push(
            Text::new(title.as_str())
                .font(Font::Headline)
                .weight(FontWeight::Semibold)
                .into(),
        );
    }
    column.extend(params.items.iter().map(|item| funnel_row(item, opts)));
    if let Some(tag) = &params.footer_tag {
        column.push(
            Stack::horizontal(vec![
                Node::Spacer,
                Text::new(tag.as_str())
                    .font(Font::Caption)
                    .color(Color::Secondary)
                    .into(),
            ])
            .into(),
        );
    }

    tracing::trace!(rows = params.items.len(), "built funnel");
    Stack::vertical(column)
        .spacing(opts.row_spacing)
        .alignment(Alignment::Leading)
        .into()
}
