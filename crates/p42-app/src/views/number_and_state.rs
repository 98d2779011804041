//! Number with a trend indicator.

use p42_core::{encode_state, Color, TrendState};

use super::{ROW_INSET, ROW_SPACING, SECONDARY_PADDING};
use crate::tree::{
    capitalize_words, Alignment, Container, EdgeInsets, Font, Image, Node, Stack, Text,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NumberAndStateParams {
    pub period: String,
    pub primary_value: String,
    /// Small text next to the primary value (a unit, for instance)
    pub primary_annotation: Option<String>,
    pub primary_color: Color,
    pub secondary_value: String,
    pub secondary_color: Color,
    pub state: TrendState,
}

pub fn number_and_state(params: &NumberAndStateParams) -> Node {
    let period = capitalize_words(&params.period);

    let mut primary: Vec<Node> = vec![Text::new(params.primary_value.as_str())
        .font(Font::LargeTitle)
        .color(params.primary_color)
        .accessibility_label(format!("Primary value: {}", params.primary_value))
        .into()];
    if let Some(annotation) = &params.primary_annotation {
        primary.push(
            Text::new(annotation.as_str())
                .font(Font::Caption)
                .color(Color::Secondary)
                .into(),
        );
    }

    // The icon is dropped for `None`; both cells share the same padding so
    // the row height does not change.
    let mut secondary: Vec<Node> = Vec::new();
    if params.state.is_visible() {
        let encoding = encode_state(params.state);
        secondary.push(
            Container::new(
                Image::new(encoding.icon)
                    .color(encoding.color)
                    .accessibility_label(format!("Trend: {}", params.state)),
            )
            .padding(EdgeInsets::all(SECONDARY_PADDING))
            .into(),
        );
    }
    secondary.push(
        Container::new(
            Text::new(params.secondary_value.as_str())
                .color(params.secondary_color)
                .accessibility_label(format!("Secondary value: {}", params.secondary_value)),
        )
        .padding(EdgeInsets::all(SECONDARY_PADDING))
        .into(),
    );

    Container::new(
        Stack::vertical(vec![
            Text::new(period.as_str())
                .accessibility_label(format!("Period: {}", period))
                .into(),
            Node::Divider,
            Stack::horizontal(primary).alignment(Alignment::Trailing).into(),
            Stack::horizontal(secondary).into(),
            Node::Divider,
        ])
        .spacing(ROW_SPACING),
    )
    .padding(EdgeInsets::horizontal(ROW_INSET))
    .into()
}
