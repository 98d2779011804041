//! Number with a status badge.

use p42_core::{encode_status, AlertStatus, BadgeContent, Color};

use super::{badge, BadgeOptions, ROW_INSET, ROW_SPACING, SECONDARY_PADDING};
use crate::tree::{capitalize_words, Container, EdgeInsets, Font, Node, Stack, Text};

#[derive(Debug, Clone, PartialEq)]
pub struct NumberAndStatusParams {
    pub period: String,
    pub primary_value: String,
    pub primary_color: Color,
    pub secondary_label: Option<String>,
    pub secondary_value: String,
    pub status: AlertStatus,
}

pub fn number_and_status(params: &NumberAndStatusParams) -> Node {
    let period = capitalize_words(&params.period);
    let colors = encode_status(params.status);

    let mut secondary: Vec<Node> = Vec::new();
    if let Some(label) = &params.secondary_label {
        secondary.push(
            Container::new(Text::new(label.as_str()).color(Color::Secondary))
                .padding(EdgeInsets::all(SECONDARY_PADDING))
                .accessibility_label(format!("Secondary label: {}", label))
                .into(),
        );
    }
    secondary.push(
        badge(
            BadgeContent::text(params.secondary_value.as_str()),
            BadgeOptions::default()
                .colors(colors.foreground, colors.background)
                .padding(SECONDARY_PADDING),
        )
        .labelled(format!("Secondary value: {}", params.secondary_value)),
    );

    Container::new(
        Stack::vertical(vec![
            Text::new(period.as_str())
                .accessibility_label(format!("Period: {}", period))
                .into(),
            Node::Divider,
            Text::new(params.primary_value.as_str())
                .font(Font::LargeTitle)
                .color(params.primary_color)
                .accessibility_label(format!("Primary value: {}", params.primary_value))
                .into(),
            Stack::horizontal(secondary).into(),
            Node::Divider,
        ])
        .spacing(ROW_SPACING),
    )
    .padding(EdgeInsets::horizontal(ROW_INSET))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Background;
    use p42_core::{background_for, foreground_for};

    fn params(status: AlertStatus) -> NumberAndStatusParams {
        NumberAndStatusParams {
            period: "today".into(),
            primary_value: "1.204".into(),
            primary_color: Color::Primary,
            secondary_label: Some("target".into()),
            secondary_value: "87%".into(),
            status,
        }
    }

    fn secondary_badge(node: &Node) -> Container {
        match node.find_labelled("Secondary value: 87%") {
            Some(Node::Container(c)) => c.clone(),
            other => panic!("expected badge container, got {:?}", other),
        }
    }

    #[test]
    fn test_renders_all_parts() {
        let node = number_and_status(&params(AlertStatus::Normal));
        assert_eq!(node.texts(), vec!["Today", "1.204", "target", "87%"]);
    }

    #[test]
    fn test_badge_colors_follow_status() {
        for status in AlertStatus::ALL {
            let node = number_and_status(&params(status));
            let badge = secondary_badge(&node);
            assert_eq!(badge.background, Background::solid(background_for(status)));
            assert!(
                matches!(badge.child.as_ref(), Node::Text(t) if t.color == foreground_for(status))
            );
        }
    }

    #[test]
    fn test_alert_badge_is_red() {
        let badge = secondary_badge(&number_and_status(&params(AlertStatus::Alert)));
        assert_eq!(
            badge.background,
            Background::Solid {
                color: Color::from_hex(0xFF2500)
            }
        );
    }

    #[test]
    fn test_secondary_label_is_optional() {
        let mut p = params(AlertStatus::Warning);
        p.secondary_label = None;
        let node = number_and_status(&p);
        assert_eq!(node.texts(), vec!["Today", "1.204", "87%"]);
    }
}
