//! Metric summary card: three dashboard rows and a footer tag.
//!
//! Each row leads with a status badge picked by [`select_badge`]:
//!
//! 1. `show_arrow` set: trend arrow colored by the row's [`TrendState`]
//! 2. otherwise, with a delay and a threshold: clock badge when
//!    `delay >= threshold`, an empty placeholder when below
//! 3. otherwise: empty placeholder
//!
//! The placeholder has the badge's width so values line up across rows.

use std::sync::LazyLock;

use p42_core::color::palette;
use p42_core::{encode_state, encode_status, icon, AlertStatus, BadgeContent, Color, TrendState};
use regex::Regex;

use super::{badge, BadgeOptions, ROW_BADGE_DIAMETER};
use crate::tree::{
    Alignment, Background, Container, EdgeInsets, Font, FontWeight, Image, Node, Shape, Size,
    Stack, Text,
};

/// Width of the right-aligned value column
pub const VALUE_COLUMN_WIDTH: u16 = 60;

static DELAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*([a-zA-Z]*)\s*$").expect("Invalid delay pattern regex")
});

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
    pub show_arrow: bool,
    pub state: TrendState,
    /// Pre-formatted delay such as `"20m"`, `"45s"` or `"2h"`
    pub delay: Option<String>,
}

impl MetricRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            show_arrow: false,
            state: TrendState::None,
            delay: None,
        }
    }

    pub fn arrow(mut self, state: TrendState) -> Self {
        self.show_arrow = true;
        self.state = state;
        self
    }

    pub fn delay(mut self, delay: impl Into<String>) -> Self {
        self.delay = Some(delay.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummaryParams {
    /// Today, yesterday and average, top to bottom
    pub rows: [MetricRow; 3],
    pub footer_tag: String,
    /// Delay in minutes at which the clock badge appears
    pub delay_threshold: Option<f64>,
}

impl MetricSummaryParams {
    pub fn new(
        today: MetricRow,
        yesterday: MetricRow,
        average: MetricRow,
        footer_tag: impl Into<String>,
    ) -> Self {
        Self {
            rows: [today, yesterday, average],
            footer_tag: footer_tag.into(),
            delay_threshold: None,
        }
    }

    pub fn delay_threshold(mut self, minutes: f64) -> Self {
        self.delay_threshold = Some(minutes);
        self
    }
}

/// Badge chosen for a metric row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBadge {
    Arrow(TrendState),
    Clock,
    Placeholder,
}

/// Read a delay string as minutes.
///
/// Accepts a leading number with an optional unit: none or `m`/`min` for
/// minutes, `s`/`sec` for seconds, `h`/`hr` for hours. Anything else is
/// unreadable.
pub fn parse_delay_minutes(delay: &str) -> Option<f64> {
    let caps = DELAY_PATTERN.captures(delay)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2).map(|m| m.as_str().to_ascii_lowercase());
    match unit.as_deref() {
        None | Some("") | Some("m") | Some("min") | Some("mins") => Some(value),
        Some("s") | Some("sec") | Some("secs") => Some(value / 60.0),
        Some("h") | Some("hr") | Some("hrs") => Some(value * 60.0),
        Some(other) => {
            tracing::debug!("unknown delay unit {:?} in {:?}", other, delay);
            None
        }
    }
}

pub fn select_badge(row: &MetricRow, threshold: Option<f64>) -> RowBadge {
    if row.show_arrow {
        // `None` suppresses the arrow; the placeholder keeps the columns aligned
        return if row.state.is_visible() {
            RowBadge::Arrow(row.state)
        } else {
            RowBadge::Placeholder
        };
    }
    let (Some(delay), Some(threshold)) = (row.delay.as_deref(), threshold) else {
        return RowBadge::Placeholder;
    };
    let Some(minutes) = parse_delay_minutes(delay) else {
        tracing::debug!("unreadable delay {:?}, treating as absent", delay);
        return RowBadge::Placeholder;
    };
    let threshold = if threshold < 0.0 {
        tracing::debug!("negative delay threshold {} treated as 0", threshold);
        0.0
    } else {
        threshold
    };
    if minutes >= threshold {
        RowBadge::Clock
    } else {
        RowBadge::Placeholder
    }
}

fn row_badge(selection: RowBadge) -> Node {
    let (icon, foreground, background) = match selection {
        RowBadge::Placeholder => {
            return Node::Placeholder(Size::square(ROW_BADGE_DIAMETER));
        }
        RowBadge::Arrow(state) => {
            let encoding = encode_state(state);
            (encoding.icon, Color::White, encoding.color)
        }
        RowBadge::Clock => {
            let warning = encode_status(AlertStatus::Warning);
            (icon::CLOCK, warning.foreground, warning.background)
        }
    };
    Container::new(Image::new(icon).color(foreground))
        .shape(Shape::Circle)
        .background(Background::solid(background))
        .width(ROW_BADGE_DIAMETER)
        .height(ROW_BADGE_DIAMETER)
        .alignment(Alignment::Center)
        .into()
}

fn metric_row(row: &MetricRow, threshold: Option<f64>) -> Node {
    let selection = select_badge(row, threshold);
    Stack::horizontal(vec![
        row_badge(selection),
        Container::new(
            Text::new(row.value.as_str())
                .font(Font::Headline)
                .weight(FontWeight::Semibold),
        )
        .width(VALUE_COLUMN_WIDTH)
        .alignment(Alignment::Trailing)
        .into(),
        Container::new(Text::new(row.label.as_str()).color(Color::Secondary))
            .padding(EdgeInsets::horizontal(4))
            .into(),
        Node::Spacer,
    ])
    .spacing(4)
    .into()
}

pub fn metric_summary(params: &MetricSummaryParams) -> Node {
    let mut column: Vec<Node> = params
        .rows
        .iter()
        .map(|row| metric_row(row, params.delay_threshold))
        .collect();

    column.push(
        Stack::horizontal(vec![
            Node::Spacer,
            badge(
                BadgeContent::text(params.footer_tag.as_str()),
                BadgeOptions::default()
                    .colors(Color::White, palette::SYSTEM_GRAY)
                    .font(Font::Caption)
                    .padding(4),
            ),
        ])
        .into(),
    );

    Stack::vertical(column)
        .spacing(4)
        .alignment(Alignment::Leading)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use p42_core::color_for;

    fn plain(label: &str) -> MetricRow {
        MetricRow::new(label, "0")
    }

    #[test]
    fn test_arrow_wins() {
        let row = plain("today").arrow(TrendState::Up).delay("90m");
        assert_eq!(select_badge(&row, Some(15.0)), RowBadge::Arrow(TrendState::Up));
    }

    #[test]
    fn test_arrow_without_state_draws_no_icon() {
        let row = plain("today").arrow(TrendState::None);
        assert_eq!(select_badge(&row, Some(15.0)), RowBadge::Placeholder);

        let params = MetricSummaryParams::new(
            MetricRow::new("today", "1.204").arrow(TrendState::None),
            plain("yesterday"),
            plain("average"),
            "orders",
        );
        assert!(metric_summary(&params).icons().is_empty());
    }

    #[test]
    fn test_arrow_badge_color_matches_state() {
        let node = row_badge(RowBadge::Arrow(TrendState::Up));
        let Node::Container(c) = node else {
            panic!("arrow badge should be a container");
        };
        assert_eq!(c.background.color(), Some(color_for(TrendState::Up)));
        assert_eq!(c.shape, Shape::Circle);
    }

    #[test]
    fn test_delay_over_threshold_shows_clock() {
        let row = plain("yesterday").delay("20m");
        assert_eq!(select_badge(&row, Some(15.0)), RowBadge::Clock);
        let equal = plain("yesterday").delay("15m");
        assert_eq!(select_badge(&equal, Some(15.0)), RowBadge::Clock);
    }

    #[test]
    fn test_delay_under_threshold_is_placeholder() {
        let row = plain("yesterday").delay("5m");
        assert_eq!(select_badge(&row, Some(15.0)), RowBadge::Placeholder);
    }

    #[test]
    fn test_missing_delay_or_threshold_is_placeholder() {
        assert_eq!(select_badge(&plain("a"), Some(15.0)), RowBadge::Placeholder);
        assert_eq!(
            select_badge(&plain("a").delay("20m"), None),
            RowBadge::Placeholder
        );
        assert_eq!(
            select_badge(&plain("a").delay("soon"), Some(1.0)),
            RowBadge::Placeholder
        );
    }

    #[test]
    fn test_negative_threshold_counts_as_zero() {
        assert_eq!(
            select_badge(&plain("a").delay("0m"), Some(-5.0)),
            RowBadge::Clock
        );
    }

    #[test]
    fn test_placeholder_matches_badge_width() {
        let clock = row_badge(RowBadge::Clock);
        let Node::Container(c) = &clock else {
            panic!("clock badge should be a container");
        };
        assert_eq!(c.frame.width, Some(ROW_BADGE_DIAMETER));
        assert_eq!(
            row_badge(RowBadge::Placeholder),
            Node::Placeholder(Size::square(ROW_BADGE_DIAMETER))
        );
        assert_eq!(clock.icons(), vec![&icon::CLOCK]);
    }

    #[test]
    fn test_parse_delay_units() {
        assert_eq!(parse_delay_minutes("20m"), Some(20.0));
        assert_eq!(parse_delay_minutes(" 7 "), Some(7.0));
        assert_eq!(parse_delay_minutes("90s"), Some(1.5));
        assert_eq!(parse_delay_minutes("2h"), Some(120.0));
        assert_eq!(parse_delay_minutes("2.5 min"), Some(2.5));
        assert_eq!(parse_delay_minutes("3d"), None);
        assert_eq!(parse_delay_minutes("-3m"), None);
        assert_eq!(parse_delay_minutes(""), None);
    }

    #[test]
    fn test_card_layout() {
        let params = MetricSummaryParams::new(
            MetricRow::new("today", "1.204").arrow(TrendState::Down),
            MetricRow::new("yesterday", "1.311").delay("20m"),
            MetricRow::new("average", "1.250"),
            "orders",
        )
        .delay_threshold(15.0);
        let node = metric_summary(&params);

        assert_eq!(
            node.texts(),
            vec!["1.204", "today", "1.311", "yesterday", "1.250", "average", "orders"]
        );
        assert_eq!(
            node.icons(),
            vec![&icon::ARROW_DOWN, &icon::CLOCK],
            "arrow on the first row, clock on the second, nothing on the third"
        );
    }
}
