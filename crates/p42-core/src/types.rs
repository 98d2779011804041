//! Domain types consumed by the widget builders.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::icon::IconId;

/// Directional change of a metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendState {
    Up,
    Down,
    Neutral,
    /// No indicator at all
    #[default]
    None,
}

impl TrendState {
    pub const ALL: [TrendState; 4] = [
        TrendState::Up,
        TrendState::Down,
        TrendState::Neutral,
        TrendState::None,
    ];

    /// Whether a trend indicator should be drawn
    pub fn is_visible(self) -> bool {
        self != TrendState::None
    }
}

impl std::fmt::Display for TrendState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendState::Up => write!(f, "up"),
            TrendState::Down => write!(f, "down"),
            TrendState::Neutral => write!(f, "neutral"),
            TrendState::None => write!(f, "none"),
        }
    }
}

/// Severity classification, independent of [`TrendState`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Alert,
    Warning,
    Normal,
    #[default]
    None,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 4] = [
        AlertStatus::Alert,
        AlertStatus::Warning,
        AlertStatus::Normal,
        AlertStatus::None,
    ];
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertStatus::Alert => write!(f, "alert"),
            AlertStatus::Warning => write!(f, "warning"),
            AlertStatus::Normal => write!(f, "normal"),
            AlertStatus::None => write!(f, "none"),
        }
    }
}

/// What a badge shows: literal text or a named icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeContent {
    Text(String),
    Icon(IconId),
}

impl BadgeContent {
    pub fn text(text: impl Into<String>) -> Self {
        BadgeContent::Text(text.into())
    }

    pub fn icon(icon: impl Into<IconId>) -> Self {
        BadgeContent::Icon(icon.into())
    }
}

/// One row of a funnel card.
///
/// `percentage` is interpreted in `[0, 100]`; see [`FunnelItem::clamped_percentage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelItem {
    pub id: String,
    pub label: String,
    pub percentage: f64,
    pub color: Color,
    pub icon: IconId,
    #[serde(default = "default_icon_color")]
    pub icon_color: Color,
}

fn default_icon_color() -> Color {
    Color::White
}

impl FunnelItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        percentage: f64,
        color: Color,
        icon: impl Into<IconId>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            percentage,
            color,
            icon: icon.into(),
            icon_color: default_icon_color(),
        }
    }

    pub fn with_icon_color(mut self, color: Color) -> Self {
        self.icon_color = color;
        self
    }

    /// Percentage clamped to `[0, 100]`. NaN counts as 0.
    pub fn clamped_percentage(&self) -> f64 {
        if self.percentage.is_nan() {
            tracing::debug!("funnel item {:?} has NaN percentage, using 0", self.id);
            return 0.0;
        }
        let clamped = self.percentage.clamp(0.0, 100.0);
        if clamped != self.percentage {
            tracing::debug!(
                "funnel item {:?} percentage {} clamped to {}",
                self.id,
                self.percentage,
                clamped
            );
        }
        clamped
    }

    /// Fraction of the row covered by the proportional fill
    pub fn fraction(&self) -> f64 {
        self.clamped_percentage() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon;

    fn item(pct: f64) -> FunnelItem {
        FunnelItem::new("visits", "Visits", pct, Color::from_hex(0x007AFF), icon::DOT)
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&TrendState::Up).unwrap(), "\"up\"");
        assert_eq!(
            serde_json::to_string(&AlertStatus::Warning).unwrap(),
            "\"warning\""
        );
        let s: AlertStatus = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(s, AlertStatus::None);
    }

    #[test]
    fn test_trend_visibility() {
        assert!(TrendState::Up.is_visible());
        assert!(TrendState::Neutral.is_visible());
        assert!(!TrendState::None.is_visible());
    }

    #[test]
    fn test_percentage_clamps() {
        assert_eq!(item(25.0).clamped_percentage(), 25.0);
        assert_eq!(item(-4.0).clamped_percentage(), 0.0);
        assert_eq!(item(140.0).clamped_percentage(), 100.0);
        assert_eq!(item(f64::NAN).clamped_percentage(), 0.0);
        assert_eq!(item(50.0).fraction(), 0.5);
    }

    #[test]
    fn test_funnel_item_defaults_white_icon() {
        assert_eq!(item(1.0).icon_color, Color::White);
        let json = r##"{"id":"a","label":"A","percentage":10,"color":"#ff2500","icon":"cart"}"##;
        let parsed: FunnelItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.icon_color, Color::White);
        assert_eq!(parsed.icon.as_str(), "cart");
    }

    #[test]
    fn test_badge_content_constructors() {
        assert_eq!(BadgeContent::text("42%"), BadgeContent::Text("42%".into()));
        assert!(matches!(BadgeContent::icon("bolt"), BadgeContent::Icon(_)));
    }
}
