//! Configuration types for P42 widgets
//!
//! Defines:
//! - `Settings` - All settings from `.p42/widgets.toml`
//! - One section struct per component, plus the terminal host section

use serde::{Deserialize, Serialize};

use crate::views::{BadgeOptions, FunnelOptions, HeaderOptions};

/// Settings file (.p42/widgets.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub badge: BadgeSettings,

    #[serde(default)]
    pub header: HeaderSettings,

    #[serde(default)]
    pub metric_summary: MetricSummarySettings,

    #[serde(default)]
    pub funnel: FunnelSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

/// Icon glyph set for hosts that draw icons as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal (default)
    #[default]
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Glyph set for icons
    #[serde(default)]
    pub icons: IconMode,
}

/// Badge defaults
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BadgeSettings {
    /// Padding on every edge, in points
    #[serde(default = "default_badge_padding")]
    pub padding: u16,
}

impl Default for BadgeSettings {
    fn default() -> Self {
        Self {
            padding: default_badge_padding(),
        }
    }
}

fn default_badge_padding() -> u16 {
    10
}

/// Header defaults
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeaderSettings {
    #[serde(default = "default_header_height")]
    pub height: u16,

    #[serde(default = "default_header_icon_size")]
    pub icon_size: u16,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            height: default_header_height(),
            icon_size: default_header_icon_size(),
        }
    }
}

fn default_header_height() -> u16 {
    30
}

fn default_header_icon_size() -> u16 {
    16
}

/// Metric summary defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MetricSummarySettings {
    /// Delay (minutes) from which rows show the clock badge; unset disables it
    #[serde(default)]
    pub delay_threshold_minutes: Option<f64>,
}

/// Funnel defaults
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FunnelSettings {
    #[serde(default = "default_true")]
    pub show_percent_sign: bool,

    #[serde(default = "default_funnel_row_spacing")]
    pub row_spacing: u16,
}

impl Default for FunnelSettings {
    fn default() -> Self {
        Self {
            show_percent_sign: true,
            row_spacing: default_funnel_row_spacing(),
        }
    }
}

fn default_funnel_row_spacing() -> u16 {
    2
}

/// Terminal host settings: how many layout points one cell covers
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuiSettings {
    #[serde(default = "default_points_per_column")]
    pub points_per_column: u16,

    #[serde(default = "default_points_per_row")]
    pub points_per_row: u16,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            points_per_column: default_points_per_column(),
            points_per_row: default_points_per_row(),
        }
    }
}

fn default_points_per_column() -> u16 {
    5
}

fn default_points_per_row() -> u16 {
    10
}

fn default_true() -> bool {
    true
}

impl Settings {
    pub fn badge_options(&self) -> BadgeOptions {
        BadgeOptions::default().padding(self.badge.padding)
    }

    pub fn header_options(&self) -> HeaderOptions {
        HeaderOptions {
            height: self.header.height,
            icon_size: self.header.icon_size,
            ..HeaderOptions::default()
        }
    }

    pub fn funnel_options(&self) -> FunnelOptions {
        FunnelOptions {
            show_percent_sign: self.funnel.show_percent_sign,
            row_spacing: self.funnel.row_spacing,
        }
    }

    /// Check values that would make rendering meaningless
    pub fn validate(&self) -> p42_core::Result<()> {
        if self.tui.points_per_column == 0 || self.tui.points_per_row == 0 {
            return Err(p42_core::Error::config_invalid(
                "tui.points_per_column and tui.points_per_row must be at least 1",
            ));
        }
        if let Some(threshold) = self.metric_summary.delay_threshold_minutes {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(p42_core::Error::config_invalid(format!(
                    "metric_summary.delay_threshold_minutes must be a non-negative number, got {}",
                    threshold
                )));
            }
        }
        Ok(())
    }
}
