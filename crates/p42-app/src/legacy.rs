//! Adapters for the older component prop shapes
//!
//! Earlier widget payloads used camelCase keys, a few misspelled ones
//! (`secundaryValue`) and component names that have since been merged into
//! the canonical builders. These structs deserialize those payloads and
//! convert into the canonical parameter structs; nothing renders them
//! directly.

use p42_core::{AlertStatus, BadgeContent, Color, IconId, TrendState};
use serde::{Deserialize, Serialize};

use crate::tree::Node;
use crate::views::{
    self, BadgeOptions, FooterParams, HeaderParams, NumberAndStateParams, NumberAndStatusParams,
};

/// `BadgedLabel`: text badge with explicit colors
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyBadgedLabel {
    pub label_color: Color,
    pub background_color: Color,
    pub label_value: String,
    #[serde(default)]
    pub padding: Option<u16>,
}

impl LegacyBadgedLabel {
    pub fn into_parts(self) -> (BadgeContent, BadgeOptions) {
        let mut options = BadgeOptions::default().colors(self.label_color, self.background_color);
        if let Some(padding) = self.padding {
            options = options.padding(padding);
        }
        (BadgeContent::Text(self.label_value), options)
    }

    pub fn into_badge(self) -> Node {
        let (content, options) = self.into_parts();
        views::badge(content, options)
    }
}

/// `NumberAndStatView`: number row keyed by `secondaryStatus` or `widgetStatus`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyNumberAndStatView {
    pub period: String,
    pub primary_value: String,
    #[serde(default)]
    pub primary_color: Color,
    #[serde(default)]
    pub secondary_label: Option<String>,
    #[serde(alias = "secundaryValue")]
    pub secondary_value: String,
    #[serde(default, alias = "widgetStatus")]
    pub secondary_status: AlertStatus,
}

impl From<LegacyNumberAndStatView> for NumberAndStatusParams {
    fn from(legacy: LegacyNumberAndStatView) -> Self {
        Self {
            period: legacy.period,
            primary_value: legacy.primary_value,
            primary_color: legacy.primary_color,
            secondary_label: legacy.secondary_label,
            secondary_value: legacy.secondary_value,
            status: legacy.secondary_status,
        }
    }
}

/// `NumberAndStateView`, including the misspelled `secundary*` keys
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyNumberAndStateView {
    pub period: String,
    pub primary_value: String,
    #[serde(default)]
    pub primary_annotation: Option<String>,
    #[serde(default)]
    pub primary_color: Color,
    #[serde(alias = "secundaryValue")]
    pub secondary_value: String,
    #[serde(default, alias = "secundaryColor")]
    pub secondary_color: Color,
    #[serde(default, alias = "stateLogic", alias = "widgetState")]
    pub state: TrendState,
}

impl From<LegacyNumberAndStateView> for NumberAndStateParams {
    fn from(legacy: LegacyNumberAndStateView) -> Self {
        Self {
            period: legacy.period,
            primary_value: legacy.primary_value,
            primary_annotation: legacy.primary_annotation,
            primary_color: legacy.primary_color,
            secondary_value: legacy.secondary_value,
            secondary_color: legacy.secondary_color,
            state: legacy.state,
        }
    }
}

/// `FooterView`: the topic used to be called `shop`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyFooterView {
    #[serde(alias = "topic")]
    pub shop: String,
    /// Shown dimmed at the trailing edge
    #[serde(default)]
    pub last_update: Option<String>,
}

impl From<LegacyFooterView> for FooterParams {
    fn from(legacy: LegacyFooterView) -> Self {
        let params = FooterParams::new(legacy.shop);
        match legacy.last_update {
            Some(text) => {
                let trailing = views::last_update(text, &params.options);
                params.trailing(trailing)
            }
            None => params,
        }
    }
}

/// `HeaderView`: title bar with an explicit background
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyHeaderView {
    pub title: String,
    #[serde(default)]
    pub icon: Option<IconId>,
    #[serde(default)]
    pub background: Option<Color>,
    #[serde(default)]
    pub connectivity: Option<Color>,
    #[serde(default, alias = "helpText")]
    pub help: Option<String>,
}

impl From<LegacyHeaderView> for HeaderParams {
    fn from(legacy: LegacyHeaderView) -> Self {
        let connectivity = legacy
            .connectivity
            .unwrap_or(p42_core::color::palette::GREEN);
        let mut params = HeaderParams::new(legacy.title, connectivity);
        if let Some(icon) = legacy.icon {
            params = params.icon(icon);
        }
        if let Some(help) = legacy.help {
            params = params.help_text(help);
        }
        if let Some(background) = legacy.background {
            params.options.background = background;
        }
        params
    }
}
