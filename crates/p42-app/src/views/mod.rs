//! Component builders
//!
//! One canonical builder per component. Each takes an immutable parameter
//! struct (plus an options struct with documented defaults) and returns a
//! [`Node`](crate::tree::Node). Colors and icons for states and statuses
//! always come from [`p42_core::encoding`].

mod badge;
mod footer;
mod funnel;
mod header;
mod metric_summary;
mod number_and_state;
mod number_and_status;

pub use badge::{badge, BadgeOptions};
pub use footer::{footer, last_update, FooterOptions, FooterParams};
pub use funnel::{format_percentage, funnel, funnel_row, FunnelOptions, FunnelParams};
pub use header::{header, Header, HeaderOptions, HeaderParams};
pub use metric_summary::{
    metric_summary, parse_delay_minutes, select_badge, MetricRow, MetricSummaryParams, RowBadge,
};
pub use number_and_state::{number_and_state, NumberAndStateParams};
pub use number_and_status::{number_and_status, NumberAndStatusParams};

/// Diameter of the round badges leading metric and funnel rows
pub const ROW_BADGE_DIAMETER: u16 = 20;

/// Padding around secondary values and trend icons
pub const SECONDARY_PADDING: u16 = 5;

/// Vertical spacing inside number rows
pub const ROW_SPACING: u16 = 5;

/// Horizontal inset of number rows
pub const ROW_INSET: u16 = 10;
