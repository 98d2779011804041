//! p42-app - Component builders and state for P42 widgets
//!
//! Every component is a pure function from an immutable parameter struct to a
//! [`Node`] tree. The only state lives in [`Disclosure`], updated through the
//! TEA-style [`disclosure::update`] reducer.

pub mod config;
pub mod disclosure;
pub mod legacy;
pub mod message;
pub mod tree;
pub mod views;

// Re-export primary types
pub use disclosure::Disclosure;
pub use message::Message;
pub use tree::{
    Alignment, Axis, Background, Container, EdgeInsets, Font, FontWeight, Frame, Image, Node,
    Shape, Size, Stack, Text,
};
pub use views::{
    BadgeOptions, FooterOptions, FooterParams, FunnelOptions, FunnelParams, Header,
    HeaderOptions, HeaderParams, MetricRow, MetricSummaryParams, NumberAndStateParams,
    NumberAndStatusParams, RowBadge,
};
