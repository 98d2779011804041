//! p42-tui - Terminal host for P42 widgets
//!
//! Interprets the layout trees built by `p42-app` onto a ratatui buffer.
//! Trees are sized in layout points; [`Scale`] maps them to cells.

pub mod layout;
pub mod render;
pub mod theme;
pub mod widget;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use layout::{measure, Scale};
pub use render::{render_node, tap_at, RenderContext, TapRegion};
pub use theme::IconSet;
pub use widget::WidgetView;
