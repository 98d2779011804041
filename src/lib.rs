//! P42 Widgets
//!
//! Dashboard widget components (badges, headers, number rows, metric summary
//! and funnel cards) built as layout trees, plus a terminal host that draws
//! them with ratatui.
//!
//! The workspace crates:
//! - `p42-core` - domain types, colors, icons, the state/status encoding
//! - `p42-app` - layout tree, component builders, disclosure state, settings
//! - `p42-tui` - terminal host

// Re-export main entry points
pub use p42_app::config::{self, load_settings, Settings};
pub use p42_app::{legacy, tree, views, Disclosure, Message, Node};
pub use p42_core::{
    encoding, AlertStatus, BadgeContent, Color, Error, FunnelItem, IconId, Result, TrendState,
};
pub use p42_tui::{measure, render_node, tap_at, RenderContext, Scale, TapRegion, WidgetView};

/// Logging setup, see [`p42_core::logging`]
pub use p42_core::logging;

/// Settings and render context for a project directory.
///
/// Reads `<dir>/.p42/widgets.toml`, falling back to defaults.
pub fn host_context(dir: &std::path::Path) -> (Settings, RenderContext) {
    let settings = load_settings(dir);
    let ctx = RenderContext::from_settings(&settings);
    tracing::debug!(icons = %settings.ui.icons, "host context ready");
    (settings, ctx)
}
